//! CodeArena - Contest Lifecycle & Scoring Engine
//!
//! This library provides the core functionality for the CodeArena
//! platform, a group-based competitive programming arena backed by
//! external judges (LeetCode, Codeforces).
//!
//! # Features
//!
//! - Timed contest admission with per-reason policy rejections
//! - External judge verification with fail-closed semantics
//! - Atomic point propagation across users, groups, and contest ranks
//! - Admin bulk contest mutation applied transactionally
//! - Real-time question push over Redis pub/sub
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod judge;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
