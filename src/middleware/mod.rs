//! Middleware components

pub mod auth;
