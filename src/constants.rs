//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Statement timeout for the point-propagation transaction, in seconds.
/// The fan-out is O(contests x groups x members), so it gets a generous bound.
pub const PROPAGATION_STATEMENT_TIMEOUT_SECONDS: u64 = 15;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// CONTEST DEFAULTS
// =============================================================================

/// Minutes after contest start during which joining is still allowed,
/// when join-window enforcement is enabled
pub const DEFAULT_JOIN_WINDOW_MINUTES: i64 = 10;

/// Wall-clock offset for contest window checks (UTC+5:30), in seconds
pub const CONTEST_CLOCK_OFFSET_SECONDS: i32 = 5 * 3600 + 1800;

/// Minimum divisor when computing a group's per-capita point delta.
/// Prevents very small groups from being disproportionately rewarded
/// or penalized by a repricing event.
pub const GROUP_DELTA_MIN_DIVISOR: i64 = 4;

// =============================================================================
// EXTERNAL JUDGE DEFAULTS
// =============================================================================

/// Courtesy delay before each judge API request, in milliseconds
pub const DEFAULT_JUDGE_REQUEST_DELAY_MS: u64 = 300;

/// Timeout for a single judge API request, in seconds
pub const DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Number of recent LeetCode submissions fetched per verification
pub const LEETCODE_RECENT_SUBMISSION_LIMIT: u32 = 20;

// =============================================================================
// ROLES
// =============================================================================

/// User role constants
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MEMBER: &str = "member";
}
