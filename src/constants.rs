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

/// Default Redis URL
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

// =============================================================================
// POLLING DEFAULTS
// =============================================================================

/// Snapshot freshness window in seconds (5 minutes)
pub const DEFAULT_POLLING_INTERVAL_SECONDS: u64 = 300;

// =============================================================================
// RANKING RULES
// =============================================================================

/// Marker that turns an assignment into an upsolve session
pub const UPSOLVE_MARKER: &str = "upsolve";

/// Roster name excluded from every ranking
pub const HIDDEN_USER_NAME: &str = "hidden user";

/// Credit for a problem solved inside its regular assignment
pub const BASE_CREDIT: u32 = 1;

/// Credit for a problem solved later in an upsolve session
pub const UPSOLVE_BONUS: f64 = 0.5;

/// Longest entry name still treated as a real problem
pub const MAX_PROBLEM_NAME_LENGTH: usize = 100;

/// Navigation labels the scraper picks up as entries
pub const NAV_TEXT_TOKENS: &[&str] = &[
    "courses",
    "jobs",
    "languages",
    "info",
    "help",
    "rank",
    "group",
    "slv",
    "time",
];

/// Concatenated navigation bar text
pub const NAV_TEXT_RUN: &str = "coursesjobs";

// =============================================================================
// CACHE
// =============================================================================

/// Redis key holding the serialized global ranking
pub const RANKINGS_CACHE_KEY: &str = "upsolve_rank:rankings:v1";

// =============================================================================
// INGEST LIMITS
// =============================================================================

/// Maximum assignment name length accepted by the ingest API
pub const MAX_ASSIGNMENT_NAME_LENGTH: u64 = 200;

/// Maximum URL length accepted by the ingest API
pub const MAX_URL_LENGTH: u64 = 2048;

/// Maximum user name length in a standings row
pub const MAX_USER_NAME_LENGTH: u64 = 200;

/// Header carrying the ingest API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Assignment status values
pub mod status {
    pub const ONGOING: &str = "ongoing";
    pub const ENDED: &str = "ended";
}
