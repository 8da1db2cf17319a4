//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{hash_string, verify_hash};
pub use time::{format_duration, format_score, needs_refresh, now_utc, parse_solve_time_minutes};
