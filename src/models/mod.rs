//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod assignment;
pub mod problem_result;
pub mod ranking;
pub mod standings;

pub use assignment::*;
pub use problem_result::*;
pub use ranking::*;
pub use standings::*;
