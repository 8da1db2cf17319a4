//! Assignment ingest request DTOs

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    constants::{MAX_ASSIGNMENT_NAME_LENGTH, MAX_URL_LENGTH, MAX_USER_NAME_LENGTH, status},
    models::ProblemCell,
    utils::validation::{validate_status, validate_url},
};

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn status_rule(value: &str) -> Result<(), ValidationError> {
    validate_status(value).map_err(|message| rule_error("status", message))
}

fn url_rule(value: &str) -> Result<(), ValidationError> {
    validate_url(value).map_err(|message| rule_error("url", message))
}

fn default_status() -> String {
    status::ENDED.to_string()
}

/// Parsed assignment page
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertAssignmentRequest {
    #[validate(length(min = 1, max = MAX_ASSIGNMENT_NAME_LENGTH))]
    pub name: String,

    /// Stable identity of the assignment
    #[validate(length(min = 1, max = MAX_URL_LENGTH), custom(function = "url_rule"))]
    pub url: String,

    /// `ongoing` or `ended`
    #[serde(default = "default_status")]
    #[validate(custom(function = "status_rule"))]
    pub status: String,

    /// Problem links in page order; navigation text is filtered out
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
}

/// One problem link of an assignment page
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Parsed standings table
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceStandingsRequest {
    /// Column headers; `rows[i].problems[j]` belongs to `problem_names[j]`
    pub problem_names: Vec<String>,

    #[validate(nested)]
    pub rows: Vec<StandingsRowRequest>,
}

/// One user's standings row
#[derive(Debug, Deserialize, Validate)]
pub struct StandingsRowRequest {
    #[validate(length(min = 1, max = MAX_USER_NAME_LENGTH))]
    pub name: String,

    #[serde(default)]
    pub rank: i32,

    /// Defaults to the number of solved cells
    pub solved_count: Option<i32>,

    #[serde(default)]
    pub total_time_minutes: i32,

    #[serde(default)]
    pub problems: Vec<ProblemCell>,
}
