//! Upsolve → original assignment matching
//!
//! Names are compared after whitespace and hyphen normalization. An exact
//! (case-insensitive) pass runs first, then a containment pass in either
//! direction. The first candidate in iteration order wins each pass, so
//! titles sharing a prefix ("HW1" vs "HW10") can resolve to the earlier one.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Assignment;

static UPSOLVE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*upsolve\s*").expect("valid upsolve pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static HYPHEN_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("valid hyphen pattern"));

/// Collapse whitespace and force `" - "` around hyphens
pub fn normalize_assignment_name(name: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(name, " ");
    HYPHEN_SPACING
        .replace_all(&collapsed, " - ")
        .trim()
        .to_string()
}

/// Title of the original assignment an upsolve session refers to
pub fn upsolve_base_name(upsolve_name: &str) -> String {
    let stripped = UPSOLVE_WORD.replace_all(upsolve_name, "");
    normalize_assignment_name(stripped.trim())
}

/// Find the regular assignment an upsolve assignment belongs to
pub fn find_original<'a>(
    upsolve_name: &str,
    candidates: &[&'a Assignment],
) -> Option<&'a Assignment> {
    let base = upsolve_base_name(upsolve_name).to_lowercase();

    let normalized: Vec<(String, &'a Assignment)> = candidates
        .iter()
        .map(|candidate| {
            (
                normalize_assignment_name(&candidate.name).to_lowercase(),
                *candidate,
            )
        })
        .collect();

    normalized
        .iter()
        .find(|(name, _)| *name == base)
        .or_else(|| {
            normalized
                .iter()
                .find(|(name, _)| name.contains(base.as_str()) || base.contains(name.as_str()))
        })
        .map(|(_, assignment)| *assignment)
}
