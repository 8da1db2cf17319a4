//! Problem name identity and scraping-artifact filtering

use crate::constants::{MAX_PROBLEM_NAME_LENGTH, NAV_TEXT_RUN, NAV_TEXT_TOKENS};

/// Identity key of a problem: trimmed and lower-cased
pub fn normalize_problem_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether an entry name looks like a real problem rather than navigation text
pub fn is_valid_problem_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_PROBLEM_NAME_LENGTH {
        return false;
    }

    let lower = trimmed.to_lowercase();
    !NAV_TEXT_TOKENS.contains(&lower.as_str()) && !lower.contains(NAV_TEXT_RUN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_problem_name() {
        assert_eq!(normalize_problem_name("  Two Sum "), "two sum");
        assert_eq!(normalize_problem_name("two sum"), normalize_problem_name("Two Sum"));
    }

    #[test]
    fn test_is_valid_problem_name() {
        assert!(is_valid_problem_name("Hello World!"));
        assert!(is_valid_problem_name("Timekeeping"));
        assert!(!is_valid_problem_name(""));
        assert!(!is_valid_problem_name("   "));
        assert!(!is_valid_problem_name("Rank"));
        assert!(!is_valid_problem_name(" TIME "));
        assert!(!is_valid_problem_name("CoursesJobsLanguages"));
        assert!(!is_valid_problem_name(&"x".repeat(101)));
        assert!(is_valid_problem_name(&"x".repeat(100)));
    }
}
