//! Input validation utilities

use crate::constants::status;

/// Validate assignment status
pub fn validate_status(value: &str) -> Result<(), &'static str> {
    match value {
        status::ONGOING | status::ENDED => Ok(()),
        _ => Err("Status must be 'ongoing' or 'ended'"),
    }
}

/// Validate a scraped URL or path
pub fn validate_url(url: &str) -> Result<(), &'static str> {
    if url.trim().is_empty() {
        return Err("URL cannot be empty");
    }
    if url.chars().any(char::is_whitespace) {
        return Err("URL cannot contain whitespace");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_status() {
        assert!(validate_status("ongoing").is_ok());
        assert!(validate_status("ended").is_ok());
        assert!(validate_status("Ended").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/assignment/12").is_ok());
        assert!(validate_url("/courses/1/assignments/2").is_ok());
        assert!(validate_url("  ").is_err());
        assert!(validate_url("/a b").is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Two\u{0} Sum\n"), "Two Sum");
    }
}
