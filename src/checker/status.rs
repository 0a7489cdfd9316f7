// src/checker/status.rs
// =============================================================================
// Maps an HTTP status code to Success or Failure.
//
// We never follow redirects, so the usual redirect codes count as "alive":
// the bookmark still leads somewhere. Everything outside the list below,
// including a missing status, is a failure.
// =============================================================================

use super::types::Outcome;

/// The closed set of status codes that mean "link is alive"
pub const SUCCESS_CODES: [u16; 10] = [200, 203, 206, 300, 301, 302, 303, 304, 307, 308];

/// Classifies a probe's status. `None` means the request never got a reply.
pub fn classify(status: Option<u16>) -> Outcome {
    match status {
        Some(code) if SUCCESS_CODES.contains(&code) => Outcome::Success,
        _ => Outcome::Failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_set() {
        for code in SUCCESS_CODES {
            assert_eq!(classify(Some(code)), Outcome::Success, "code {code}");
        }
    }

    #[test]
    fn test_everything_else_fails() {
        for code in (0..=999u16).filter(|c| !SUCCESS_CODES.contains(c)) {
            assert_eq!(classify(Some(code)), Outcome::Failure, "code {code}");
        }
        assert_eq!(classify(Some(u16::MAX)), Outcome::Failure);
    }

    #[test]
    fn test_missing_status_fails() {
        assert_eq!(classify(None), Outcome::Failure);
    }

    #[test]
    fn test_near_misses() {
        // 2xx and 3xx codes that are deliberately not in the set
        for code in [201, 202, 204, 205, 305, 306] {
            assert_eq!(classify(Some(code)), Outcome::Failure, "code {code}");
        }
    }

    #[test]
    fn test_classification_is_stable() {
        for code in [200, 301, 404, 500] {
            assert_eq!(classify(Some(code)), classify(Some(code)));
        }
    }
}
