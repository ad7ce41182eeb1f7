//! Machine-readable error codes.
//!
//! Every DCM error type implements [`ErrorCode`] so that callers can
//! branch on a stable code instead of matching on display text.

/// Stable, machine-readable identity of an error.
///
/// # Code Format
///
/// - UPPER_SNAKE_CASE, e.g. `"ACL_UNKNOWN_NAME"`
/// - Prefixed with the owning crate's domain (`"ACL_"` for `dcm-acl`)
/// - Never changed once published; callers persist and compare these
///
/// # Example
///
/// ```
/// use dcm_types::ErrorCode;
///
/// enum LookupError {
///     Missing,
///     Busy,
/// }
///
/// impl ErrorCode for LookupError {
///     fn code(&self) -> &'static str {
///         match self {
///             Self::Missing => "LOOKUP_MISSING",
///             Self::Busy => "LOOKUP_BUSY",
///         }
///     }
///
///     fn is_recoverable(&self) -> bool {
///         matches!(self, Self::Busy)
///     }
/// }
///
/// assert!(LookupError::Busy.is_recoverable());
/// assert!(!LookupError::Missing.is_recoverable());
/// ```
pub trait ErrorCode {
    /// Returns the error code.
    fn code(&self) -> &'static str;

    /// Returns `true` if retrying or correcting input may succeed.
    ///
    /// Malformed input is not recoverable: the same text fails again.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that `err` carries a well-formed code with the given prefix.
///
/// Intended for tests of [`ErrorCode`] implementations.
///
/// # Panics
///
/// Panics if the code is empty, lacks `expected_prefix`, or is not
/// UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use dcm_types::{assert_error_code, ErrorCode};
///
/// struct Timeout;
///
/// impl ErrorCode for Timeout {
///     fn code(&self) -> &'static str { "NET_TIMEOUT" }
///     fn is_recoverable(&self) -> bool { true }
/// }
///
/// assert_error_code(&Timeout, "NET_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Runs [`assert_error_code`] over every given error.
///
/// # Panics
///
/// Panics on the first malformed code.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum SampleError {
        Retry,
        Fatal,
    }

    impl ErrorCode for SampleError {
        fn code(&self) -> &'static str {
            match self {
                Self::Retry => "SAMPLE_RETRY",
                Self::Fatal => "SAMPLE_FATAL",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Retry)
        }
    }

    struct LowerCase;

    impl ErrorCode for LowerCase {
        fn code(&self) -> &'static str {
            "SAMPLE_bad"
        }

        fn is_recoverable(&self) -> bool {
            false
        }
    }

    #[test]
    fn codes_and_recoverability() {
        assert_eq!(SampleError::Retry.code(), "SAMPLE_RETRY");
        assert!(SampleError::Retry.is_recoverable());
        assert_eq!(SampleError::Fatal.code(), "SAMPLE_FATAL");
        assert!(!SampleError::Fatal.is_recoverable());
    }

    #[test]
    fn assert_error_codes_accepts_all_variants() {
        assert_error_codes(&[SampleError::Retry, SampleError::Fatal], "SAMPLE_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn wrong_prefix_panics() {
        assert_error_code(&SampleError::Fatal, "ACL_");
    }

    #[test]
    #[should_panic(expected = "must be UPPER_SNAKE_CASE")]
    fn lowercase_code_panics() {
        assert_error_code(&LowerCase, "SAMPLE_");
    }

    #[test]
    fn upper_snake_case_detection() {
        assert!(is_upper_snake_case("ACL"));
        assert!(is_upper_snake_case("ACL_UNKNOWN_NAME"));
        assert!(is_upper_snake_case("ERR_42"));

        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("acl"));
        assert!(!is_upper_snake_case("_ACL"));
        assert!(!is_upper_snake_case("ACL_"));
        assert!(!is_upper_snake_case("ACL__NAME"));
    }
}
