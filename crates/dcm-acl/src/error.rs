//! Errors raised while reading permission masks from text.
//!
//! The flags type itself has no failure mode: every `u32` is a valid
//! mask. Only the textual forms (`"Read | Write"`, `"0x116"`, config
//! name lists) can be malformed.

use dcm_types::ErrorCode;
use thiserror::Error;

/// Failure to parse a permission expression.
///
/// # Example
///
/// ```
/// use dcm_acl::{FileSystemPermission, ParsePermissionError};
///
/// let err = "Read | Fly".parse::<FileSystemPermission>().unwrap_err();
/// assert_eq!(
///     err,
///     ParsePermissionError::UnknownName { name: "Fly".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePermissionError {
    /// The input held no tokens at all.
    #[error("empty permission expression")]
    Empty,

    /// A token is neither a known right name nor a number.
    #[error("unknown permission name: '{name}'")]
    UnknownName {
        /// The offending token, trimmed.
        name: String,
    },

    /// A numeric token does not fit in 32 bits or is malformed.
    #[error("invalid permission mask literal: '{literal}'")]
    InvalidNumber {
        /// The offending token, trimmed.
        literal: String,
    },
}

impl ErrorCode for ParsePermissionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "ACL_EMPTY",
            Self::UnknownName { .. } => "ACL_UNKNOWN_NAME",
            Self::InvalidNumber { .. } => "ACL_INVALID_NUMBER",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
