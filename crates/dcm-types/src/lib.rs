//! Shared types for the DC Management crates.
//!
//! Currently this is the error contract every DCM error type implements:
//!
//! ```text
//! dcm-types  (ErrorCode)   ◄── THIS CRATE
//!     ↑
//! dcm-acl    (FileSystemPermission, ParsePermissionError)
//! ```
//!
//! # Example
//!
//! ```
//! use dcm_types::ErrorCode;
//!
//! struct Rejected;
//!
//! impl ErrorCode for Rejected {
//!     fn code(&self) -> &'static str {
//!         "ACL_REJECTED"
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         false
//!     }
//! }
//!
//! assert_eq!(Rejected.code(), "ACL_REJECTED");
//! ```

mod error;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
