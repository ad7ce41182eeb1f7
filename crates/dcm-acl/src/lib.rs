//! Filesystem access rights for DC Management.
//!
//! This crate provides the named rights that ACL entries grant on files
//! and directories, and nothing that acts on them: no access checks, no
//! filesystem I/O.
//!
//! | Type | Role |
//! |------|------|
//! | [`FileSystemPermission`] | Bitflags over `u32`; the values are a stable wire format |
//! | [`PermissionSpec`] | How config files spell a permission (mask, expression or name list) |
//! | [`ParsePermissionError`] | Failure to read a permission from text |
//!
//! # Crate Architecture
//!
//! ```text
//! dcm-types  (ErrorCode)
//!     ↑
//! dcm-acl    (FileSystemPermission, PermissionSpec)  ◄── THIS CRATE
//! ```
//!
//! # Example
//!
//! ```
//! use dcm_acl::FileSystemPermission;
//!
//! let granted = FileSystemPermission::READ_AND_EXECUTE | FileSystemPermission::WRITE;
//! assert!(granted.grants(FileSystemPermission::TRAVERSE));
//! assert!(!granted.grants(FileSystemPermission::DELETE));
//! assert_eq!(granted.to_string(), "ReadAndExecute | Write");
//! assert_eq!("ReadAndExecute | Write".parse::<FileSystemPermission>(), Ok(granted));
//! ```

pub mod config;
pub mod error;
pub mod names;
pub mod permission;

pub use config::PermissionSpec;
pub use error::ParsePermissionError;
pub use permission::FileSystemPermission;
