//! Filesystem access rights as a 32-bit flags type.
//!
//! [`FileSystemPermission`] names the rights an ACL entry can grant on a
//! file or directory. Its numeric values are a stable storage and wire
//! format: they are persisted in ACLs and exchanged with directory
//! services, so no value may ever change.
//!
//! # Atomic, Aliased and Composite Rights
//!
//! ```text
//! bit  0  ReadData / ListDirectory        ┐
//! bit  1  WriteData / CreateFiles         │
//! bit  2  AppendData / CreateDirectories  │
//! bit  3  ReadExtendedAttributes          │
//! bit  4  WriteExtendedAttributes         │ FullControl
//! bit  5  ExecuteFile / Traverse          │
//! bit  6  DeleteSubdirectoriesAndFiles    │
//! bit  7  ReadAttributes                  │
//! bit  8  WriteAttributes                 │
//! bit 16  Delete                          │
//! bit 17  ReadPermissions                 │
//! bit 18  ChangePermissions               │
//! bit 19  TakeOwnership                   │
//! bit 20  Synchronize                     ┘
//! bit 28  GenericAll       ┐
//! bit 29  GenericExecute   │ generic rights
//! bit 30  GenericWrite     │
//! bit 31  GenericRead      ┘
//! ```
//!
//! Aliases name the same bit in file and directory context. Composites
//! (`Read`, `Write`, `ReadAndExecute`, `Modify`, `FullControl`) are plain
//! unions of the atomic rights.
//!
//! # Example
//!
//! ```
//! use dcm_acl::FileSystemPermission;
//!
//! let mask = FileSystemPermission::READ | FileSystemPermission::DELETE;
//! assert!(mask.grants(FileSystemPermission::READ_PERMISSIONS));
//! assert!(!mask.grants(FileSystemPermission::WRITE_DATA));
//!
//! // Raw masks survive unchanged, named or not.
//! let raw = FileSystemPermission::from_raw(0x0040_0000);
//! assert_eq!(raw.to_raw(), 0x0040_0000);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParsePermissionError;
use crate::names::{self, DESCRIBE_ORDER};

/// Rendering of the empty mask.
const NONE_LABEL: &str = "(none)";

bitflags! {
    /// A set of filesystem access rights.
    ///
    /// | Right | Value |
    /// |-------|-------|
    /// | [`READ`](Self::READ) | `131209` |
    /// | [`WRITE`](Self::WRITE) | `278` |
    /// | [`READ_AND_EXECUTE`](Self::READ_AND_EXECUTE) | `131241` |
    /// | [`MODIFY`](Self::MODIFY) | `197055` |
    /// | [`FULL_CONTROL`](Self::FULL_CONTROL) | `2032127` |
    ///
    /// Any `u32` is a valid mask. Bits outside the named rights are kept
    /// by [`from_raw`](Self::from_raw), `|`, `&`, `^` and `-`, but `!`
    /// clears them; use [`complement_raw`](Self::complement_raw) for a
    /// full 32-bit complement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FileSystemPermission: u32 {
        /// List the contents of a directory.
        const LIST_DIRECTORY = 1;
        /// Read the contents of a file.
        const READ_DATA = 1;
        /// Write to a file.
        const WRITE_DATA = 1 << 1;
        /// Create files in a directory.
        const CREATE_FILES = 1 << 1;
        /// Create subdirectories.
        const CREATE_DIRECTORIES = 1 << 2;
        /// Append to the end of a file.
        const APPEND_DATA = 1 << 2;
        const READ_EXTENDED_ATTRIBUTES = 1 << 3;
        const WRITE_EXTENDED_ATTRIBUTES = 1 << 4;
        /// Pass through a directory to reach its children.
        const TRAVERSE = 1 << 5;
        /// Run a file as a program.
        const EXECUTE_FILE = 1 << 5;
        /// Delete a directory's children regardless of their own rights.
        const DELETE_SUBDIRECTORIES_AND_FILES = 1 << 6;
        const READ_ATTRIBUTES = 1 << 7;
        const WRITE_ATTRIBUTES = 1 << 8;
        /// `WriteData | AppendData | WriteExtendedAttributes | WriteAttributes`
        const WRITE = Self::WRITE_DATA.bits()
            | Self::APPEND_DATA.bits()
            | Self::WRITE_EXTENDED_ATTRIBUTES.bits()
            | Self::WRITE_ATTRIBUTES.bits();
        const DELETE = 1 << 16;
        /// Read the access-control list.
        const READ_PERMISSIONS = 1 << 17;
        /// `ReadData | ReadExtendedAttributes | ReadAttributes | ReadPermissions`
        const READ = Self::READ_DATA.bits()
            | Self::READ_EXTENDED_ATTRIBUTES.bits()
            | Self::READ_ATTRIBUTES.bits()
            | Self::READ_PERMISSIONS.bits();
        /// `Read | Traverse`
        const READ_AND_EXECUTE = Self::READ.bits() | Self::TRAVERSE.bits();
        /// `ReadAndExecute | Write | Delete`
        const MODIFY = Self::READ_AND_EXECUTE.bits() | Self::WRITE.bits() | Self::DELETE.bits();
        /// Change the access-control list.
        const CHANGE_PERMISSIONS = 1 << 18;
        const TAKE_OWNERSHIP = 1 << 19;
        /// Wait on the handle until an I/O operation completes.
        const SYNCHRONIZE = 1 << 20;
        /// Every specific right. Kept as the literal stored value.
        const FULL_CONTROL = 2_032_127;
        const GENERIC_ALL = 1 << 28;
        const GENERIC_EXECUTE = 1 << 29;
        const GENERIC_WRITE = 1 << 30;
        const GENERIC_READ = 1 << 31;
    }
}

impl FileSystemPermission {
    /// The four generic-right markers (bits 28 to 31).
    pub const GENERIC_RIGHTS: Self = Self::GENERIC_ALL
        .union(Self::GENERIC_EXECUTE)
        .union(Self::GENERIC_WRITE)
        .union(Self::GENERIC_READ);

    /// Every single-bit right in bit order, one entry per bit.
    pub const ATOMIC: &'static [Self] = &[
        Self::READ_DATA,
        Self::WRITE_DATA,
        Self::APPEND_DATA,
        Self::READ_EXTENDED_ATTRIBUTES,
        Self::WRITE_EXTENDED_ATTRIBUTES,
        Self::EXECUTE_FILE,
        Self::DELETE_SUBDIRECTORIES_AND_FILES,
        Self::READ_ATTRIBUTES,
        Self::WRITE_ATTRIBUTES,
        Self::DELETE,
        Self::READ_PERMISSIONS,
        Self::CHANGE_PERMISSIONS,
        Self::TAKE_OWNERSHIP,
        Self::SYNCHRONIZE,
        Self::GENERIC_ALL,
        Self::GENERIC_EXECUTE,
        Self::GENERIC_WRITE,
        Self::GENERIC_READ,
    ];

    /// Wraps a raw stored mask without dropping any bit.
    #[must_use]
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Returns the raw mask as stored on the wire.
    #[must_use]
    pub const fn to_raw(self) -> u32 {
        self.bits()
    }

    /// Returns `true` if every bit of `right` is set in this mask.
    ///
    /// This is the `(mask & right) == right` test.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// let mask = FileSystemPermission::MODIFY;
    /// assert!(mask.grants(FileSystemPermission::WRITE));
    /// assert!(!mask.grants(FileSystemPermission::TAKE_OWNERSHIP));
    /// ```
    #[must_use]
    pub const fn grants(self, right: Self) -> bool {
        self.bits() & right.bits() == right.bits()
    }

    /// Flips all 32 bits, including bits no right is named for.
    #[must_use]
    pub const fn complement_raw(self) -> Self {
        Self::from_bits_retain(!self.bits())
    }

    /// Returns `true` if any generic-right marker is set.
    #[must_use]
    pub const fn is_generic(self) -> bool {
        self.intersects(Self::GENERIC_RIGHTS)
    }

    /// Returns the bits of this mask that no named right covers.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// assert_eq!(FileSystemPermission::FULL_CONTROL.unknown_bits(), 0);
    /// assert_eq!(FileSystemPermission::from_raw(0x200).unknown_bits(), 0x200);
    /// ```
    #[must_use]
    pub const fn unknown_bits(self) -> u32 {
        self.bits() & !Self::all().bits()
    }

    /// Computes the rights a child entry may hold.
    ///
    /// The result never exceeds `parent`.
    #[must_use]
    pub fn inherit(parent: Self, requested: Self) -> Self {
        parent & requested
    }

    /// Returns the names describing this mask, widest composite first.
    ///
    /// Bits already described by a composite are not repeated. Aliased
    /// bits use the file-oriented name. Unknown bits are not named.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// let mask = FileSystemPermission::READ
    ///     | FileSystemPermission::TRAVERSE
    ///     | FileSystemPermission::TAKE_OWNERSHIP;
    /// assert_eq!(mask.names(), vec!["ReadAndExecute", "TakeOwnership"]);
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut remaining = self.intersection(Self::all());
        let mut names = Vec::new();
        for (name, perm) in DESCRIBE_ORDER {
            if remaining.contains(*perm) {
                names.push(*name);
                remaining.remove(*perm);
            }
        }
        names
    }

    /// Parses a single right name (case- and separator-insensitive).
    ///
    /// Unlike [`Self::from_name`], which matches the Rust constant
    /// name exactly, this accepts `ReadData`, `READ_DATA`, `read_data`
    /// and aliases such as `ListDirectory`.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// assert_eq!(FileSystemPermission::parse("Modify"), Some(FileSystemPermission::MODIFY));
    /// assert_eq!(FileSystemPermission::parse("full_control"), Some(FileSystemPermission::FULL_CONTROL));
    /// assert_eq!(FileSystemPermission::parse("Fly"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        names::lookup(name)
    }

    /// Parses a list of right names into one mask.
    ///
    /// Returns the combined mask and the names that were not recognized.
    /// Callers decide whether unknown names are an error.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// let (mask, unknown) = FileSystemPermission::parse_list(&["Read", "Delete", "Fly"]);
    /// assert_eq!(mask, FileSystemPermission::READ | FileSystemPermission::DELETE);
    /// assert_eq!(unknown, vec!["Fly"]);
    /// ```
    #[must_use]
    pub fn parse_list<'a>(names: &[&'a str]) -> (Self, Vec<&'a str>) {
        let mut mask = Self::empty();
        let mut unknown = Vec::new();
        for name in names {
            match Self::parse(name) {
                Some(perm) => mask |= perm,
                None => unknown.push(*name),
            }
        }
        if !unknown.is_empty() {
            tracing::debug!(?unknown, "ignoring unknown permission names");
        }
        (mask, unknown)
    }

    fn trace_unknown_bits(self, source: &'static str) {
        let unknown_bits = self.unknown_bits();
        if unknown_bits != 0 {
            tracing::trace!(source, unknown_bits, "permission mask carries unnamed bits");
        }
    }
}

fn parse_token(token: &str) -> Result<FileSystemPermission, ParsePermissionError> {
    let invalid = || ParsePermissionError::InvalidNumber {
        literal: token.to_string(),
    };

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16)
            .map(FileSystemPermission::from_raw)
            .map_err(|_| invalid());
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return token
            .parse::<u32>()
            .map(FileSystemPermission::from_raw)
            .map_err(|_| invalid());
    }
    names::lookup(token).ok_or_else(|| ParsePermissionError::UnknownName {
        name: token.to_string(),
    })
}

impl fmt::Display for FileSystemPermission {
    /// Writes `Name | Name | 0x…`, or `(none)` for the empty mask.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        let unknown = self.unknown_bits();
        if names.is_empty() && unknown == 0 {
            return f.write_str(NONE_LABEL);
        }

        f.write_str(&names.join(" | "))?;
        if unknown != 0 {
            if !names.is_empty() {
                f.write_str(" | ")?;
            }
            write!(f, "{unknown:#x}")?;
        }
        Ok(())
    }
}

impl FromStr for FileSystemPermission {
    type Err = ParsePermissionError;

    /// Parses `|`-separated right names and integer literals.
    ///
    /// Tokens may be names (any spelling [`parse`](Self::parse) accepts),
    /// decimal integers, or `0x` hexadecimal integers. The output of
    /// [`Display`](fmt::Display) always parses back to the same mask.
    ///
    /// # Example
    ///
    /// ```
    /// use dcm_acl::FileSystemPermission;
    ///
    /// let mask: FileSystemPermission = "Read | write_data | 0x10000".parse().unwrap();
    /// assert_eq!(
    ///     mask,
    ///     FileSystemPermission::READ | FileSystemPermission::WRITE_DATA | FileSystemPermission::DELETE
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePermissionError::Empty);
        }
        if s == NONE_LABEL {
            return Ok(Self::empty());
        }

        let mut mask = Self::empty();
        for token in s.split('|') {
            mask |= parse_token(token.trim())?;
        }
        mask.trace_unknown_bits("parse");
        Ok(mask)
    }
}

impl Serialize for FileSystemPermission {
    /// Always the raw `u32`, in every format.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FileSystemPermission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mask = Self::from_raw(u32::deserialize(deserializer)?);
        mask.trace_unknown_bits("deserialize");
        Ok(mask)
    }
}
