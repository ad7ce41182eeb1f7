//! Human-readable names for [`FileSystemPermission`] values.
//!
//! Names are PascalCase, as they appear in ACL editors and audit logs.
//! Lookup ignores ASCII case and the separators `_`, `-` and whitespace,
//! so `ReadData`, `READ_DATA`, `read-data` and `read data` all resolve
//! to the same right.

use crate::FileSystemPermission as P;

/// Every named value, aliases included, in table order.
///
/// Aliases appear next to each other (`ListDirectory` then `ReadData`).
pub const WELL_KNOWN: &[(&str, P)] = &[
    ("ListDirectory", P::LIST_DIRECTORY),
    ("ReadData", P::READ_DATA),
    ("WriteData", P::WRITE_DATA),
    ("CreateFiles", P::CREATE_FILES),
    ("CreateDirectories", P::CREATE_DIRECTORIES),
    ("AppendData", P::APPEND_DATA),
    ("ReadExtendedAttributes", P::READ_EXTENDED_ATTRIBUTES),
    ("WriteExtendedAttributes", P::WRITE_EXTENDED_ATTRIBUTES),
    ("Traverse", P::TRAVERSE),
    ("ExecuteFile", P::EXECUTE_FILE),
    ("DeleteSubdirectoriesAndFiles", P::DELETE_SUBDIRECTORIES_AND_FILES),
    ("ReadAttributes", P::READ_ATTRIBUTES),
    ("WriteAttributes", P::WRITE_ATTRIBUTES),
    ("Write", P::WRITE),
    ("Delete", P::DELETE),
    ("ReadPermissions", P::READ_PERMISSIONS),
    ("Read", P::READ),
    ("ReadAndExecute", P::READ_AND_EXECUTE),
    ("Modify", P::MODIFY),
    ("ChangePermissions", P::CHANGE_PERMISSIONS),
    ("TakeOwnership", P::TAKE_OWNERSHIP),
    ("Synchronize", P::SYNCHRONIZE),
    ("FullControl", P::FULL_CONTROL),
    ("GenericAll", P::GENERIC_ALL),
    ("GenericExecute", P::GENERIC_EXECUTE),
    ("GenericWrite", P::GENERIC_WRITE),
    ("GenericRead", P::GENERIC_READ),
];

/// Names used when describing a mask, widest composite first.
///
/// The trailing single-bit entries cover every named bit, so a greedy
/// walk over this list never leaves a named bit undescribed.
pub(crate) const DESCRIBE_ORDER: &[(&str, P)] = &[
    ("FullControl", P::FULL_CONTROL),
    ("Modify", P::MODIFY),
    ("ReadAndExecute", P::READ_AND_EXECUTE),
    ("Read", P::READ),
    ("Write", P::WRITE),
    ("ReadData", P::READ_DATA),
    ("WriteData", P::WRITE_DATA),
    ("AppendData", P::APPEND_DATA),
    ("ReadExtendedAttributes", P::READ_EXTENDED_ATTRIBUTES),
    ("WriteExtendedAttributes", P::WRITE_EXTENDED_ATTRIBUTES),
    ("ExecuteFile", P::EXECUTE_FILE),
    ("DeleteSubdirectoriesAndFiles", P::DELETE_SUBDIRECTORIES_AND_FILES),
    ("ReadAttributes", P::READ_ATTRIBUTES),
    ("WriteAttributes", P::WRITE_ATTRIBUTES),
    ("Delete", P::DELETE),
    ("ReadPermissions", P::READ_PERMISSIONS),
    ("ChangePermissions", P::CHANGE_PERMISSIONS),
    ("TakeOwnership", P::TAKE_OWNERSHIP),
    ("Synchronize", P::SYNCHRONIZE),
    ("GenericAll", P::GENERIC_ALL),
    ("GenericExecute", P::GENERIC_EXECUTE),
    ("GenericWrite", P::GENERIC_WRITE),
    ("GenericRead", P::GENERIC_READ),
];

/// Resolves a single right name, ignoring case and separators.
///
/// # Example
///
/// ```
/// use dcm_acl::{names, FileSystemPermission};
///
/// assert_eq!(names::lookup("take_ownership"), Some(FileSystemPermission::TAKE_OWNERSHIP));
/// assert_eq!(names::lookup("List Directory"), Some(FileSystemPermission::READ_DATA));
/// assert_eq!(names::lookup("Fly"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<P> {
    WELL_KNOWN
        .iter()
        .find(|(canonical, _)| matches_ignoring_separators(canonical, name))
        .map(|(_, perm)| *perm)
}

/// Returns the descriptive name for a value that has one exactly.
///
/// Aliased bits resolve to the file-oriented name (`ReadData`, not
/// `ListDirectory`).
///
/// # Example
///
/// ```
/// use dcm_acl::{names, FileSystemPermission};
///
/// assert_eq!(names::canonical_name(FileSystemPermission::LIST_DIRECTORY), Some("ReadData"));
/// assert_eq!(names::canonical_name(FileSystemPermission::MODIFY), Some("Modify"));
/// assert_eq!(
///     names::canonical_name(FileSystemPermission::READ | FileSystemPermission::DELETE),
///     None
/// );
/// ```
#[must_use]
pub fn canonical_name(perm: P) -> Option<&'static str> {
    DESCRIBE_ORDER
        .iter()
        .find(|(_, candidate)| *candidate == perm)
        .map(|(name, _)| *name)
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

fn matches_ignoring_separators(canonical: &str, input: &str) -> bool {
    let mut input = input.chars().filter(|c| !is_separator(*c));
    canonical
        .chars()
        .all(|c| input.next().is_some_and(|i| i.eq_ignore_ascii_case(&c)))
        && input.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_names_are_unique() {
        for (i, (a, _)) in WELL_KNOWN.iter().enumerate() {
            for (b, _) in &WELL_KNOWN[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_well_known_name_resolves_to_its_value() {
        for (name, perm) in WELL_KNOWN {
            assert_eq!(lookup(name), Some(*perm), "{name}");
        }
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(lookup("READ_AND_EXECUTE"), Some(P::READ_AND_EXECUTE));
        assert_eq!(lookup("read_and_execute"), Some(P::READ_AND_EXECUTE));
        assert_eq!(lookup("read-and-execute"), Some(P::READ_AND_EXECUTE));
        assert_eq!(lookup("  Full Control "), Some(P::FULL_CONTROL));
        assert_eq!(lookup("genericread"), Some(P::GENERIC_READ));
    }

    #[test]
    fn lookup_rejects_prefixes_and_extensions() {
        assert_eq!(lookup("Rea"), None);
        assert_eq!(lookup("ReadDataX"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("___"), None);
    }

    #[test]
    fn aliases_resolve_to_same_bit() {
        assert_eq!(lookup("ListDirectory"), lookup("ReadData"));
        assert_eq!(lookup("CreateFiles"), lookup("WriteData"));
        assert_eq!(lookup("CreateDirectories"), lookup("AppendData"));
        assert_eq!(lookup("Traverse"), lookup("ExecuteFile"));
    }

    #[test]
    fn describe_order_covers_every_named_bit() {
        let covered = DESCRIBE_ORDER
            .iter()
            .filter(|(_, perm)| perm.bits().count_ones() == 1)
            .fold(P::empty(), |acc, (_, perm)| acc | *perm);
        assert_eq!(covered, P::all());
    }

    #[test]
    fn describe_order_names_are_well_known() {
        for (name, perm) in DESCRIBE_ORDER {
            assert_eq!(lookup(name), Some(*perm), "{name}");
        }
    }
}
