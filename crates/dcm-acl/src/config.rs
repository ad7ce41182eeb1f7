//! Permission values in configuration files.
//!
//! Config files written by people rarely spell out raw masks, so
//! [`PermissionSpec`] accepts three shapes and [`resolve`](PermissionSpec::resolve)
//! turns any of them into a [`FileSystemPermission`]:
//!
//! ```toml
//! share  = 1245631              # raw mask
//! home   = "Modify | Synchronize"
//! backup = ["Read", "take_ownership"]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ParsePermissionError;
use crate::FileSystemPermission;

/// A permission as written in a config file.
///
/// Serializes back in the shape it was read in.
///
/// # Example
///
/// ```
/// use dcm_acl::{FileSystemPermission, PermissionSpec};
///
/// let spec: PermissionSpec = serde_json::from_str(r#"["Read", "Delete"]"#).unwrap();
/// assert_eq!(
///     spec.resolve().unwrap(),
///     FileSystemPermission::READ | FileSystemPermission::DELETE
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionSpec {
    /// A raw mask.
    Bits(u32),
    /// A `|`-separated expression, as accepted by `FromStr`.
    Expr(String),
    /// A list of names or numeric literals, OR-ed together.
    Names(Vec<String>),
}

impl Default for PermissionSpec {
    /// No rights.
    fn default() -> Self {
        Self::Names(Vec::new())
    }
}

impl PermissionSpec {
    /// Resolves the spec into a mask.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParsePermissionError`] found in an expression
    /// or list entry. An empty list resolves to the empty mask.
    pub fn resolve(&self) -> Result<FileSystemPermission, ParsePermissionError> {
        match self {
            Self::Bits(bits) => Ok(FileSystemPermission::from_raw(*bits)),
            Self::Expr(expr) => expr.parse(),
            Self::Names(names) => names.iter().try_fold(
                FileSystemPermission::empty(),
                |mask, name| Ok(mask | name.parse::<FileSystemPermission>()?),
            ),
        }
    }
}

impl From<FileSystemPermission> for PermissionSpec {
    fn from(mask: FileSystemPermission) -> Self {
        Self::Bits(mask.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type P = FileSystemPermission;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct ShareConfig {
        #[serde(default)]
        rights: PermissionSpec,
        mask: Option<P>,
    }

    #[test]
    fn resolves_each_shape() {
        assert_eq!(PermissionSpec::Bits(278).resolve(), Ok(P::WRITE));
        assert_eq!(
            PermissionSpec::Expr("Read | Write".to_string()).resolve(),
            Ok(P::READ | P::WRITE)
        );
        assert_eq!(
            PermissionSpec::Names(vec!["Read".to_string(), "0x10000".to_string()]).resolve(),
            Ok(P::READ | P::DELETE)
        );
    }

    #[test]
    fn default_is_no_rights() {
        assert_eq!(PermissionSpec::default().resolve(), Ok(P::empty()));
    }

    #[test]
    fn first_bad_entry_is_reported() {
        let spec = PermissionSpec::Names(vec![
            "Read".to_string(),
            "Fly".to_string(),
            "Swim".to_string(),
        ]);
        assert_eq!(
            spec.resolve(),
            Err(ParsePermissionError::UnknownName {
                name: "Fly".to_string()
            })
        );
        assert_eq!(
            PermissionSpec::Expr(String::new()).resolve(),
            Err(ParsePermissionError::Empty)
        );
    }

    #[test]
    fn from_mask_is_raw_bits() {
        assert_eq!(
            PermissionSpec::from(P::FULL_CONTROL),
            PermissionSpec::Bits(2_032_127)
        );
    }

    #[test]
    fn toml_shapes() {
        let text = r#"
            share = 1245631
            home = "Modify | Synchronize"
            backup = ["Read", "take_ownership"]
        "#;
        let specs: BTreeMap<String, PermissionSpec> = toml::from_str(text).expect("parse toml");

        assert_eq!(specs["share"], PermissionSpec::Bits(1_245_631));
        assert_eq!(specs["share"].resolve(), specs["home"].resolve());
        assert_eq!(specs["backup"].resolve(), Ok(P::READ | P::TAKE_OWNERSHIP));
    }

    #[test]
    fn toml_struct_roundtrip() {
        let config = ShareConfig {
            rights: PermissionSpec::Expr("ReadAndExecute".to_string()),
            mask: Some(P::MODIFY | P::GENERIC_READ),
        };
        let text = toml::to_string(&config).expect("serialize");
        let parsed: ShareConfig = toml::from_str(&text).expect("deserialize");
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_rights_use_default() {
        let parsed: ShareConfig = toml::from_str("").expect("deserialize");
        assert_eq!(parsed.rights, PermissionSpec::default());
        assert_eq!(parsed.mask, None);
    }

    #[test]
    fn json_shapes() {
        let spec: PermissionSpec = serde_json::from_str("131209").expect("bits");
        assert_eq!(spec, PermissionSpec::Bits(131_209));
        let spec: PermissionSpec = serde_json::from_str(r#""GenericAll""#).expect("expr");
        assert_eq!(spec.resolve(), Ok(P::GENERIC_ALL));
    }
}
