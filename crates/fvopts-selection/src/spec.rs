//! [`SelectionSpec`]: the configured selection mode.

use fvopts_core::{Dictionary, SelectionError};
use std::fmt;

/// Which cells a source applies to, as written in its configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionSpec {
    /// Every cell in the mesh.
    All,
    /// A named cell zone.
    CellZone(String),
    /// A named cell set.
    CellSet(String),
}

impl SelectionSpec {
    /// Parse `selectionMode` and, for `cellZone`/`cellSet`, the entry of the
    /// same name.
    ///
    /// # Errors
    ///
    /// [`SelectionError::Dict`] if a key is missing or not a word,
    /// [`SelectionError::UnsupportedMode`] for any other mode (including
    /// `points`, which needs a mesh search).
    pub fn from_dict(dict: &Dictionary) -> Result<Self, SelectionError> {
        let mode = dict.lookup_word("selectionMode")?;
        match mode {
            "all" => Ok(Self::All),
            "cellZone" => Ok(Self::CellZone(dict.lookup_word("cellZone")?.to_string())),
            "cellSet" => Ok(Self::CellSet(dict.lookup_word("cellSet")?.to_string())),
            other => Err(SelectionError::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }

    /// The `selectionMode` keyword.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CellZone(_) => "cellZone",
            Self::CellSet(_) => "cellSet",
        }
    }
}

impl fmt::Display for SelectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::CellZone(name) => write!(f, "cellZone {name}"),
            Self::CellSet(name) => write!(f, "cellSet {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        let all = Dictionary::new("s").with("selectionMode", "all");
        assert_eq!(SelectionSpec::from_dict(&all).unwrap(), SelectionSpec::All);

        let zone = Dictionary::new("s")
            .with("selectionMode", "cellZone")
            .with("cellZone", "porosity");
        assert_eq!(
            SelectionSpec::from_dict(&zone).unwrap(),
            SelectionSpec::CellZone("porosity".into())
        );

        let set = Dictionary::new("s")
            .with("selectionMode", "cellSet")
            .with("cellSet", "inlet");
        let spec = SelectionSpec::from_dict(&set).unwrap();
        assert_eq!(spec.mode(), "cellSet");
        assert_eq!(spec.to_string(), "cellSet inlet");
    }

    #[test]
    fn zone_mode_requires_zone_name() {
        let d = Dictionary::new("s").with("selectionMode", "cellZone");
        match SelectionSpec::from_dict(&d) {
            Err(SelectionError::Dict(e)) => assert_eq!(e.key(), "cellZone"),
            other => panic!("expected missing cellZone, got {other:?}"),
        }
    }

    #[test]
    fn missing_mode_is_reported() {
        let d = Dictionary::new("s");
        match SelectionSpec::from_dict(&d) {
            Err(SelectionError::Dict(e)) => assert_eq!(e.key(), "selectionMode"),
            other => panic!("expected missing selectionMode, got {other:?}"),
        }
    }

    #[test]
    fn points_mode_is_unsupported() {
        let d = Dictionary::new("s").with("selectionMode", "points");
        assert_eq!(
            SelectionSpec::from_dict(&d),
            Err(SelectionError::UnsupportedMode {
                mode: "points".into()
            })
        );
    }
}
