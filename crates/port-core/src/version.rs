//! Format-version tags and selection.
//!
//! Every persisted port record and every incoming bundle carries a version
//! string, and that string alone decides which concrete implementation
//! handles the record. Adding a format means adding a variant here and a
//! matching strategy in the application layer; records persisted under an
//! older format keep resolving to their original implementation.

use crate::errors::PortError;

/// Registered versions of the outgoing (generator) port format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorVersion {
    V1_0_0,
}

impl GeneratorVersion {
    /// Version used for all newly created ports. Bumping this is the
    /// entire migration step when a new format ships.
    pub const LATEST: &'static str = "1.0.0";

    /// Resolve a version tag to a registered generator format.
    ///
    /// Exact string match only, no semver range resolution.
    pub fn select(version: Option<&str>) -> Result<Self, PortError> {
        match version {
            None | Some("") => Err(PortError::MissingVersion { role: "generator" }),
            Some("1.0.0") => Ok(Self::V1_0_0),
            Some(other) => Err(PortError::UnsupportedVersion {
                role: "generator",
                version: other.to_string(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0_0 => "1.0.0",
        }
    }
}

/// Registered versions of the incoming (reader) port format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderVersion {
    V1_0_0,
}

impl ReaderVersion {
    /// Version assumed for bundles that do not pin one explicitly. Callers
    /// normally dispatch on the bundle's own tag instead.
    pub const LATEST: &'static str = "1.0.0";

    /// Resolve a version tag to a registered reader format.
    pub fn select(version: Option<&str>) -> Result<Self, PortError> {
        match version {
            None | Some("") => Err(PortError::MissingVersion { role: "reader" }),
            Some("1.0.0") => Ok(Self::V1_0_0),
            Some(other) => Err(PortError::UnsupportedVersion {
                role: "reader",
                version: other.to_string(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_0_0 => "1.0.0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(
                GeneratorVersion::select(Some("1.0.0")).unwrap(),
                GeneratorVersion::V1_0_0
            );
            assert_eq!(
                ReaderVersion::select(Some("1.0.0")).unwrap(),
                ReaderVersion::V1_0_0
            );
        }
    }

    #[test]
    fn test_missing_version_is_rejected() {
        assert!(matches!(
            GeneratorVersion::select(None),
            Err(PortError::MissingVersion { role: "generator" })
        ));
        assert!(matches!(
            GeneratorVersion::select(Some("")),
            Err(PortError::MissingVersion { .. })
        ));
        assert!(matches!(
            ReaderVersion::select(None),
            Err(PortError::MissingVersion { role: "reader" })
        ));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let err = GeneratorVersion::select(Some("9.9.9")).unwrap_err();
        match err {
            PortError::UnsupportedVersion { role, version } => {
                assert_eq!(role, "generator");
                assert_eq!(version, "9.9.9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_latest_resolves() {
        assert_eq!(
            GeneratorVersion::select(Some(GeneratorVersion::LATEST)).unwrap(),
            GeneratorVersion::V1_0_0
        );
        assert_eq!(GeneratorVersion::V1_0_0.as_str(), GeneratorVersion::LATEST);
        assert_eq!(ReaderVersion::V1_0_0.as_str(), ReaderVersion::LATEST);
    }
}
