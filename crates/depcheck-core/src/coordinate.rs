use std::fmt;

use serde::{Serialize, Serializer};

/// The version-independent identity of a library: `group:artifact`.
///
/// Conflict accounting keys on this identity, so two versions of the same
/// library compare equal here while their [`Coordinate`]s differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub group: String,
    pub artifact: String,
}

impl ModuleId {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parse `"group:artifact"`. Both parts must be non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let (group, artifact) = s.split_once(':')?;
        if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
            return None;
        }
        Some(Self::new(group, artifact))
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// Reports carry the id in its `group:artifact` display form.
impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A fully-versioned library coordinate: `group:artifact:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub module: ModuleId,
    pub version: String,
}

impl Coordinate {
    pub fn new(module: ModuleId, version: impl Into<String>) -> Self {
        Self {
            module,
            version: version.into(),
        }
    }

    /// Parse `"group:artifact:version"` shorthand. All parts must be non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        Some(Self {
            module: ModuleId::new(parts[0], parts[1]),
            version: parts[2].to_string(),
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.version)
    }
}
