use serde::{Deserialize, Serialize};
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

/// The configuration name the checker always skips. Lint classpaths pin
/// their own tool versions and routinely disagree with the build proper.
pub const LINT_CLASSPATH_CONFIGURATION: &str = "lintClassPath";

/// Check settings from the `[check]` section of `Depcheck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Treat detected conflicts as a hard failure (nonzero exit).
    #[serde(default, rename = "fail-on-conflict")]
    pub fail_on_conflict: bool,

    /// When failing, abort at the first conflict instead of collecting all.
    #[serde(default = "default_fail_fast", rename = "fail-fast")]
    pub fail_fast: bool,

    /// Configuration names to skip in addition to the lint classpath.
    /// Entries are glob patterns, so `"test*"` skips every test configuration.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            fail_on_conflict: false,
            fail_fast: default_fail_fast(),
            exclude: Vec::new(),
        }
    }
}

fn default_fail_fast() -> bool {
    true
}

/// Top-level shape of a `Depcheck.toml` file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    check: CheckConfig,
}

impl CheckConfig {
    /// Load and parse a `Depcheck.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            depcheck_util::errors::DepcheckError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a `Depcheck.toml` from a string.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| {
            depcheck_util::errors::DepcheckError::Config {
                message: format!("Failed to parse Depcheck.toml: {e}"),
            }
        })?;
        Ok(file.check)
    }
}

/// Decides which configurations a check run skips: the fixed lint
/// classpath name plus any user-supplied glob patterns.
#[derive(Debug)]
pub struct ExcludeMatcher {
    patterns: GlobSet,
}

impl ExcludeMatcher {
    /// Compile user-supplied exclude patterns into a matcher.
    pub fn new(patterns: &[String]) -> miette::Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                depcheck_util::errors::DepcheckError::Config {
                    message: format!("Invalid exclude pattern '{pattern}': {e}"),
                }
            })?;
            builder.add(glob);
        }
        let patterns = builder.build().map_err(|e| {
            depcheck_util::errors::DepcheckError::Config {
                message: format!("Failed to compile exclude patterns: {e}"),
            }
        })?;
        Ok(Self { patterns })
    }

    /// Whether a configuration with this name is skipped.
    pub fn is_excluded(&self, configuration: &str) -> bool {
        configuration == LINT_CLASSPATH_CONFIGURATION || self.patterns.is_match(configuration)
    }
}
