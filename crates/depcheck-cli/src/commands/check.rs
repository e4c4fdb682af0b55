//! Handler for `depcheck check`.

use std::path::{Path, PathBuf};

use miette::Result;

use depcheck_core::config::CheckConfig;
use depcheck_ops::ops_check::{self, CheckOptions, OutputFormat};

pub fn exec(
    files: &[PathBuf],
    deny: bool,
    no_fail_fast: bool,
    exclude: Vec<String>,
    format: &str,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;

    let mut patterns = config.exclude.clone();
    patterns.extend(exclude);

    let opts = CheckOptions {
        fail_on_conflict: deny || config.fail_on_conflict,
        fail_fast: !no_fail_fast && config.fail_fast,
        exclude: patterns,
        format: OutputFormat::parse(format)?,
    };

    ops_check::check(files, &opts)
}

/// Read check settings from an explicit `--config` path, from a
/// `Depcheck.toml` in the current directory, or fall back to defaults.
fn load_config(explicit: Option<&Path>) -> Result<CheckConfig> {
    if let Some(path) = explicit {
        return CheckConfig::from_path(path);
    }
    let local = Path::new("Depcheck.toml");
    if local.is_file() {
        return CheckConfig::from_path(local);
    }
    Ok(CheckConfig::default())
}
