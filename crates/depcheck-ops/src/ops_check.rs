//! Operation: check resolved dependency graphs for version conflicts.

use std::path::PathBuf;

use depcheck_core::config::ExcludeMatcher;
use depcheck_core::resolution::DependencySnapshot;
use depcheck_engine::detect::ConflictDetector;
use depcheck_engine::walk;
use depcheck_util::errors::DepcheckError;

/// Output format for `depcheck check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a user-supplied format name.
    pub fn parse(name: &str) -> miette::Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DepcheckError::Generic {
                message: format!("Unknown output format '{other}' (expected 'text' or 'json')"),
            }
            .into()),
        }
    }
}

/// Options for `depcheck check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Exit with a failure when conflicts are found.
    pub fail_on_conflict: bool,
    /// When failing, abort at the first conflict in traversal order
    /// instead of collecting all of them.
    pub fail_fast: bool,
    /// Configuration names to skip, beyond the fixed lint classpath.
    pub exclude: Vec<String>,
    /// How to print the results.
    pub format: OutputFormat,
}

/// Check every resolvable configuration in the given snapshot files for
/// dependency version conflicts.
///
/// In text mode, each conflict is printed as soon as it is detected, with
/// the versions and consumers known at that point. The end-of-run summary
/// (and JSON output) is rendered from the final state instead, so it also
/// carries versions that only showed up after first detection.
pub fn check(inputs: &[PathBuf], opts: &CheckOptions) -> miette::Result<()> {
    let snapshot = DependencySnapshot::from_paths(inputs)?;
    let excludes = ExcludeMatcher::new(&opts.exclude)?;
    // Fail-fast only applies to text output; JSON always emits the full run.
    let fail_fast = opts.fail_fast && opts.format == OutputFormat::Text;

    let mut detector = ConflictDetector::new();

    for project in &snapshot.projects {
        depcheck_util::progress::status(
            "Checking",
            &format!(
                "project {} ({} configurations)",
                project.name,
                project.configurations.len()
            ),
        );

        for configuration in &project.configurations {
            if !configuration.resolvable {
                tracing::debug!(
                    "skipping unresolvable configuration {}:{}",
                    project.name,
                    configuration.name
                );
                continue;
            }
            if excludes.is_excluded(&configuration.name) {
                tracing::debug!(
                    "skipping excluded configuration {}:{}",
                    project.name,
                    configuration.name
                );
                continue;
            }

            let found = walk::walk(&mut detector, &project.name, &configuration.dependencies);
            for conflict in found {
                if opts.fail_on_conflict && fail_fast {
                    return Err(DepcheckError::Conflict {
                        message: conflict.to_string(),
                    }
                    .into());
                }
                if opts.format == OutputFormat::Text {
                    depcheck_util::progress::status_warn(
                        "Conflict",
                        &format!(
                            "{} resolves to {} distinct versions",
                            conflict.module,
                            conflict.versions.len()
                        ),
                    );
                    print!("{conflict}");
                }
            }
        }
    }

    let report = detector.report();

    if opts.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report.conflicts).map_err(|e| {
            DepcheckError::Generic {
                message: format!("Failed to serialize report: {e}"),
            }
        })?;
        println!("{json}");
    }

    if report.is_empty() {
        depcheck_util::progress::status("Finished", "no version conflicts");
        return Ok(());
    }

    let label = if report.len() == 1 {
        "library"
    } else {
        "libraries"
    };
    depcheck_util::progress::status_warn(
        "Finished",
        &format!("{} conflicting {label}", report.len()),
    );

    if opts.fail_on_conflict {
        return Err(DepcheckError::Conflict {
            message: format!("{} conflicting {label} found", report.len()),
        }
        .into());
    }
    Ok(())
}
