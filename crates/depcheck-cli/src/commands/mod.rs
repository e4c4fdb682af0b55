//! Command dispatch and handler modules.

mod check;
mod tree;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check {
            files,
            deny,
            no_fail_fast,
            exclude,
            format,
            config,
        } => check::exec(&files, deny, no_fail_fast, exclude, &format, config.as_deref()),
        Command::Tree {
            files,
            project,
            configuration,
        } => tree::exec(&files, project, configuration),
    }
}
