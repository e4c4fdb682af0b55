//! Handler for `depcheck tree`.

use std::path::PathBuf;

use miette::Result;

use depcheck_ops::ops_tree::{self, TreeOptions};

pub fn exec(
    files: &[PathBuf],
    project: Option<String>,
    configuration: Option<String>,
) -> Result<()> {
    let opts = TreeOptions {
        project,
        configuration,
    };
    ops_tree::tree(files, &opts)
}
