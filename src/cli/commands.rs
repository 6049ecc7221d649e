//! Command dispatch and handlers.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::TreeStore;
use crate::view::{render_table, ExpandState, TreeStringConvert};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { file, collapsed }) => _show(file, *collapsed),
        Some(Commands::Tree { file }) => _tree(file),
        Some(Commands::Headers { file }) => _headers(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Remove { file, path }) => _remove(file, path),
        None => Ok(()),
    }
}

/// Read and load a payload file into a fresh store.
pub fn load_store(file: &Path) -> CliResult<TreeStore> {
    let bytes = fs::read(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    let store = TreeStore::from_json(&bytes)?;
    debug!(records = store.len(), file = %file.display(), "payload loaded");
    Ok(store)
}

#[instrument]
fn _show(file: &Path, collapsed: bool) -> CliResult<()> {
    let store = load_store(file)?;
    let mut expand = ExpandState::new();
    if !collapsed {
        expand.expand_all(&store);
    }
    print!("{}", render_table(&store, &expand));
    Ok(())
}

#[instrument]
fn _tree(file: &Path) -> CliResult<()> {
    let store = load_store(file)?;
    if store.is_empty() {
        output::info("No data available");
        return Ok(());
    }
    for tree in store.to_tree_strings() {
        println!("{}", tree);
    }
    Ok(())
}

#[instrument]
fn _headers(file: &Path) -> CliResult<()> {
    let store = load_store(file)?;
    for header in store.headers() {
        output::info(header);
    }
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    let store = load_store(file)?;
    for id in store.leaves() {
        if let Some(node) = store.node(id) {
            output::info(&node.label());
        }
    }
    Ok(())
}

#[instrument]
fn _remove(file: &Path, path: &str) -> CliResult<()> {
    let mut store = load_store(file)?;
    let target = store
        .node_at_path(path)
        .ok_or_else(|| CliError::InvalidArgs(format!("no record at path '{}'", path)))?;

    let label = store.node(target).map(|node| node.label()).unwrap_or_default();
    store.remove(target);
    output::action("removed", &label);

    let mut expand = ExpandState::new();
    expand.expand_all(&store);
    print!("{}", render_table(&store, &expand));
    Ok(())
}
