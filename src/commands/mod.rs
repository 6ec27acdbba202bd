mod build;
mod clean;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Command;

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Build(args) => build::run_build_command(args),
        Command::Clean(args) => clean::run_clean_command(args),
    }
}

fn resolve_root(root: Option<&str>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(PathBuf::from(path)),
        None => env::current_dir().context("failed to resolve current directory"),
    }
}
