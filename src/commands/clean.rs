use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::CleanArgs;
use crate::config::{CONFIG_FILE, Config};

use super::resolve_root;

pub fn run_clean_command(args: CleanArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let config = Config::load(root.join(CONFIG_FILE))?;

    if !config.writes_out_of_tree() {
        bail!(
            "refusing to clean: output is written in place at the project root \
             (set output_dir in {CONFIG_FILE} to use clean)"
        );
    }

    // writes_out_of_tree() guarantees output_dir is set here.
    let output_dir = config.output_dir.as_deref().unwrap();
    let out_root = root.join(output_dir);

    let removed = remove_path(&out_root)?;
    ensure_directory(&out_root)?;

    if removed {
        println!("Removed {output_dir}/ and recreated it empty.");
    } else {
        println!("Created empty {output_dir}/ directory (nothing to remove).");
    }

    Ok(())
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to recreate {}", path.display()))?;
    }
    Ok(())
}

fn remove_path(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    if path.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory {}", path.display()))?;
    } else {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove file {}", path.display()))?;
    }

    Ok(true)
}
