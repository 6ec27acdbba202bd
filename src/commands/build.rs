use anyhow::Result;

use crate::cli::BuildArgs;
use crate::render::{BuildPlan, build_site};

use super::resolve_root;

pub fn run_build_command(args: BuildArgs) -> Result<()> {
    let root = resolve_root(args.root.as_deref())?;
    let plan = BuildPlan {
        mirror: !args.no_mirror,
        verbose: args.verbose,
    };
    build_site(&root, plan)?;
    Ok(())
}
