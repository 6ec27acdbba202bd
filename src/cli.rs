use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stitch", version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    about = "Assemble deployable HTML pages from shared fragments",
    long_about = "stitch composes complete HTML pages from shared fragments (navbar, sidebar, \n\
footer wave) and per-page content. Running it without a subcommand performs a full \n\
build: the clean-URL tree is written at the output root and, when a pages directory \n\
exists, a flat .html mirror is refreshed for local preview."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub build: BuildArgs,
}

impl Cli {
    pub fn build() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    #[command(
        about = "Assemble every page into the output tree",
        long_about = "Read the shared fragments and every page source, rewrite navigation links \n\
and asset paths for each output context, and write the assembled documents.\n\
The build is deterministic: unchanged inputs always produce byte-identical output."
    )]
    Build(BuildArgs),
    #[command(
        about = "Remove the configured output directory",
        long_about = "Delete the out-of-tree output directory named by output_dir in stitch.yaml \n\
and recreate it empty. Refuses to run when output is written in place at the project \n\
root, since the generated files live next to the sources there.",
        alias = "clear"
    )]
    Clean(CleanArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct BuildArgs {
    #[arg(
        long,
        help = "Project root directory (defaults to current directory)",
        long_help = "Specify the project root directory. If not provided, uses the current working directory."
    )]
    pub root: Option<String>,
    #[arg(
        long,
        help = "Skip the legacy flat .html mirror even when the pages directory exists",
        long_help = "Only write the clean-URL tree. By default a pages/ directory also receives \n\
sibling .html files (home.html, about.html, ...) usable for file:// preview."
    )]
    pub no_mirror: bool,
    #[arg(
        short,
        long,
        help = "Print progress information while building",
        long_help = "Show which fragments and page sources are loaded and which pass is running, \n\
in addition to the one line printed per file written."
    )]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CleanArgs {
    #[arg(
        long,
        help = "Project root directory (defaults to current directory)",
        long_help = "Specify the project root directory. If not provided, uses the current working directory."
    )]
    pub root: Option<String>,
}
