mod cli;
mod commands;
mod config;
mod registry;
mod render;

use crate::cli::Command;

fn main() {
    let app = cli::Cli::build();
    let outcome = commands::run(app.command.unwrap_or(Command::Build(app.build)));

    if let Err(problem) = outcome {
        eprintln!("{problem}");
        std::process::exit(1);
    }
}
