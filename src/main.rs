mod check_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod output;
mod split_cmd;
mod view_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match cli.command {
        Command::View(args) => view_cmd::run_view(args, &config),
        Command::Days(args) => view_cmd::run_days(args, &config),
        Command::Pad(args) => view_cmd::run_pad(args, &config),
        Command::Split(args) => split_cmd::run(args, &config),
        Command::Check(args) => check_cmd::run(args, &config),
    }
}
