// src/bin/cli.rs
use clap::Parser;
use nba_stats::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    log::init(log::Sink::FileAndTerminal, args.log_level());
    cli::run(&args)?;
    Ok(())
}
