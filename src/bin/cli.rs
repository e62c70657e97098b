// src/bin/cli.rs
use clap::Parser;
use pracus::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _guard = log::init(log::Target::Stderr);
    cli::run(cli::Args::parse())
}
