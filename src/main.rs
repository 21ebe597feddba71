#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod catalog;
mod cli;
mod core;
mod history;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    history::UsageHistory,
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut history = UsageHistory::default();
    match args.command {
        Command::Estimate(args) => cli::estimate(&args, &mut history)?,
        Command::Compare(args) => cli::compare(&args, &mut history)?,
        Command::Catalog => cli::catalog(),
    }

    info!("done!");
    Ok(())
}
