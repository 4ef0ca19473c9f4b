//! Curio CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use curio::cli::args::*;
use curio::cli::commands::*;

fn run(args: CurioArgs) -> anyhow::Result<()> {
    let command = args.command.name();
    execute_command(args).with_context(|| format!("{command} failed"))
}

fn main() {
    let args = CurioArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // -q
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info, // -v
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(log_level)
        .parse_env("CURIO_LOG")
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
