use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use dockhosts::errors::Result;

/// Print `--add-host` arguments for the containers of a docker network.
///
/// Reads the output of `docker network inspect <network>` from stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn print_add_hosts() -> Result<()> {
    let hosts = dockhosts::extract(io::stdin().lock())?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", hosts)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let _args = Args::parse();

    if let Err(err) = print_add_hosts() {
        eprint!("Error: ");
        for e in Error::new(err).chain() {
            eprintln!("{}", e);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
