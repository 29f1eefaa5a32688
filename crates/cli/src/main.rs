//! kibitz entry point: argument parsing, logging setup, and command
//! dispatch. Exit codes: 0 clean, 1 suggestions/conflicts found, 2 usage
//! or load error.

mod cmd_fix;
mod cmd_init;
mod cmd_scan;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use kibitz::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    init_logging(verbose(&cli.command));

    let outcome = match &cli.command {
        Command::Scan(args) => cmd_scan::run(&cli, args),
        Command::Fix(args) => cmd_fix::run(&cli, args),
        Command::Init(args) => cmd_init::run(args),
        Command::Completions(args) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
            Ok(0)
        }
    };

    let code = match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            2
        }
    };
    std::process::exit(code);
}

fn verbose(command: &Command) -> bool {
    match command {
        Command::Scan(args) => args.verbose,
        Command::Fix(args) => args.verbose,
        _ => false,
    }
}

/// RUST_LOG wins; otherwise -v raises kibitz to debug.
fn init_logging(verbose: bool) {
    let default = if verbose { "kibitz=debug" } else { "kibitz=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
