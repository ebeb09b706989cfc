// src/bin/citegraph.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use citegraph_core::cli::{self, handlers, Cli, Commands};
use citegraph_core::exit::CitegraphExit;
use citegraph_core::logging;

fn main() -> CitegraphExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => CitegraphExit::Success,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CitegraphExit::from_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let session = cli::open_session(cli)?;
    dispatch(cli.command.as_ref(), &session)
}

fn dispatch(cmd: Option<&Commands>, session: &cli::Session) -> Result<()> {
    let Some(cmd) = cmd else {
        return handlers::handle_run(session);
    };
    match cmd {
        Commands::Run => handlers::handle_run(session),
        Commands::Build => {
            handlers::handle_build(session);
            Ok(())
        }
        Commands::Find { fragment, limit } => {
            handlers::handle_find(session, fragment, *limit);
            Ok(())
        }
        Commands::Ego { node, format } => handlers::handle_ego(session, node, *format),
        Commands::Path { from, to, format } => handlers::handle_path(session, from, to, *format),
        Commands::Scc { top, format } => handlers::handle_scc(session, *top, *format),
    }
}
