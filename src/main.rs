#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cvdcli — manage the component views of Katello content view definitions.

mod api;
mod cli;
mod commands;
mod definition;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, write_error};
use definition::errors::exit;
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(exit::USAGE);
        }
    };

    if let Err(err) = cli::logging::init(cli.debug) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, &cli.connection, &ctx) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(code = err.exit_code(), "command failed: {err}");
            let error_output = ErrorOutput::from_action_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
