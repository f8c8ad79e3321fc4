//! CLI entry point and dispatch.
//!
//! `run()` handles ALL output including errors and returns
//! `Result<(), ExitCode>`; `main.rs` only maps the code to
//! `std::process::exit`. Runtime failures never produce a usage screen --
//! they map to exit codes.

use clap::Parser;

use super::args::{Cli, Commands};
use super::commands;
use crate::exit_codes::ExitCode;
use crate::logging;

/// Parse arguments, set up logging and the async runtime, and dispatch.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("vibeguard: cannot set up logging: {e}");
        return Err(ExitCode::INTERNAL);
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("vibeguard: failed to create async runtime: {e}");
            return Err(ExitCode::INTERNAL);
        }
    };

    let result = rt.block_on(async {
        match &cli.command {
            Commands::Check {
                id,
                tags,
                exclude_tags,
            } => commands::execute_check(&cli, id.as_deref(), tags, exclude_tags).await,
            Commands::Validate => commands::execute_validate(&cli),
            Commands::List => commands::execute_list(&cli),
            Commands::Prompt { id } => commands::execute_prompt(&cli, id.as_deref()),
            Commands::Tags => commands::execute_tags(&cli),
            Commands::Init {
                template,
                list_templates,
                assist,
            } => commands::execute_init(template.as_deref(), *list_templates, *assist),
        }
    });

    match result {
        Ok(code) if code == ExitCode::SUCCESS => Ok(()),
        Ok(code) => Err(code),
        Err(error) => {
            eprintln!("{error}");
            Err(error.to_exit_code())
        }
    }
}
