//! hub-iac CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 4: Template error
//! - 5: Configuration error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod error;

use commands::{Cli, Commands};
use error::CliError;
use hub_iac::IacError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 4;
    pub const CONFIG_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "hub=debug"
    } else if cli.quiet {
        "hub=error"
    } else {
        "hub=info"
    };

    // Logs go to stderr; stdout carries the generated template.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}", level)));
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Template(args) => commands::template::execute(args),
        Commands::Names(args) => commands::names::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(cli_error) = e.downcast_ref::<CliError>() {
        return match cli_error {
            CliError::Config { .. } => ExitCodes::CONFIG_ERROR,
            CliError::InvalidArgument(_) => ExitCodes::INVALID_ARGS,
        };
    }

    match e.downcast_ref::<IacError>() {
        Some(IacError::InvalidConfig(_)) | Some(IacError::Yaml(_)) => ExitCodes::CONFIG_ERROR,
        Some(IacError::UnboundParameter(_)) => ExitCodes::INVALID_ARGS,
        Some(_) => ExitCodes::TEMPLATE_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use anyhow::Context;

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = commands::load_config(Some(Path::new("/nonexistent/stack.yaml"))).unwrap_err();

        assert_eq!(categorize_error(&err), ExitCodes::CONFIG_ERROR);
    }

    #[test]
    fn test_config_error_message_names_each_cause_once() {
        let err = commands::load_config(Some(Path::new("/nonexistent/stack.yaml"))).unwrap_err();
        let message = format!("{:#}", err);

        assert!(message.starts_with("Failed to load config /nonexistent/stack.yaml: IO error: "));
        assert_eq!(message.matches("IO error").count(), 1);
    }

    #[test]
    fn test_invalid_stack_configuration_is_config_error() {
        let err = anyhow::Error::from(IacError::InvalidConfig("bad".to_string()))
            .context("Invalid stack configuration");

        assert_eq!(categorize_error(&err), ExitCodes::CONFIG_ERROR);
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = anyhow::Error::from(CliError::InvalidArgument("unknown resource kind x".into()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);

        let err = anyhow::Error::from(IacError::UnboundParameter("Uuid".to_string()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_template_error_exit_code() {
        let err: anyhow::Error = Err::<(), _>(IacError::DuplicateLogicalId("ApiName".to_string()))
            .context("Failed to build template")
            .unwrap_err();

        assert_eq!(categorize_error(&err), ExitCodes::TEMPLATE_ERROR);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
