//! CLI command definitions.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use hub_iac::StackConfig;

use crate::error::CliError;

pub mod names;
pub mod template;

/// hub-iac - CloudFormation naming for the Sutton Information Hub API
#[derive(Parser)]
#[command(name = "hub-iac")]
#[command(version, about = "CloudFormation naming for the Sutton Information Hub API")]
#[command(long_about = r#"
hub-iac generates the CloudFormation naming template for the Sutton
Information Hub API and previews the resource names it produces.

COMMANDS:
  template  → Print or write the naming template (JSON or YAML)
  names     → Preview resolved resource names for an environment

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  4 - Template error
  5 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the naming template
    Template(template::TemplateArgs),

    /// Preview resolved resource names
    Names(names::NamesArgs),
}

/// Load the stack configuration, falling back to defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<StackConfig> {
    match path {
        Some(path) => {
            debug!("Loading stack config from {:?}", path);
            let config = StackConfig::from_file(path).map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(config)
        }
        None => Ok(StackConfig::default()),
    }
}

/// Shared `--config` argument.
#[derive(clap::Args)]
pub struct ConfigArgs {
    /// Stack configuration file (YAML)
    #[arg(short, long, env = "HUB_IAC_CONFIG")]
    pub config: Option<PathBuf>,
}
