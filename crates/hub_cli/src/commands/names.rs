//! Names command - Preview resolved resource names.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use hub_iac::{NamingStack, ResourceKind};

use super::{load_config, ConfigArgs};
use crate::error::CliError;

#[derive(Args)]
pub struct NamesArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Environment to resolve names for
    #[arg(short, long)]
    environment: String,

    /// Uniqueness token (generated when omitted)
    #[arg(short, long)]
    uuid: Option<String>,

    /// Only show this resource kind (e.g. uploads-bucket)
    #[arg(short, long)]
    kind: Option<String>,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct NameEntry {
    kind: ResourceKind,
    name: String,
}

/// Short random token in the shape used for stack deployments.
fn generate_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}

pub fn execute(args: NamesArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

/// Resolve the requested names and format them as a table or JSON.
pub fn render(args: &NamesArgs) -> Result<String> {
    let config = load_config(args.config.config.as_deref())?;

    if !config.environments.is_empty() && !config.environments.contains(&args.environment) {
        return Err(CliError::InvalidArgument(format!(
            "environment {} is not one of {}",
            args.environment,
            config.environments.join(", ")
        ))
        .into());
    }

    let filter = match &args.kind {
        Some(kind) => Some(ResourceKind::from_str(kind).ok_or_else(|| {
            CliError::InvalidArgument(format!("unknown resource kind {}", kind))
        })?),
        None => None,
    };

    let uuid = match &args.uuid {
        Some(uuid) => uuid.clone(),
        None => {
            let token = generate_token();
            info!("Generated uniqueness token {}", token);
            token
        }
    };

    let stack = NamingStack::new(config).context("Invalid stack configuration")?;
    let names = stack.preview(&stack.bindings(&args.environment, &uuid))?;

    let entries: Vec<NameEntry> = names
        .into_iter()
        .filter(|(kind, _)| filter.map_or(true, |wanted| wanted == *kind))
        .map(|(kind, name)| NameEntry { kind, name })
        .collect();

    if args.json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let width = entries
        .iter()
        .map(|entry| entry.kind.as_str().len())
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("{:width$}  {}", entry.kind.as_str(), entry.name, width = width))
        .collect();
    Ok(lines.join("\n"))
}
