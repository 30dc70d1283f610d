//! Template command - Generate the naming template.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;

use hub_iac::NamingStack;

use super::{load_config, ConfigArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Format implied by a file extension, JSON unless it says YAML.
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

#[derive(Args)]
pub struct TemplateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format [default: from the --output extension, else json]
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Write the template to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl TemplateArgs {
    /// An explicit `--format` wins over the output file extension.
    fn resolved_format(&self) -> Format {
        match (self.format, &self.output) {
            (Some(format), _) => format,
            (None, Some(path)) => Format::for_path(path),
            (None, None) => Format::Json,
        }
    }
}

pub fn execute(args: TemplateArgs) -> Result<()> {
    let rendered = render(&args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write template to {}", path.display()))?;
            info!("Template written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Build the naming template and serialize it in the requested format.
pub fn render(args: &TemplateArgs) -> Result<String> {
    let config = load_config(args.config.config.as_deref())?;
    let stack = NamingStack::new(config).context("Invalid stack configuration")?;
    let template = stack.build_template().context("Failed to build template")?;

    let rendered = match args.resolved_format() {
        Format::Json => template.to_json()?,
        Format::Yaml => template.to_yaml()?,
    };
    Ok(rendered)
}
