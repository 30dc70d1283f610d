//! CloudFormation template document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::error::{IacError, IacResult};
use crate::expr::Expr;
use crate::parameter::Parameter;

/// Template format version understood by CloudFormation.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// Description of the stack template.
pub const TEMPLATE_DESCRIPTION: &str =
    "Create the infrastructure needed to run the Healthy London Partnership API";

/// A named template output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(skip)]
    pub logical_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: Expr,
}

impl Output {
    pub fn new(logical_id: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            logical_id: logical_id.into(),
            description: None,
            value: value.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Template being assembled. Parameters and outputs serialize in the order
/// they were added.
#[derive(Debug, Clone, Default)]
pub struct Template {
    version: Option<String>,
    description: Option<String>,
    parameters: Vec<Parameter>,
    outputs: Vec<Output>,
}

impl Template {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn add_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn add_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn parameter(&self, logical_id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.logical_id == logical_id)
    }

    pub fn output(&self, logical_id: &str) -> Option<&Output> {
        self.outputs.iter().find(|o| o.logical_id == logical_id)
    }

    /// Declare a parameter. Returns a clone usable as a `Ref` target.
    pub fn add_parameter(&mut self, parameter: Parameter) -> IacResult<Parameter> {
        self.ensure_unique(&parameter.logical_id)?;
        debug!("Adding parameter {}", parameter.logical_id);
        self.parameters.push(parameter.clone());
        Ok(parameter)
    }

    pub fn add_output(&mut self, output: Output) -> IacResult<()> {
        self.ensure_unique(&output.logical_id)?;
        debug!("Adding output {}", output.logical_id);
        self.outputs.push(output);
        Ok(())
    }

    // Parameters and outputs share one logical id namespace.
    fn ensure_unique(&self, logical_id: &str) -> IacResult<()> {
        let taken = self.parameters.iter().any(|p| p.logical_id == logical_id)
            || self.outputs.iter().any(|o| o.logical_id == logical_id);

        if taken {
            return Err(IacError::DuplicateLogicalId(logical_id.to_string()));
        }
        Ok(())
    }

    /// Check that every reference in an output names a declared parameter.
    pub fn validate(&self) -> IacResult<()> {
        let declared: HashSet<&str> = self
            .parameters
            .iter()
            .map(|p| p.logical_id.as_str())
            .collect();

        for output in &self.outputs {
            if let Some(missing) = output
                .value
                .referenced_ids()
                .into_iter()
                .find(|id| !declared.contains(id))
            {
                return Err(IacError::UndeclaredReference {
                    output: output.logical_id.clone(),
                    reference: missing.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> IacResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> IacResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the template to a file, as YAML if the extension says so and
    /// JSON otherwise.
    pub fn write_to(&self, path: &Path) -> IacResult<()> {
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let content = if is_yaml { self.to_yaml()? } else { self.to_json()? };

        fs::write(path, content)?;
        info!("Wrote template to {:?}", path);
        Ok(())
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Keyed<'a, T>(&'a [T], fn(&T) -> &str);

        impl<T: Serialize> Serialize for Keyed<'_, T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for item in self.0 {
                    map.serialize_entry((self.1)(item), item)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(None)?;
        if let Some(version) = &self.version {
            map.serialize_entry("AWSTemplateFormatVersion", version)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("Description", description)?;
        }
        if !self.parameters.is_empty() {
            map.serialize_entry(
                "Parameters",
                &Keyed(self.parameters.as_slice(), parameter_id),
            )?;
        }
        if !self.outputs.is_empty() {
            map.serialize_entry(
                "Outputs",
                &Keyed(self.outputs.as_slice(), output_id),
            )?;
        }
        map.end()
    }
}

fn parameter_id(parameter: &Parameter) -> &str {
    &parameter.logical_id
}

fn output_id(output: &Output) -> &str {
    &output.logical_id
}

/// Create the base template for the API stack.
pub fn create_template() -> Template {
    let mut template = Template::new(TEMPLATE_DESCRIPTION);
    template.add_version(TEMPLATE_FORMAT_VERSION);
    template
}
