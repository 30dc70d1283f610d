//! Naming stack assembly.
//!
//! Declares the deployment parameters and publishes every derived resource
//! name as a template output, so the naming scheme can be deployed and
//! inspected on its own.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IacError, IacResult};
use crate::names::ResourceKind;
use crate::parameter::Parameter;
use crate::render::Bindings;
use crate::template::{create_template, Output, Template};

/// Configuration for the naming stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Logical id of the environment parameter.
    pub environment_parameter: String,
    /// Logical id of the uniqueness token parameter.
    pub uuid_parameter: String,
    /// Environments the stack may be deployed to.
    pub environments: Vec<String>,
    pub default_environment: Option<String>,
    /// Overrides the template description.
    pub description: Option<String>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            environment_parameter: "Environment".to_string(),
            uuid_parameter: "Uuid".to_string(),
            environments: vec![
                "production".to_string(),
                "staging".to_string(),
                "testing".to_string(),
            ],
            default_environment: None,
            description: None,
        }
    }
}

impl StackConfig {
    /// Load stack configuration from a YAML file.
    pub fn from_file(path: &Path) -> IacResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: StackConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded stack config from {:?}", path);
        Ok(config)
    }

    /// Save stack configuration to a YAML file.
    pub fn to_file(&self, path: &Path) -> IacResult<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> IacResult<()> {
        if self.environment_parameter.is_empty() || self.uuid_parameter.is_empty() {
            return Err(IacError::InvalidConfig(
                "parameter logical ids must not be empty".to_string(),
            ));
        }

        if self.environment_parameter == self.uuid_parameter {
            return Err(IacError::InvalidConfig(format!(
                "environment and uuid parameters share the logical id {}",
                self.environment_parameter
            )));
        }

        let output_ids: Vec<String> = ResourceKind::all().iter().map(|k| k.output_id()).collect();
        for id in [&self.environment_parameter, &self.uuid_parameter] {
            if output_ids.contains(id) {
                return Err(IacError::InvalidConfig(format!(
                    "parameter logical id {} clashes with a name output",
                    id
                )));
            }
        }

        if let Some(default) = &self.default_environment {
            if !self.environments.is_empty() && !self.environments.contains(default) {
                return Err(IacError::InvalidConfig(format!(
                    "default environment {} is not one of the allowed environments",
                    default
                )));
            }
        }

        Ok(())
    }
}

/// The two deployment parameters and the names derived from them.
#[derive(Debug, Clone)]
pub struct NamingStack {
    config: StackConfig,
    environment: Parameter,
    uuid: Parameter,
}

impl NamingStack {
    pub fn new(config: StackConfig) -> IacResult<Self> {
        config.validate()?;

        let mut environment = Parameter::string(&config.environment_parameter)
            .with_description("The environment the stack is deployed to")
            .with_allowed_values(config.environments.iter().cloned());
        if let Some(default) = &config.default_environment {
            environment = environment.with_default(default);
        }

        let uuid = Parameter::string(&config.uuid_parameter)
            .with_description("Token keeping globally scoped resource names unique");

        Ok(Self {
            config,
            environment,
            uuid,
        })
    }

    pub fn environment(&self) -> &Parameter {
        &self.environment
    }

    pub fn uuid(&self) -> &Parameter {
        &self.uuid
    }

    /// Build the template with both parameters and one output per name.
    pub fn build_template(&self) -> IacResult<Template> {
        let mut template = create_template();
        if let Some(description) = &self.config.description {
            template.add_description(description);
        }

        let environment = template.add_parameter(self.environment.clone())?;
        let uuid = template.add_parameter(self.uuid.clone())?;

        for kind in ResourceKind::all() {
            let output = Output::new(kind.output_id(), kind.derive(&environment, &uuid))
                .with_description(kind.description());
            template.add_output(output)?;
        }

        template.validate()?;
        info!(
            "Built naming template with {} outputs",
            template.outputs().len()
        );
        Ok(template)
    }

    /// Bindings for a concrete deployment.
    pub fn bindings(&self, environment: &str, uuid: &str) -> Bindings {
        Bindings::new()
            .bind(&self.environment.logical_id, environment)
            .bind(&self.uuid.logical_id, uuid)
    }

    /// Resolve every resource name against the given bindings.
    pub fn preview(&self, bindings: &Bindings) -> IacResult<Vec<(ResourceKind, String)>> {
        ResourceKind::all()
            .into_iter()
            .map(|kind| {
                let name = kind.derive(&self.environment, &self.uuid).render(bindings)?;
                Ok((kind, name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StackConfig::default();
        assert_eq!(config.environment_parameter, "Environment");
        assert_eq!(config.uuid_parameter, "Uuid");
        config.validate().unwrap();
    }

    #[test]
    fn test_config_rejects_shared_logical_id() {
        let config = StackConfig {
            uuid_parameter: "Environment".to_string(),
            ..StackConfig::default()
        };
        assert!(matches!(config.validate(), Err(IacError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_rejects_parameter_clashing_with_output() {
        let config = StackConfig {
            environment_parameter: "ApiName".to_string(),
            ..StackConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, IacError::InvalidConfig(ref msg) if msg.contains("ApiName")));
        assert!(NamingStack::new(config).is_err());
    }

    #[test]
    fn test_output_descriptions_are_readable() {
        let stack = NamingStack::new(StackConfig::default()).unwrap();
        let template = stack.build_template().unwrap();

        let api_name = template.output("ApiName").unwrap();
        assert_eq!(api_name.description.as_deref(), Some("Display name of the API"));
        let bucket = template.output("UploadsBucketName").unwrap();
        assert_eq!(bucket.description.as_deref(), Some("Name of the uploads bucket"));
    }

    #[test]
    fn test_config_rejects_unknown_default_environment() {
        let config = StackConfig {
            default_environment: Some("qa".to_string()),
            ..StackConfig::default()
        };
        assert!(matches!(config.validate(), Err(IacError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stack.yaml");

        let config = StackConfig {
            default_environment: Some("staging".to_string()),
            ..StackConfig::default()
        };
        config.to_file(&path).unwrap();

        assert_eq!(StackConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stack.yaml");
        fs::write(&path, "environment_parameter: Stage\n").unwrap();

        let config = StackConfig::from_file(&path).unwrap();
        assert_eq!(config.environment_parameter, "Stage");
        assert_eq!(config.uuid_parameter, "Uuid");
    }

    #[test]
    fn test_build_template_outputs_every_kind() {
        let stack = NamingStack::new(StackConfig::default()).unwrap();
        let template = stack.build_template().unwrap();

        assert_eq!(template.parameters().len(), 2);
        assert_eq!(template.outputs().len(), ResourceKind::all().len());
        assert!(template.output("UploadsBucketName").is_some());
    }

    #[test]
    fn test_default_environment_applied() {
        let config = StackConfig {
            default_environment: Some("production".to_string()),
            ..StackConfig::default()
        };
        let stack = NamingStack::new(config).unwrap();

        assert_eq!(stack.environment().default.as_deref(), Some("production"));
        assert_eq!(stack.environment().allowed_values.len(), 3);
    }

    #[test]
    fn test_preview_with_custom_parameter_ids() {
        let config = StackConfig {
            environment_parameter: "Stage".to_string(),
            uuid_parameter: "Token".to_string(),
            ..StackConfig::default()
        };
        let stack = NamingStack::new(config).unwrap();
        let names = stack.preview(&stack.bindings("staging", "abc123")).unwrap();

        let (_, bucket) = names
            .iter()
            .find(|(kind, _)| *kind == ResourceKind::UploadsBucket)
            .unwrap();
        assert_eq!(bucket, "uploads-staging-abc123");
    }
}
