//! Template parameter declarations.

use serde::{Deserialize, Serialize};

use crate::expr::Referable;

/// A CloudFormation parameter, supplied at deploy time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    /// Logical id; the key under `Parameters`, not a property.
    #[serde(skip)]
    pub logical_id: String,
    #[serde(rename = "Type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
}

impl Parameter {
    /// Create a `String` parameter.
    pub fn string(logical_id: impl Into<String>) -> Self {
        Self {
            logical_id: logical_id.into(),
            param_type: "String".to_string(),
            description: None,
            default: None,
            allowed_values: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }
}

impl Referable for Parameter {
    fn logical_id(&self) -> &str {
        &self.logical_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_properties() {
        let param = Parameter::string("Environment")
            .with_description("The environment")
            .with_default("staging")
            .with_allowed_values(["production", "staging"]);

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(
            value,
            json!({
                "Type": "String",
                "Description": "The environment",
                "Default": "staging",
                "AllowedValues": ["production", "staging"]
            })
        );
    }

    #[test]
    fn test_bare_parameter_omits_optional_properties() {
        let value = serde_json::to_value(Parameter::string("Uuid")).unwrap();
        assert_eq!(value, json!({ "Type": "String" }));
    }
}
