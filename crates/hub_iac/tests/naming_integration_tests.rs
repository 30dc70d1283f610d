//! Integration tests for resource naming and the naming stack.

use std::fs;

use hub_iac::names::{
    create_api_name_variable, create_default_queue_name_variable,
    create_fortinet_metric_name_variable, create_search_queue_name_variable,
    create_uploads_bucket_name_variable,
};
use hub_iac::{Bindings, NamingStack, Parameter, ResourceKind, StackConfig};
use serde_json::{json, Value};
use tempfile::tempdir;

fn parameters() -> (Parameter, Parameter) {
    (Parameter::string("Environment"), Parameter::string("Uuid"))
}

fn staging() -> Bindings {
    Bindings::new().bind("Environment", "staging").bind("Uuid", "abc123")
}

#[test]
fn test_default_queue_renders_uuid_before_environment() {
    let (env, uuid) = parameters();
    let queue = create_default_queue_name_variable(&env, &uuid);

    assert_eq!(queue.render(&staging()).unwrap(), "default-abc123-staging");
}

#[test]
fn test_uploads_bucket_renders_environment_before_uuid() {
    let (env, uuid) = parameters();
    let bucket = create_uploads_bucket_name_variable(&env, &uuid);

    assert_eq!(bucket.render(&staging()).unwrap(), "uploads-staging-abc123");
}

#[test]
fn test_fortinet_metric_renders() {
    let (env, _) = parameters();
    let metric = create_fortinet_metric_name_variable(&env);
    let bindings = Bindings::new().bind("Environment", "prod");

    assert_eq!(metric.render(&bindings).unwrap(), "Fortinet-all_rules-prod");
}

#[test]
fn test_names_are_deterministic() {
    let (env, uuid) = parameters();

    for kind in ResourceKind::all() {
        assert_eq!(kind.derive(&env, &uuid), kind.derive(&env, &uuid), "{}", kind);
    }
    assert_eq!(
        create_search_queue_name_variable(&env, &uuid),
        create_search_queue_name_variable(&env, &uuid)
    );
}

#[test]
fn test_api_name_is_fixed_literal() {
    assert_eq!(create_api_name_variable(), "Sutton Information Hub");

    let (env, uuid) = parameters();
    let expr = ResourceKind::ApiName.derive(&env, &uuid);
    assert_eq!(expr.render(&Bindings::new()).unwrap(), "Sutton Information Hub");
}

#[test]
fn test_preview_every_kind() {
    let stack = NamingStack::new(StackConfig::default()).unwrap();
    let names = stack.preview(&stack.bindings("staging", "abc123")).unwrap();

    let expected = [
        "default-abc123-staging",
        "notifications-abc123-staging",
        "search-abc123-staging",
        "uploads-staging-abc123",
        "api-launch-template-staging",
        "Fortinet-all_rules-staging",
        "AWS-ManagedRules-staging",
        "api-staging-abc123",
        "api-staging",
        "queue-worker-staging",
        "scheduler-staging",
        "aws-waf-logs-fortinet-staging",
        "aws-waf-logs-aws-staging",
        "search-staging",
        "api-staging",
        "queue-worker-staging",
        "scheduler-staging",
        "api-staging",
        "ci-api-staging",
        "Sutton Information Hub",
        "search-staging",
        "search-lambda-staging",
    ];

    let rendered: Vec<&str> = names.iter().map(|(_, name)| name.as_str()).collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_naming_template_document() {
    let stack = NamingStack::new(StackConfig::default()).unwrap();
    let template = stack.build_template().unwrap();

    let value: Value = serde_json::from_str(&template.to_json().unwrap()).unwrap();

    assert_eq!(value["AWSTemplateFormatVersion"], "2010-09-09");
    assert_eq!(
        value["Parameters"]["Environment"]["AllowedValues"],
        json!(["production", "staging", "testing"])
    );
    assert_eq!(
        value["Outputs"]["DefaultQueueName"]["Value"],
        json!({ "Fn::Join": ["-", ["default", { "Ref": "Uuid" }, { "Ref": "Environment" }]] })
    );
    assert_eq!(
        value["Outputs"]["UploadsBucketName"]["Value"],
        json!({ "Fn::Join": ["-", ["uploads", { "Ref": "Environment" }, { "Ref": "Uuid" }]] })
    );
    assert_eq!(value["Outputs"]["ApiName"]["Value"], "Sutton Information Hub");
}

#[test]
fn test_write_template_as_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("naming.yaml");

    let stack = NamingStack::new(StackConfig::default()).unwrap();
    stack.build_template().unwrap().write_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(
        value["Outputs"]["CiUserName"]["Value"]["Fn::Join"][0],
        serde_yaml::Value::from("-")
    );
}

#[test]
fn test_preview_without_uuid_binding_fails() {
    let stack = NamingStack::new(StackConfig::default()).unwrap();
    let bindings = Bindings::new().bind("Environment", "staging");

    assert!(stack.preview(&bindings).is_err());
}
