//! Resource naming conventions.
//!
//! Each function returns an unresolved `Fn::Join` of static tokens and
//! parameter references. Queues, the uploads bucket and the docker
//! repository carry the uniqueness token; everything else is keyed on the
//! environment alone. Segment order differs between kinds and must match
//! what the consuming resources expect.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Join, Ref, Referable};

/// Display name of the API.
pub const API_NAME: &str = "Sutton Information Hub";

pub fn create_default_queue_name_variable<E, U>(environment: &E, uuid: &U) -> Join
where
    E: Referable + ?Sized,
    U: Referable + ?Sized,
{
    Join::hyphenated(vec!["default".into(), Ref::to(uuid).into(), Ref::to(environment).into()])
}

pub fn create_notifications_queue_name_variable<E, U>(environment: &E, uuid: &U) -> Join
where
    E: Referable + ?Sized,
    U: Referable + ?Sized,
{
    Join::hyphenated(vec!["notifications".into(), Ref::to(uuid).into(), Ref::to(environment).into()])
}

pub fn create_search_queue_name_variable<E, U>(environment: &E, uuid: &U) -> Join
where
    E: Referable + ?Sized,
    U: Referable + ?Sized,
{
    Join::hyphenated(vec!["search".into(), Ref::to(uuid).into(), Ref::to(environment).into()])
}

/// Environment comes before the uniqueness token here, unlike the queues.
pub fn create_uploads_bucket_name_variable<E, U>(environment: &E, uuid: &U) -> Join
where
    E: Referable + ?Sized,
    U: Referable + ?Sized,
{
    Join::hyphenated(vec!["uploads".into(), Ref::to(environment).into(), Ref::to(uuid).into()])
}

pub fn create_api_launch_template_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["api-launch-template".into(), Ref::to(environment).into()])
}

pub fn create_fortinet_metric_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["Fortinet".into(), "all_rules".into(), Ref::to(environment).into()])
}

pub fn create_aws_metric_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["AWS".into(), "ManagedRules".into(), Ref::to(environment).into()])
}

pub fn create_docker_repository_name_variable<E, U>(environment: &E, uuid: &U) -> Join
where
    E: Referable + ?Sized,
    U: Referable + ?Sized,
{
    Join::hyphenated(vec!["api".into(), Ref::to(environment).into(), Ref::to(uuid).into()])
}

pub fn create_api_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["api".into(), Ref::to(environment).into()])
}

pub fn create_queue_worker_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["queue-worker".into(), Ref::to(environment).into()])
}

pub fn create_scheduler_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["scheduler".into(), Ref::to(environment).into()])
}

/// WAF logging destinations must be prefixed with `aws-waf-logs`.
pub fn create_fortinet_waf_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["aws-waf-logs".into(), "fortinet".into(), Ref::to(environment).into()])
}

pub fn create_aws_waf_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["aws-waf-logs".into(), "aws".into(), Ref::to(environment).into()])
}

pub fn create_elasticsearch_log_group_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["search".into(), Ref::to(environment).into()])
}

pub fn create_api_task_definition_family_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["api".into(), Ref::to(environment).into()])
}

pub fn create_queue_worker_task_definition_family_variable<E: Referable + ?Sized>(
    environment: &E,
) -> Join {
    Join::hyphenated(vec!["queue-worker".into(), Ref::to(environment).into()])
}

pub fn create_scheduler_task_definition_family_variable<E: Referable + ?Sized>(
    environment: &E,
) -> Join {
    Join::hyphenated(vec!["scheduler".into(), Ref::to(environment).into()])
}

pub fn create_api_user_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["api".into(), Ref::to(environment).into()])
}

pub fn create_ci_user_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["ci-api".into(), Ref::to(environment).into()])
}

pub fn create_api_name_variable() -> &'static str {
    API_NAME
}

pub fn create_elasticsearch_domain_name_variable<E: Referable + ?Sized>(environment: &E) -> Join {
    Join::hyphenated(vec!["search".into(), Ref::to(environment).into()])
}

pub fn create_elasticsearch_log_access_policy_lambda_name_variable<E: Referable + ?Sized>(
    environment: &E,
) -> Join {
    Join::hyphenated(vec!["search".into(), "lambda".into(), Ref::to(environment).into()])
}

/// Every resource kind with a naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    DefaultQueue,
    NotificationsQueue,
    SearchQueue,
    UploadsBucket,
    ApiLaunchTemplate,
    FortinetMetric,
    AwsMetric,
    DockerRepository,
    ApiLogGroup,
    QueueWorkerLogGroup,
    SchedulerLogGroup,
    FortinetWafLogGroup,
    AwsWafLogGroup,
    SearchLogGroup,
    ApiTaskDefinitionFamily,
    QueueWorkerTaskDefinitionFamily,
    SchedulerTaskDefinitionFamily,
    ApiUser,
    CiUser,
    ApiName,
    SearchDomain,
    SearchLogAccessLambda,
}

impl ResourceKind {
    pub fn all() -> Vec<Self> {
        use ResourceKind::*;
        vec![
            DefaultQueue,
            NotificationsQueue,
            SearchQueue,
            UploadsBucket,
            ApiLaunchTemplate,
            FortinetMetric,
            AwsMetric,
            DockerRepository,
            ApiLogGroup,
            QueueWorkerLogGroup,
            SchedulerLogGroup,
            FortinetWafLogGroup,
            AwsWafLogGroup,
            SearchLogGroup,
            ApiTaskDefinitionFamily,
            QueueWorkerTaskDefinitionFamily,
            SchedulerTaskDefinitionFamily,
            ApiUser,
            CiUser,
            ApiName,
            SearchDomain,
            SearchLogAccessLambda,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::DefaultQueue => "default-queue",
            ResourceKind::NotificationsQueue => "notifications-queue",
            ResourceKind::SearchQueue => "search-queue",
            ResourceKind::UploadsBucket => "uploads-bucket",
            ResourceKind::ApiLaunchTemplate => "api-launch-template",
            ResourceKind::FortinetMetric => "fortinet-metric",
            ResourceKind::AwsMetric => "aws-metric",
            ResourceKind::DockerRepository => "docker-repository",
            ResourceKind::ApiLogGroup => "api-log-group",
            ResourceKind::QueueWorkerLogGroup => "queue-worker-log-group",
            ResourceKind::SchedulerLogGroup => "scheduler-log-group",
            ResourceKind::FortinetWafLogGroup => "fortinet-waf-log-group",
            ResourceKind::AwsWafLogGroup => "aws-waf-log-group",
            ResourceKind::SearchLogGroup => "search-log-group",
            ResourceKind::ApiTaskDefinitionFamily => "api-task-definition-family",
            ResourceKind::QueueWorkerTaskDefinitionFamily => "queue-worker-task-definition-family",
            ResourceKind::SchedulerTaskDefinitionFamily => "scheduler-task-definition-family",
            ResourceKind::ApiUser => "api-user",
            ResourceKind::CiUser => "ci-user",
            ResourceKind::ApiName => "api-name",
            ResourceKind::SearchDomain => "search-domain",
            ResourceKind::SearchLogAccessLambda => "search-log-access-lambda",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let key = s.to_lowercase();
        Self::all().into_iter().find(|kind| kind.as_str() == key)
    }

    /// Logical id of the template output carrying this name.
    pub fn output_id(&self) -> String {
        let id: String = self
            .as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect();

        if id.ends_with("Name") {
            id
        } else {
            id + "Name"
        }
    }

    /// Human-readable description of the derived name.
    pub fn description(&self) -> &'static str {
        match self {
            ResourceKind::DefaultQueue => "Name of the default queue",
            ResourceKind::NotificationsQueue => "Name of the notifications queue",
            ResourceKind::SearchQueue => "Name of the search queue",
            ResourceKind::UploadsBucket => "Name of the uploads bucket",
            ResourceKind::ApiLaunchTemplate => "Name of the API launch template",
            ResourceKind::FortinetMetric => "Metric name for the Fortinet WAF rules",
            ResourceKind::AwsMetric => "Metric name for the AWS managed WAF rules",
            ResourceKind::DockerRepository => "Name of the API docker repository",
            ResourceKind::ApiLogGroup => "Name of the API log group",
            ResourceKind::QueueWorkerLogGroup => "Name of the queue worker log group",
            ResourceKind::SchedulerLogGroup => "Name of the scheduler log group",
            ResourceKind::FortinetWafLogGroup => "Name of the Fortinet WAF log group",
            ResourceKind::AwsWafLogGroup => "Name of the AWS WAF log group",
            ResourceKind::SearchLogGroup => "Name of the search domain log group",
            ResourceKind::ApiTaskDefinitionFamily => "Family of the API task definition",
            ResourceKind::QueueWorkerTaskDefinitionFamily => {
                "Family of the queue worker task definition"
            }
            ResourceKind::SchedulerTaskDefinitionFamily => "Family of the scheduler task definition",
            ResourceKind::ApiUser => "Name of the API IAM user",
            ResourceKind::CiUser => "Name of the CI IAM user",
            ResourceKind::ApiName => "Display name of the API",
            ResourceKind::SearchDomain => "Name of the search domain",
            ResourceKind::SearchLogAccessLambda => "Name of the search log access policy lambda",
        }
    }

    /// Whether the name includes the uniqueness token.
    pub fn uses_uuid(&self) -> bool {
        matches!(
            self,
            ResourceKind::DefaultQueue
                | ResourceKind::NotificationsQueue
                | ResourceKind::SearchQueue
                | ResourceKind::UploadsBucket
                | ResourceKind::DockerRepository
        )
    }

    /// Derive the name expression for this kind.
    pub fn derive<E, U>(&self, environment: &E, uuid: &U) -> Expr
    where
        E: Referable + ?Sized,
        U: Referable + ?Sized,
    {
        let join = match self {
            ResourceKind::DefaultQueue => create_default_queue_name_variable(environment, uuid),
            ResourceKind::NotificationsQueue => {
                create_notifications_queue_name_variable(environment, uuid)
            }
            ResourceKind::SearchQueue => create_search_queue_name_variable(environment, uuid),
            ResourceKind::UploadsBucket => create_uploads_bucket_name_variable(environment, uuid),
            ResourceKind::ApiLaunchTemplate => create_api_launch_template_name_variable(environment),
            ResourceKind::FortinetMetric => create_fortinet_metric_name_variable(environment),
            ResourceKind::AwsMetric => create_aws_metric_name_variable(environment),
            ResourceKind::DockerRepository => {
                create_docker_repository_name_variable(environment, uuid)
            }
            ResourceKind::ApiLogGroup => create_api_log_group_name_variable(environment),
            ResourceKind::QueueWorkerLogGroup => {
                create_queue_worker_log_group_name_variable(environment)
            }
            ResourceKind::SchedulerLogGroup => create_scheduler_log_group_name_variable(environment),
            ResourceKind::FortinetWafLogGroup => {
                create_fortinet_waf_log_group_name_variable(environment)
            }
            ResourceKind::AwsWafLogGroup => create_aws_waf_log_group_name_variable(environment),
            ResourceKind::SearchLogGroup => create_elasticsearch_log_group_name_variable(environment),
            ResourceKind::ApiTaskDefinitionFamily => {
                create_api_task_definition_family_variable(environment)
            }
            ResourceKind::QueueWorkerTaskDefinitionFamily => {
                create_queue_worker_task_definition_family_variable(environment)
            }
            ResourceKind::SchedulerTaskDefinitionFamily => {
                create_scheduler_task_definition_family_variable(environment)
            }
            ResourceKind::ApiUser => create_api_user_name_variable(environment),
            ResourceKind::CiUser => create_ci_user_name_variable(environment),
            ResourceKind::ApiName => return Expr::from(create_api_name_variable()),
            ResourceKind::SearchDomain => create_elasticsearch_domain_name_variable(environment),
            ResourceKind::SearchLogAccessLambda => {
                create_elasticsearch_log_access_policy_lambda_name_variable(environment)
            }
        };

        Expr::Join(join)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
