use chrono::{DateTime, Utc};
use serde::Serialize;

pub use crate::services::EmptyResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescription {
    pub application_arn: Option<String>,
    pub application_name: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub versions: Vec<String>,
    pub configuration_templates: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Location {
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationVersionDescription {
    pub application_version_arn: Option<String>,
    pub application_name: Option<String>,
    pub description: Option<String>,
    pub version_label: Option<String>,
    pub source_bundle: Option<S3Location>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentTier {
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub tier_type: Option<String>,
    pub version: Option<String>,
}

impl EnvironmentTier {
    pub fn web_server() -> Self {
        Self {
            name: Some("WebServer".to_string()),
            tier_type: Some("Standard".to_string()),
            version: None,
        }
    }

    pub fn worker() -> Self {
        Self {
            name: Some("Worker".to_string()),
            tier_type: Some("SQS/HTTP".to_string()),
            version: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentDescription {
    pub environment_name: Option<String>,
    pub environment_id: Option<String>,
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub solution_stack_name: Option<String>,
    pub platform_arn: Option<String>,
    pub template_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "EndpointURL")]
    pub endpoint_url: Option<String>,
    #[serde(rename = "CNAME")]
    pub cname: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub abortable_operation_in_progress: Option<bool>,
    pub health: Option<String>,
    pub health_status: Option<String>,
    pub tier: Option<EnvironmentTier>,
    pub environment_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventDescription {
    pub event_date: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub environment_name: Option<String>,
    pub platform_arn: Option<String>,
    pub request_id: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SolutionStackDescription {
    pub solution_stack_name: Option<String>,
    pub permitted_file_types: Vec<String>,
}

// Requests and responses, one pair per action.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationsRequest {
    pub application_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationsResponse {
    pub applications: Vec<ApplicationDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateApplicationRequest {
    pub application_name: String,
    pub description: Option<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateApplicationResponse {
    pub application: Option<ApplicationDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteApplicationRequest {
    pub application_name: String,
    pub terminate_env_by_force: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationVersionsRequest {
    pub application_name: Option<String>,
    pub version_labels: Vec<String>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationVersionsResponse {
    pub application_versions: Vec<ApplicationVersionDescription>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEnvironmentsRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub environment_ids: Vec<String>,
    pub environment_names: Vec<String>,
    pub include_deleted: Option<bool>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEnvironmentsResponse {
    pub environments: Vec<EnvironmentDescription>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEnvironmentRequest {
    pub application_name: String,
    pub environment_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "CNAMEPrefix")]
    pub cname_prefix: Option<String>,
    pub tier: Option<EnvironmentTier>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub solution_stack_name: Option<String>,
    pub platform_arn: Option<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateEnvironmentRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
    pub terminate_resources: Option<bool>,
    pub force_terminate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestartAppServerRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEventsRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
    pub request_id: Option<String>,
    pub severity: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEventsResponse {
    pub events: Vec<EventDescription>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListAvailableSolutionStacksRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAvailableSolutionStacksResponse {
    pub solution_stacks: Vec<String>,
    pub solution_stack_details: Vec<SolutionStackDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckDnsAvailabilityRequest {
    #[serde(rename = "CNAMEPrefix")]
    pub cname_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckDnsAvailabilityResponse {
    pub available: Option<bool>,
    #[serde(rename = "FullyQualifiedCNAME")]
    pub fully_qualified_cname: Option<String>,
}
