use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_elasticbeanstalk as sdk;
use sdk::types;
use tokio_util::sync::CancellationToken;

use super::models::*;
use super::{ApiResult, ElasticBeanstalkApi};
use crate::services::sdk::{owned, owned_list, sdk_timestamp, service_error, timestamp};

/// Elastic Beanstalk client backed by the AWS SDK. Dropping a call future
/// aborts the in-flight request, which is how cancellation reaches the SDK.
pub struct SdkElasticBeanstalk {
    client: sdk::Client,
}

impl SdkElasticBeanstalk {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: sdk::Client::new(config),
        }
    }
}

fn application(src: &types::ApplicationDescription) -> ApplicationDescription {
    ApplicationDescription {
        application_arn: owned(src.application_arn()),
        application_name: owned(src.application_name()),
        description: owned(src.description()),
        date_created: timestamp(src.date_created()),
        date_updated: timestamp(src.date_updated()),
        versions: src.versions().to_vec(),
        configuration_templates: src.configuration_templates().to_vec(),
    }
}

fn application_version(src: &types::ApplicationVersionDescription) -> ApplicationVersionDescription {
    ApplicationVersionDescription {
        application_version_arn: owned(src.application_version_arn()),
        application_name: owned(src.application_name()),
        description: owned(src.description()),
        version_label: owned(src.version_label()),
        source_bundle: src.source_bundle().map(|bundle| S3Location {
            s3_bucket: owned(bundle.s3_bucket()),
            s3_key: owned(bundle.s3_key()),
        }),
        date_created: timestamp(src.date_created()),
        date_updated: timestamp(src.date_updated()),
        status: src.status().map(|s| s.as_str().to_string()),
    }
}

fn tier(src: &types::EnvironmentTier) -> EnvironmentTier {
    EnvironmentTier {
        name: owned(src.name()),
        tier_type: owned(src.r#type()),
        version: owned(src.version()),
    }
}

fn sdk_tier(src: &EnvironmentTier) -> types::EnvironmentTier {
    types::EnvironmentTier::builder()
        .set_name(src.name.clone())
        .set_type(src.tier_type.clone())
        .set_version(src.version.clone())
        .build()
}

fn sdk_tags(tags: &[Tag]) -> Option<Vec<types::Tag>> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|tag| {
                types::Tag::builder()
                    .key(&tag.key)
                    .value(&tag.value)
                    .build()
            })
            .collect(),
    )
}

// EnvironmentDescription, CreateEnvironmentOutput and TerminateEnvironmentOutput
// share the same accessors but are distinct types.
macro_rules! environment_description {
    ($src:expr) => {{
        let src = $src;
        EnvironmentDescription {
            environment_name: owned(src.environment_name()),
            environment_id: owned(src.environment_id()),
            application_name: owned(src.application_name()),
            version_label: owned(src.version_label()),
            solution_stack_name: owned(src.solution_stack_name()),
            platform_arn: owned(src.platform_arn()),
            template_name: owned(src.template_name()),
            description: owned(src.description()),
            endpoint_url: owned(src.endpoint_url()),
            cname: owned(src.cname()),
            date_created: timestamp(src.date_created()),
            date_updated: timestamp(src.date_updated()),
            status: src.status().map(|s| s.as_str().to_string()),
            abortable_operation_in_progress: src.abortable_operation_in_progress(),
            health: src.health().map(|h| h.as_str().to_string()),
            health_status: src.health_status().map(|h| h.as_str().to_string()),
            tier: src.tier().map(tier),
            environment_arn: owned(src.environment_arn()),
        }
    }};
}

#[async_trait]
impl ElasticBeanstalkApi for SdkElasticBeanstalk {
    async fn describe_applications(
        &self,
        request: &DescribeApplicationsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationsResponse> {
        let output = self
            .client
            .describe_applications()
            .set_application_names(owned_list(&request.application_names))
            .send()
            .await
            .map_err(service_error)?;

        Ok(DescribeApplicationsResponse {
            applications: output.applications().iter().map(application).collect(),
        })
    }

    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<CreateApplicationResponse> {
        let output = self
            .client
            .create_application()
            .application_name(&request.application_name)
            .set_description(request.description.clone())
            .set_tags(sdk_tags(&request.tags))
            .send()
            .await
            .map_err(service_error)?;

        Ok(CreateApplicationResponse {
            application: output.application().map(application),
        })
    }

    async fn delete_application(
        &self,
        request: &DeleteApplicationRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .delete_application()
            .application_name(&request.application_name)
            .set_terminate_env_by_force(request.terminate_env_by_force)
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }

    async fn describe_application_versions(
        &self,
        request: &DescribeApplicationVersionsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationVersionsResponse> {
        let output = self
            .client
            .describe_application_versions()
            .set_application_name(request.application_name.clone())
            .set_version_labels(owned_list(&request.version_labels))
            .set_max_records(request.max_records)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(DescribeApplicationVersionsResponse {
            application_versions: output
                .application_versions()
                .iter()
                .map(application_version)
                .collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn describe_environments(
        &self,
        request: &DescribeEnvironmentsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<DescribeEnvironmentsResponse> {
        let output = self
            .client
            .describe_environments()
            .set_application_name(request.application_name.clone())
            .set_version_label(request.version_label.clone())
            .set_environment_ids(owned_list(&request.environment_ids))
            .set_environment_names(owned_list(&request.environment_names))
            .set_include_deleted(request.include_deleted)
            .set_max_records(request.max_records)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(DescribeEnvironmentsResponse {
            environments: output
                .environments()
                .iter()
                .map(|env| environment_description!(env))
                .collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription> {
        let output = self
            .client
            .create_environment()
            .application_name(&request.application_name)
            .set_environment_name(request.environment_name.clone())
            .set_description(request.description.clone())
            .set_cname_prefix(request.cname_prefix.clone())
            .set_tier(request.tier.as_ref().map(sdk_tier))
            .set_version_label(request.version_label.clone())
            .set_template_name(request.template_name.clone())
            .set_solution_stack_name(request.solution_stack_name.clone())
            .set_platform_arn(request.platform_arn.clone())
            .set_tags(sdk_tags(&request.tags))
            .send()
            .await
            .map_err(service_error)?;

        Ok(environment_description!(&output))
    }

    async fn terminate_environment(
        &self,
        request: &TerminateEnvironmentRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription> {
        let output = self
            .client
            .terminate_environment()
            .set_environment_id(request.environment_id.clone())
            .set_environment_name(request.environment_name.clone())
            .set_terminate_resources(request.terminate_resources)
            .set_force_terminate(request.force_terminate)
            .send()
            .await
            .map_err(service_error)?;

        Ok(environment_description!(&output))
    }

    async fn restart_app_server(
        &self,
        request: &RestartAppServerRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .restart_app_server()
            .set_environment_id(request.environment_id.clone())
            .set_environment_name(request.environment_name.clone())
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }

    async fn describe_events(
        &self,
        request: &DescribeEventsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<DescribeEventsResponse> {
        let output = self
            .client
            .describe_events()
            .set_application_name(request.application_name.clone())
            .set_version_label(request.version_label.clone())
            .set_template_name(request.template_name.clone())
            .set_environment_id(request.environment_id.clone())
            .set_environment_name(request.environment_name.clone())
            .set_request_id(request.request_id.clone())
            .set_severity(request.severity.as_deref().map(types::EventSeverity::from))
            .set_start_time(request.start_time.as_ref().map(sdk_timestamp))
            .set_end_time(request.end_time.as_ref().map(sdk_timestamp))
            .set_max_records(request.max_records)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(DescribeEventsResponse {
            events: output
                .events()
                .iter()
                .map(|event| EventDescription {
                    event_date: timestamp(event.event_date()),
                    message: owned(event.message()),
                    application_name: owned(event.application_name()),
                    version_label: owned(event.version_label()),
                    template_name: owned(event.template_name()),
                    environment_name: owned(event.environment_name()),
                    platform_arn: owned(event.platform_arn()),
                    request_id: owned(event.request_id()),
                    severity: event.severity().map(|s| s.as_str().to_string()),
                })
                .collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn list_available_solution_stacks(
        &self,
        _request: &ListAvailableSolutionStacksRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<ListAvailableSolutionStacksResponse> {
        let output = self
            .client
            .list_available_solution_stacks()
            .send()
            .await
            .map_err(service_error)?;

        Ok(ListAvailableSolutionStacksResponse {
            solution_stacks: output.solution_stacks().to_vec(),
            solution_stack_details: output
                .solution_stack_details()
                .iter()
                .map(|detail| SolutionStackDescription {
                    solution_stack_name: owned(detail.solution_stack_name()),
                    permitted_file_types: detail.permitted_file_types().to_vec(),
                })
                .collect(),
        })
    }

    async fn check_dns_availability(
        &self,
        request: &CheckDnsAvailabilityRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<CheckDnsAvailabilityResponse> {
        let output = self
            .client
            .check_dns_availability()
            .cname_prefix(&request.cname_prefix)
            .send()
            .await
            .map_err(service_error)?;

        Ok(CheckDnsAvailabilityResponse {
            available: output.available(),
            fully_qualified_cname: owned(output.fully_qualified_cname()),
        })
    }
}
