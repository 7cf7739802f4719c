//! AWS Elastic Beanstalk cmdlets.

mod client;
pub mod commands;
pub mod models;
pub mod operations;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ServiceError;
use models::*;

pub use client::SdkElasticBeanstalk;

type ApiResult<T> = Result<T, ServiceError>;

/// The Elastic Beanstalk actions the cmdlets call.
#[async_trait]
pub trait ElasticBeanstalkApi: Send + Sync {
    async fn describe_applications(
        &self,
        request: &DescribeApplicationsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationsResponse>;

    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<CreateApplicationResponse>;

    async fn delete_application(
        &self,
        request: &DeleteApplicationRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;

    async fn describe_application_versions(
        &self,
        request: &DescribeApplicationVersionsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationVersionsResponse>;

    async fn describe_environments(
        &self,
        request: &DescribeEnvironmentsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeEnvironmentsResponse>;

    async fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription>;

    async fn terminate_environment(
        &self,
        request: &TerminateEnvironmentRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription>;

    async fn restart_app_server(
        &self,
        request: &RestartAppServerRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;

    async fn describe_events(
        &self,
        request: &DescribeEventsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeEventsResponse>;

    async fn list_available_solution_stacks(
        &self,
        request: &ListAvailableSolutionStacksRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListAvailableSolutionStacksResponse>;

    async fn check_dns_availability(
        &self,
        request: &CheckDnsAvailabilityRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<CheckDnsAvailabilityResponse>;
}
