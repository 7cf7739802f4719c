#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use ebvod::context::ClientContext;
use ebvod::error::ServiceError;
use ebvod::services::elasticbeanstalk::models::*;
use ebvod::services::mediapackagevod::models::{
    Asset, AssetIdRequest, AssetShallow, CreateAssetRequest, CreatePackagingGroupRequest,
    ListAssetsRequest, ListAssetsResponse, ListPackagingConfigurationsRequest,
    ListPackagingConfigurationsResponse, ListPackagingGroupsRequest, ListPackagingGroupsResponse,
    ListTagsForResourceResponse, PackagingGroup, PackagingGroupIdRequest, ResourceArnRequest,
    TagResourceRequest, Tags, UntagResourceRequest,
};
use ebvod::services::{ElasticBeanstalkApi, MediaPackageVodApi};

type ApiResult<T> = Result<T, ServiceError>;

pub fn context() -> ClientContext {
    ClientContext {
        region: Some("us-west-2".to_string()),
        profile: None,
        endpoint_url: None,
    }
}

pub fn environment(name: &str) -> EnvironmentDescription {
    EnvironmentDescription {
        environment_name: Some(name.to_string()),
        environment_id: Some(format!("e-{}", name)),
        application_name: Some("shop".to_string()),
        status: Some("Ready".to_string()),
        ..Default::default()
    }
}

/// `count` environments per page, named `env-<page>-<index>`.
pub fn environment_pages(pages: usize, count: usize) -> Vec<Vec<EnvironmentDescription>> {
    (0..pages)
        .map(|page| {
            (0..count)
                .map(|index| environment(&format!("env-{}-{}", page, index)))
                .collect()
        })
        .collect()
}

pub fn dns_failure() -> ServiceError {
    ServiceError::dispatch(std::io::Error::new(
        std::io::ErrorKind::Other,
        "dns error: failed to lookup address information: Name or service not known",
    ))
}

pub fn throttled() -> ServiceError {
    ServiceError::service("Throttling", "Rate exceeded")
}

/// Page index encoded in a continuation token; no token is the first page.
fn page_index(token: Option<&str>) -> usize {
    token
        .and_then(|t| t.strip_prefix("page-"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

fn page_token(index: usize, total: usize) -> Option<String> {
    (index + 1 < total).then(|| format!("page-{}", index + 1))
}

/// Shared call bookkeeping for the mock clients.
#[derive(Default)]
pub struct Recorder {
    pub calls: AtomicUsize,
    /// Token handed to the most recent call.
    pub last_cancel: Mutex<Option<CancellationToken>>,
    /// Every call fails with this error when set.
    pub failure: Option<fn() -> ServiceError>,
    /// Calls never complete when set.
    pub hang: bool,
}

impl Recorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, cancel: &CancellationToken) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_cancel.lock().unwrap() = Some(cancel.clone());
        if self.hang {
            std::future::pending::<()>().await;
        }
        match self.failure {
            Some(make) => Err(make()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MockElasticBeanstalk {
    pub recorder: Recorder,
    pub environment_pages: Vec<Vec<EnvironmentDescription>>,
    /// Fails the page with this index.
    pub fail_on_page: Option<usize>,
    pub environment_requests: Mutex<Vec<DescribeEnvironmentsRequest>>,
}

impl MockElasticBeanstalk {
    pub fn with_pages(pages: Vec<Vec<EnvironmentDescription>>) -> Self {
        Self {
            environment_pages: pages,
            ..Default::default()
        }
    }

    pub fn failing(failure: fn() -> ServiceError) -> Self {
        Self {
            recorder: Recorder {
                failure: Some(failure),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            recorder: Recorder {
                hang: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.recorder.calls()
    }

    pub fn page_sizes(&self) -> Vec<Option<i32>> {
        self.environment_requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.max_records)
            .collect()
    }
}

#[async_trait]
impl ElasticBeanstalkApi for MockElasticBeanstalk {
    async fn describe_applications(
        &self,
        request: &DescribeApplicationsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationsResponse> {
        self.recorder.enter(cancel).await?;
        Ok(DescribeApplicationsResponse {
            applications: vec![ApplicationDescription {
                application_name: Some("from-service".to_string()),
                description: Some(format!("{} requested", request.application_names.len())),
                ..Default::default()
            }],
        })
    }

    async fn create_application(
        &self,
        request: &CreateApplicationRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<CreateApplicationResponse> {
        self.recorder.enter(cancel).await?;
        Ok(CreateApplicationResponse {
            application: Some(ApplicationDescription {
                application_name: Some(request.application_name.clone()),
                description: request.description.clone(),
                ..Default::default()
            }),
        })
    }

    async fn delete_application(
        &self,
        _request: &DeleteApplicationRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        Ok(EmptyResponse)
    }

    async fn describe_application_versions(
        &self,
        _request: &DescribeApplicationVersionsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeApplicationVersionsResponse> {
        self.recorder.enter(cancel).await?;
        Ok(DescribeApplicationVersionsResponse::default())
    }

    async fn describe_environments(
        &self,
        request: &DescribeEnvironmentsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeEnvironmentsResponse> {
        self.recorder.enter(cancel).await?;
        self.environment_requests
            .lock()
            .unwrap()
            .push(request.clone());

        let index = page_index(request.next_token.as_deref());
        if self.fail_on_page == Some(index) {
            return Err(throttled());
        }
        Ok(DescribeEnvironmentsResponse {
            environments: self
                .environment_pages
                .get(index)
                .cloned()
                .unwrap_or_default(),
            next_token: page_token(index, self.environment_pages.len()),
        })
    }

    async fn create_environment(
        &self,
        request: &CreateEnvironmentRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription> {
        self.recorder.enter(cancel).await?;
        Ok(EnvironmentDescription {
            application_name: Some(request.application_name.clone()),
            environment_name: request.environment_name.clone(),
            status: Some("Launching".to_string()),
            ..Default::default()
        })
    }

    async fn terminate_environment(
        &self,
        request: &TerminateEnvironmentRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EnvironmentDescription> {
        self.recorder.enter(cancel).await?;
        Ok(EnvironmentDescription {
            environment_id: request.environment_id.clone(),
            environment_name: request.environment_name.clone(),
            status: Some("Terminating".to_string()),
            ..Default::default()
        })
    }

    async fn restart_app_server(
        &self,
        _request: &RestartAppServerRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        Ok(EmptyResponse)
    }

    async fn describe_events(
        &self,
        _request: &DescribeEventsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<DescribeEventsResponse> {
        self.recorder.enter(cancel).await?;
        Ok(DescribeEventsResponse::default())
    }

    async fn list_available_solution_stacks(
        &self,
        _request: &ListAvailableSolutionStacksRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListAvailableSolutionStacksResponse> {
        self.recorder.enter(cancel).await?;
        Ok(ListAvailableSolutionStacksResponse {
            solution_stacks: vec![
                "64bit Amazon Linux 2023 v4.0.0 running Python 3.11".to_string(),
                "64bit Amazon Linux 2023 v6.1.0 running Node.js 20".to_string(),
            ],
            solution_stack_details: vec![],
        })
    }

    async fn check_dns_availability(
        &self,
        request: &CheckDnsAvailabilityRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<CheckDnsAvailabilityResponse> {
        self.recorder.enter(cancel).await?;
        Ok(CheckDnsAvailabilityResponse {
            available: Some(true),
            fully_qualified_cname: Some(format!(
                "{}.us-west-2.elasticbeanstalk.com",
                request.cname_prefix
            )),
        })
    }
}

pub fn asset(id: &str) -> AssetShallow {
    AssetShallow {
        id: Some(id.to_string()),
        packaging_group_id: Some("vod-group".to_string()),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct MockMediaPackageVod {
    pub recorder: Recorder,
    pub asset_pages: Vec<Vec<AssetShallow>>,
    pub asset_requests: Mutex<Vec<ListAssetsRequest>>,
    pub tags: Mutex<Tags>,
}

impl MockMediaPackageVod {
    pub fn with_asset_pages(pages: Vec<Vec<AssetShallow>>) -> Self {
        Self {
            asset_pages: pages,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.recorder.calls()
    }
}

#[async_trait]
impl MediaPackageVodApi for MockMediaPackageVod {
    async fn list_assets(
        &self,
        request: &ListAssetsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListAssetsResponse> {
        self.recorder.enter(cancel).await?;
        self.asset_requests.lock().unwrap().push(request.clone());
        let index = page_index(request.next_token.as_deref());
        Ok(ListAssetsResponse {
            assets: self.asset_pages.get(index).cloned().unwrap_or_default(),
            next_token: page_token(index, self.asset_pages.len()),
        })
    }

    async fn describe_asset(
        &self,
        request: &AssetIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<Asset> {
        self.recorder.enter(cancel).await?;
        Ok(Asset {
            id: Some(request.id.clone()),
            arn: Some(format!(
                "arn:aws:mediapackage-vod:us-west-2:111122223333:assets/{}",
                request.id
            )),
            ..Default::default()
        })
    }

    async fn create_asset(
        &self,
        request: &CreateAssetRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<Asset> {
        self.recorder.enter(cancel).await?;
        Ok(Asset {
            id: Some(request.id.clone()),
            packaging_group_id: Some(request.packaging_group_id.clone()),
            source_arn: Some(request.source_arn.clone()),
            ..Default::default()
        })
    }

    async fn delete_asset(
        &self,
        _request: &AssetIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        Ok(EmptyResponse)
    }

    async fn list_packaging_groups(
        &self,
        _request: &ListPackagingGroupsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingGroupsResponse> {
        self.recorder.enter(cancel).await?;
        Ok(ListPackagingGroupsResponse::default())
    }

    async fn describe_packaging_group(
        &self,
        request: &PackagingGroupIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup> {
        self.recorder.enter(cancel).await?;
        Ok(PackagingGroup {
            id: Some(request.id.clone()),
            approximate_asset_count: Some(3),
            ..Default::default()
        })
    }

    async fn create_packaging_group(
        &self,
        request: &CreatePackagingGroupRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup> {
        self.recorder.enter(cancel).await?;
        Ok(PackagingGroup {
            id: Some(request.id.clone()),
            tags: Some(request.tags.clone()),
            ..Default::default()
        })
    }

    async fn delete_packaging_group(
        &self,
        _request: &PackagingGroupIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        Ok(EmptyResponse)
    }

    async fn list_packaging_configurations(
        &self,
        _request: &ListPackagingConfigurationsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingConfigurationsResponse> {
        self.recorder.enter(cancel).await?;
        Ok(ListPackagingConfigurationsResponse::default())
    }

    async fn list_tags_for_resource(
        &self,
        _request: &ResourceArnRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListTagsForResourceResponse> {
        self.recorder.enter(cancel).await?;
        Ok(ListTagsForResourceResponse {
            tags: self.tags.lock().unwrap().clone(),
        })
    }

    async fn tag_resource(
        &self,
        request: &TagResourceRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        self.tags.lock().unwrap().extend(request.tags.clone());
        Ok(EmptyResponse)
    }

    async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.recorder.enter(cancel).await?;
        let mut tags = self.tags.lock().unwrap();
        for key in &request.tag_keys {
            tags.remove(key);
        }
        Ok(EmptyResponse)
    }
}
