//! AWS Elemental MediaPackage VOD cmdlets.

mod client;
pub mod commands;
pub mod models;
pub mod operations;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ServiceError;
use models::*;

pub use client::SdkMediaPackageVod;

type ApiResult<T> = Result<T, ServiceError>;

#[async_trait]
pub trait MediaPackageVodApi: Send + Sync {
    async fn list_assets(
        &self,
        request: &ListAssetsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListAssetsResponse>;

    async fn describe_asset(
        &self,
        request: &AssetIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<Asset>;

    async fn create_asset(
        &self,
        request: &CreateAssetRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<Asset>;

    async fn delete_asset(
        &self,
        request: &AssetIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;

    async fn list_packaging_groups(
        &self,
        request: &ListPackagingGroupsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingGroupsResponse>;

    async fn describe_packaging_group(
        &self,
        request: &PackagingGroupIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup>;

    async fn create_packaging_group(
        &self,
        request: &CreatePackagingGroupRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup>;

    async fn delete_packaging_group(
        &self,
        request: &PackagingGroupIdRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;

    async fn list_packaging_configurations(
        &self,
        request: &ListPackagingConfigurationsRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingConfigurationsResponse>;

    async fn list_tags_for_resource(
        &self,
        request: &ResourceArnRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<ListTagsForResourceResponse>;

    async fn tag_resource(
        &self,
        request: &TagResourceRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;

    async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
        cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse>;
}
