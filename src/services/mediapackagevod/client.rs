use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_mediapackagevod as sdk;
use sdk::types;
use tokio_util::sync::CancellationToken;

use super::models::*;
use super::{ApiResult, MediaPackageVodApi};
use crate::services::sdk::{owned, service_error};

/// MediaPackage VOD client backed by the AWS SDK.
pub struct SdkMediaPackageVod {
    client: sdk::Client,
}

impl SdkMediaPackageVod {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: sdk::Client::new(config),
        }
    }
}

fn tags(src: Option<&HashMap<String, String>>) -> Option<Tags> {
    src.map(|map| {
        map.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    })
}

fn sdk_tags(tags: &Tags) -> HashMap<String, String> {
    tags.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn optional_sdk_tags(tags: &Tags) -> Option<HashMap<String, String>> {
    (!tags.is_empty()).then(|| sdk_tags(tags))
}

fn asset_shallow(src: &types::AssetShallow) -> AssetShallow {
    AssetShallow {
        arn: owned(src.arn()),
        created_at: owned(src.created_at()),
        id: owned(src.id()),
        packaging_group_id: owned(src.packaging_group_id()),
        resource_id: owned(src.resource_id()),
        source_arn: owned(src.source_arn()),
        source_role_arn: owned(src.source_role_arn()),
        tags: tags(src.tags()),
    }
}

fn egress_endpoint(src: &types::EgressEndpoint) -> EgressEndpoint {
    EgressEndpoint {
        packaging_configuration_id: owned(src.packaging_configuration_id()),
        status: owned(src.status()),
        url: owned(src.url()),
    }
}

fn packaging_configuration(src: &types::PackagingConfiguration) -> PackagingConfiguration {
    let package_type = if src.cmaf_package().is_some() {
        Some("CMAF")
    } else if src.dash_package().is_some() {
        Some("DASH")
    } else if src.hls_package().is_some() {
        Some("HLS")
    } else if src.mss_package().is_some() {
        Some("MSS")
    } else {
        None
    };
    PackagingConfiguration {
        arn: owned(src.arn()),
        id: owned(src.id()),
        packaging_group_id: owned(src.packaging_group_id()),
        package_type: package_type.map(str::to_string),
        tags: tags(src.tags()),
    }
}

// DescribeAssetOutput and CreateAssetOutput carry the same fields.
macro_rules! asset {
    ($src:expr) => {{
        let src = $src;
        Asset {
            arn: owned(src.arn()),
            created_at: owned(src.created_at()),
            egress_endpoints: src.egress_endpoints().iter().map(egress_endpoint).collect(),
            id: owned(src.id()),
            packaging_group_id: owned(src.packaging_group_id()),
            resource_id: owned(src.resource_id()),
            source_arn: owned(src.source_arn()),
            source_role_arn: owned(src.source_role_arn()),
            tags: tags(src.tags()),
        }
    }};
}

// Only the describe and list shapes report an asset count.
macro_rules! packaging_group {
    ($src:expr, $count:expr) => {{
        let src = $src;
        PackagingGroup {
            approximate_asset_count: $count,
            arn: owned(src.arn()),
            domain_name: owned(src.domain_name()),
            id: owned(src.id()),
            tags: tags(src.tags()),
        }
    }};
}

#[async_trait]
impl MediaPackageVodApi for SdkMediaPackageVod {
    async fn list_assets(
        &self,
        request: &ListAssetsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<ListAssetsResponse> {
        let output = self
            .client
            .list_assets()
            .set_max_results(request.max_results)
            .set_next_token(request.next_token.clone())
            .set_packaging_group_id(request.packaging_group_id.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(ListAssetsResponse {
            assets: output.assets().iter().map(asset_shallow).collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn describe_asset(
        &self,
        request: &AssetIdRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<Asset> {
        let output = self
            .client
            .describe_asset()
            .id(&request.id)
            .send()
            .await
            .map_err(service_error)?;

        Ok(asset!(&output))
    }

    async fn create_asset(
        &self,
        request: &CreateAssetRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<Asset> {
        let output = self
            .client
            .create_asset()
            .id(&request.id)
            .packaging_group_id(&request.packaging_group_id)
            .set_resource_id(request.resource_id.clone())
            .source_arn(&request.source_arn)
            .source_role_arn(&request.source_role_arn)
            .set_tags(optional_sdk_tags(&request.tags))
            .send()
            .await
            .map_err(service_error)?;

        Ok(asset!(&output))
    }

    async fn delete_asset(
        &self,
        request: &AssetIdRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .delete_asset()
            .id(&request.id)
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }

    async fn list_packaging_groups(
        &self,
        request: &ListPackagingGroupsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingGroupsResponse> {
        let output = self
            .client
            .list_packaging_groups()
            .set_max_results(request.max_results)
            .set_next_token(request.next_token.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(ListPackagingGroupsResponse {
            packaging_groups: output
                .packaging_groups()
                .iter()
                .map(|group| packaging_group!(group, group.approximate_asset_count()))
                .collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn describe_packaging_group(
        &self,
        request: &PackagingGroupIdRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup> {
        let output = self
            .client
            .describe_packaging_group()
            .id(&request.id)
            .send()
            .await
            .map_err(service_error)?;

        Ok(packaging_group!(&output, output.approximate_asset_count()))
    }

    async fn create_packaging_group(
        &self,
        request: &CreatePackagingGroupRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<PackagingGroup> {
        let output = self
            .client
            .create_packaging_group()
            .id(&request.id)
            .set_tags(optional_sdk_tags(&request.tags))
            .send()
            .await
            .map_err(service_error)?;

        Ok(packaging_group!(&output, None))
    }

    async fn delete_packaging_group(
        &self,
        request: &PackagingGroupIdRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .delete_packaging_group()
            .id(&request.id)
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }

    async fn list_packaging_configurations(
        &self,
        request: &ListPackagingConfigurationsRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<ListPackagingConfigurationsResponse> {
        let output = self
            .client
            .list_packaging_configurations()
            .set_max_results(request.max_results)
            .set_next_token(request.next_token.clone())
            .set_packaging_group_id(request.packaging_group_id.clone())
            .send()
            .await
            .map_err(service_error)?;

        Ok(ListPackagingConfigurationsResponse {
            packaging_configurations: output
                .packaging_configurations()
                .iter()
                .map(packaging_configuration)
                .collect(),
            next_token: owned(output.next_token()),
        })
    }

    async fn list_tags_for_resource(
        &self,
        request: &ResourceArnRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<ListTagsForResourceResponse> {
        let output = self
            .client
            .list_tags_for_resource()
            .resource_arn(&request.resource_arn)
            .send()
            .await
            .map_err(service_error)?;

        Ok(ListTagsForResourceResponse {
            tags: tags(output.tags()).unwrap_or_default(),
        })
    }

    async fn tag_resource(
        &self,
        request: &TagResourceRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .tag_resource()
            .resource_arn(&request.resource_arn)
            .set_tags(Some(sdk_tags(&request.tags)))
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }

    async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
        _cancel: &CancellationToken,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .untag_resource()
            .resource_arn(&request.resource_arn)
            .set_tag_keys(Some(request.tag_keys.clone()))
            .send()
            .await
            .map_err(service_error)?;
        Ok(EmptyResponse)
    }
}
