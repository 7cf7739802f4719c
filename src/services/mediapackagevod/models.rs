use std::collections::BTreeMap;

use serde::Serialize;

pub use crate::services::EmptyResponse;

pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetShallow {
    pub arn: Option<String>,
    pub created_at: Option<String>,
    pub id: Option<String>,
    pub packaging_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub source_arn: Option<String>,
    pub source_role_arn: Option<String>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EgressEndpoint {
    pub packaging_configuration_id: Option<String>,
    pub status: Option<String>,
    pub url: Option<String>,
}

/// Full asset description, returned by both DescribeAsset and CreateAsset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Asset {
    pub arn: Option<String>,
    pub created_at: Option<String>,
    pub egress_endpoints: Vec<EgressEndpoint>,
    pub id: Option<String>,
    pub packaging_group_id: Option<String>,
    pub resource_id: Option<String>,
    pub source_arn: Option<String>,
    pub source_role_arn: Option<String>,
    pub tags: Option<Tags>,
}

/// Packaging group description, returned by the list, describe and create actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackagingGroup {
    pub approximate_asset_count: Option<i32>,
    pub arn: Option<String>,
    pub domain_name: Option<String>,
    pub id: Option<String>,
    pub tags: Option<Tags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackagingConfiguration {
    pub arn: Option<String>,
    pub id: Option<String>,
    pub packaging_group_id: Option<String>,
    /// Which of the CMAF, DASH, HLS or MSS package settings is present.
    pub package_type: Option<String>,
    pub tags: Option<Tags>,
}

// Requests and responses, one pair per action.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssetsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub packaging_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssetsResponse {
    pub assets: Vec<AssetShallow>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetIdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAssetRequest {
    pub id: String,
    pub packaging_group_id: String,
    pub resource_id: Option<String>,
    pub source_arn: String,
    pub source_role_arn: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPackagingGroupsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPackagingGroupsResponse {
    pub packaging_groups: Vec<PackagingGroup>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackagingGroupIdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackagingGroupRequest {
    pub id: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPackagingConfigurationsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub packaging_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPackagingConfigurationsResponse {
    pub packaging_configurations: Vec<PackagingConfiguration>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceArnRequest {
    pub resource_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceResponse {
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    pub resource_arn: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    pub resource_arn: String,
    pub tag_keys: Vec<String>,
}
