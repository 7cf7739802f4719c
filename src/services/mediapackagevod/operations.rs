//! MediaPackage VOD operation table.

use super::models::*;
use super::MediaPackageVodApi;
use crate::invoke::{operation, paginated, OperationInfo};
use crate::select::{field_set, Selection};
use crate::services::{NoField, Service};

field_set! {
    pub enum AssetsField for ListAssetsResponse {
        Assets => assets,
        NextToken => next_token,
    }
}

field_set! {
    pub enum ListAssetsParam for ListAssetsRequest {
        MaxResult => max_results,
        NextToken => next_token,
        PackagingGroupId => packaging_group_id,
    }
}

operation! {
    /// Returns a collection of MediaPackage VOD Asset resources.
    pub struct GetEMPVAssetList {
        cmdlet: "Get-EMPVAssetList",
        action: "ListAssets",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: ListAssetsRequest,
        response: ListAssetsResponse,
        fields: AssetsField,
        params: ListAssetsParam,
        default: Selection::Field(AssetsField::Assets),
        target: |r| r.packaging_group_id.clone().unwrap_or_default(),
        call: list_assets,
    }
}

paginated!(GetEMPVAssetList {
    item: AssetShallow,
    items: assets,
    page_size: max_results,
    max_page_size: 1000,
});

field_set! {
    pub enum AssetField for Asset {
        Arn => arn,
        CreatedAt => created_at,
        EgressEndpoint => egress_endpoints,
        Id => id,
        PackagingGroupId => packaging_group_id,
        ResourceId => resource_id,
        SourceArn => source_arn,
        SourceRoleArn => source_role_arn,
        Tag => tags,
    }
}

field_set! {
    pub enum AssetIdParam for AssetIdRequest {
        Id => id,
    }
}

operation! {
    /// Returns a description of a MediaPackage VOD Asset resource.
    pub struct GetEMPVAsset {
        cmdlet: "Get-EMPVAsset",
        action: "DescribeAsset",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: AssetIdRequest,
        response: Asset,
        fields: AssetField,
        params: AssetIdParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: describe_asset,
    }
}

field_set! {
    pub enum CreateAssetParam for CreateAssetRequest {
        Id => id,
        PackagingGroupId => packaging_group_id,
        ResourceId => resource_id,
        SourceArn => source_arn,
        SourceRoleArn => source_role_arn,
        Tag => tags,
    }
}

operation! {
    /// Creates a new MediaPackage VOD Asset resource.
    pub struct NewEMPVAsset {
        cmdlet: "New-EMPVAsset",
        action: "CreateAsset",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: CreateAssetRequest,
        response: Asset,
        fields: AssetField,
        params: CreateAssetParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: create_asset,
    }
}

operation! {
    /// Deletes a MediaPackage VOD Asset resource.
    pub struct RemoveEMPVAsset {
        cmdlet: "Remove-EMPVAsset",
        action: "DeleteAsset",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: AssetIdRequest,
        response: EmptyResponse,
        fields: NoField,
        params: AssetIdParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: delete_asset,
    }
}

field_set! {
    pub enum PackagingGroupsField for ListPackagingGroupsResponse {
        PackagingGroups => packaging_groups,
        NextToken => next_token,
    }
}

field_set! {
    pub enum ListPackagingGroupsParam for ListPackagingGroupsRequest {
        MaxResult => max_results,
        NextToken => next_token,
    }
}

operation! {
    /// Returns a collection of MediaPackage VOD PackagingGroup resources.
    pub struct GetEMPVPackagingGroupList {
        cmdlet: "Get-EMPVPackagingGroupList",
        action: "ListPackagingGroups",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: ListPackagingGroupsRequest,
        response: ListPackagingGroupsResponse,
        fields: PackagingGroupsField,
        params: ListPackagingGroupsParam,
        default: Selection::Field(PackagingGroupsField::PackagingGroups),
        target: |_| String::new(),
        call: list_packaging_groups,
    }
}

paginated!(GetEMPVPackagingGroupList {
    item: PackagingGroup,
    items: packaging_groups,
    page_size: max_results,
    max_page_size: 1000,
});

field_set! {
    pub enum PackagingGroupField for PackagingGroup {
        ApproximateAssetCount => approximate_asset_count,
        Arn => arn,
        DomainName => domain_name,
        Id => id,
        Tag => tags,
    }
}

field_set! {
    pub enum PackagingGroupIdParam for PackagingGroupIdRequest {
        Id => id,
    }
}

operation! {
    /// Returns a description of a MediaPackage VOD PackagingGroup resource.
    pub struct GetEMPVPackagingGroup {
        cmdlet: "Get-EMPVPackagingGroup",
        action: "DescribePackagingGroup",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: PackagingGroupIdRequest,
        response: PackagingGroup,
        fields: PackagingGroupField,
        params: PackagingGroupIdParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: describe_packaging_group,
    }
}

field_set! {
    pub enum CreatePackagingGroupParam for CreatePackagingGroupRequest {
        Id => id,
        Tag => tags,
    }
}

operation! {
    /// Creates a new MediaPackage VOD PackagingGroup resource.
    pub struct NewEMPVPackagingGroup {
        cmdlet: "New-EMPVPackagingGroup",
        action: "CreatePackagingGroup",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: CreatePackagingGroupRequest,
        response: PackagingGroup,
        fields: PackagingGroupField,
        params: CreatePackagingGroupParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: create_packaging_group,
    }
}

operation! {
    /// Deletes a MediaPackage VOD PackagingGroup resource.
    pub struct RemoveEMPVPackagingGroup {
        cmdlet: "Remove-EMPVPackagingGroup",
        action: "DeletePackagingGroup",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: PackagingGroupIdRequest,
        response: EmptyResponse,
        fields: NoField,
        params: PackagingGroupIdParam,
        default: Selection::Whole,
        target: |r| r.id.clone(),
        call: delete_packaging_group,
    }
}

field_set! {
    pub enum PackagingConfigurationsField for ListPackagingConfigurationsResponse {
        PackagingConfigurations => packaging_configurations,
        NextToken => next_token,
    }
}

field_set! {
    pub enum ListPackagingConfigurationsParam for ListPackagingConfigurationsRequest {
        MaxResult => max_results,
        NextToken => next_token,
        PackagingGroupId => packaging_group_id,
    }
}

operation! {
    /// Returns a collection of MediaPackage VOD PackagingConfiguration resources.
    pub struct GetEMPVPackagingConfigurationList {
        cmdlet: "Get-EMPVPackagingConfigurationList",
        action: "ListPackagingConfigurations",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: ListPackagingConfigurationsRequest,
        response: ListPackagingConfigurationsResponse,
        fields: PackagingConfigurationsField,
        params: ListPackagingConfigurationsParam,
        default: Selection::Field(PackagingConfigurationsField::PackagingConfigurations),
        target: |r| r.packaging_group_id.clone().unwrap_or_default(),
        call: list_packaging_configurations,
    }
}

paginated!(GetEMPVPackagingConfigurationList {
    item: PackagingConfiguration,
    items: packaging_configurations,
    page_size: max_results,
    max_page_size: 1000,
});

field_set! {
    pub enum TagsField for ListTagsForResourceResponse {
        Tags => tags,
    }
}

field_set! {
    pub enum ResourceArnParam for ResourceArnRequest {
        ResourceArn => resource_arn,
    }
}

operation! {
    /// Returns a list of the tags assigned to the specified resource.
    pub struct GetEMPVResourceTag {
        cmdlet: "Get-EMPVResourceTag",
        action: "ListTagsForResource",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: false,
        request: ResourceArnRequest,
        response: ListTagsForResourceResponse,
        fields: TagsField,
        params: ResourceArnParam,
        default: Selection::Field(TagsField::Tags),
        target: |r| r.resource_arn.clone(),
        call: list_tags_for_resource,
    }
}

field_set! {
    pub enum TagResourceParam for TagResourceRequest {
        ResourceArn => resource_arn,
        Tag => tags,
    }
}

operation! {
    /// Adds tags to the specified resource.
    pub struct AddEMPVResourceTag {
        cmdlet: "Add-EMPVResourceTag",
        action: "TagResource",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: TagResourceRequest,
        response: EmptyResponse,
        fields: NoField,
        params: TagResourceParam,
        default: Selection::Whole,
        target: |r| r.resource_arn.clone(),
        call: tag_resource,
    }
}

field_set! {
    pub enum UntagResourceParam for UntagResourceRequest {
        ResourceArn => resource_arn,
        TagKey => tag_keys,
    }
}

operation! {
    /// Removes tags from the specified resource.
    pub struct RemoveEMPVResourceTag {
        cmdlet: "Remove-EMPVResourceTag",
        action: "UntagResource",
        service: Service::MediaPackageVod,
        client: dyn MediaPackageVodApi,
        mutating: true,
        request: UntagResourceRequest,
        response: EmptyResponse,
        fields: NoField,
        params: UntagResourceParam,
        default: Selection::Whole,
        target: |r| r.resource_arn.clone(),
        call: untag_resource,
    }
}

pub fn catalog() -> Vec<OperationInfo> {
    vec![
        OperationInfo::paged::<GetEMPVAssetList>(),
        OperationInfo::of::<GetEMPVAsset>(),
        OperationInfo::of::<NewEMPVAsset>(),
        OperationInfo::of::<RemoveEMPVAsset>(),
        OperationInfo::paged::<GetEMPVPackagingGroupList>(),
        OperationInfo::of::<GetEMPVPackagingGroup>(),
        OperationInfo::of::<NewEMPVPackagingGroup>(),
        OperationInfo::of::<RemoveEMPVPackagingGroup>(),
        OperationInfo::paged::<GetEMPVPackagingConfigurationList>(),
        OperationInfo::of::<GetEMPVResourceTag>(),
        OperationInfo::of::<AddEMPVResourceTag>(),
        OperationInfo::of::<RemoveEMPVResourceTag>(),
    ]
}
