use clap::{Args, Subcommand};

use super::models::*;
use super::operations::*;
use super::MediaPackageVodApi;
use crate::cli::{parse_key_value, MutatingArgs, PagingArgs, SelectArgs};
use crate::error::{CmdletError, Result};
use crate::invoke::{invoke, invoke_paged, Host, InvocationSummary};

#[derive(Subcommand, Debug)]
pub enum VodCommand {
    #[command(
        name = "get-empv-asset-list",
        visible_alias = "Get-EMPVAssetList",
        about = "List assets (ListAssets)"
    )]
    GetAssetList(GetAssetListArgs),

    #[command(
        name = "get-empv-asset",
        visible_alias = "Get-EMPVAsset",
        about = "Describe an asset (DescribeAsset)"
    )]
    GetAsset(GetAssetArgs),

    #[command(
        name = "new-empv-asset",
        visible_alias = "New-EMPVAsset",
        about = "Create an asset (CreateAsset)"
    )]
    NewAsset(NewAssetArgs),

    #[command(
        name = "remove-empv-asset",
        visible_alias = "Remove-EMPVAsset",
        about = "Delete an asset (DeleteAsset)"
    )]
    RemoveAsset(RemoveAssetArgs),

    #[command(
        name = "get-empv-packaging-group-list",
        visible_alias = "Get-EMPVPackagingGroupList",
        about = "List packaging groups (ListPackagingGroups)"
    )]
    GetPackagingGroupList(GetPackagingGroupListArgs),

    #[command(
        name = "get-empv-packaging-group",
        visible_alias = "Get-EMPVPackagingGroup",
        about = "Describe a packaging group (DescribePackagingGroup)"
    )]
    GetPackagingGroup(GetPackagingGroupArgs),

    #[command(
        name = "new-empv-packaging-group",
        visible_alias = "New-EMPVPackagingGroup",
        about = "Create a packaging group (CreatePackagingGroup)"
    )]
    NewPackagingGroup(NewPackagingGroupArgs),

    #[command(
        name = "remove-empv-packaging-group",
        visible_alias = "Remove-EMPVPackagingGroup",
        about = "Delete a packaging group (DeletePackagingGroup)"
    )]
    RemovePackagingGroup(RemovePackagingGroupArgs),

    #[command(
        name = "get-empv-packaging-configuration-list",
        visible_alias = "Get-EMPVPackagingConfigurationList",
        about = "List packaging configurations (ListPackagingConfigurations)"
    )]
    GetPackagingConfigurationList(GetPackagingConfigurationListArgs),

    #[command(
        name = "get-empv-resource-tag",
        visible_alias = "Get-EMPVResourceTag",
        about = "List the tags on a resource (ListTagsForResource)"
    )]
    GetResourceTag(GetResourceTagArgs),

    #[command(
        name = "add-empv-resource-tag",
        visible_alias = "Add-EMPVResourceTag",
        about = "Tag a resource (TagResource)"
    )]
    AddResourceTag(AddResourceTagArgs),

    #[command(
        name = "remove-empv-resource-tag",
        visible_alias = "Remove-EMPVResourceTag",
        about = "Remove tags from a resource (UntagResource)"
    )]
    RemoveResourceTag(RemoveResourceTagArgs),
}

#[derive(Args, Debug)]
pub struct GetAssetListArgs {
    #[arg(long = "packaging-group-id")]
    pub packaging_group_id: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetAssetListArgs {
    pub fn request(&self) -> ListAssetsRequest {
        ListAssetsRequest {
            max_results: None,
            next_token: self.paging.next_token.clone(),
            packaging_group_id: self.packaging_group_id.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetAssetArgs {
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub output: SelectArgs,
}

#[derive(Args, Debug)]
pub struct NewAssetArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long = "packaging-group-id")]
    pub packaging_group_id: String,

    #[arg(long = "resource-id")]
    pub resource_id: Option<String>,

    #[arg(long = "source-arn", help = "ARN of the S3 object the asset is ingested from")]
    pub source_arn: String,

    #[arg(long = "source-role-arn", help = "IAM role MediaPackage assumes to read the source")]
    pub source_role_arn: String,

    #[arg(long = "tag", value_parser = parse_key_value, help = "Tag as Key=Value (repeatable)")]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl NewAssetArgs {
    pub fn request(&self) -> CreateAssetRequest {
        CreateAssetRequest {
            id: self.id.clone(),
            packaging_group_id: self.packaging_group_id.clone(),
            resource_id: self.resource_id.clone(),
            source_arn: self.source_arn.clone(),
            source_role_arn: self.source_role_arn.clone(),
            tags: tags(&self.tags),
        }
    }
}

#[derive(Args, Debug)]
pub struct RemoveAssetArgs {
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub output: MutatingArgs,
}

#[derive(Args, Debug)]
pub struct GetPackagingGroupListArgs {
    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetPackagingGroupListArgs {
    pub fn request(&self) -> ListPackagingGroupsRequest {
        ListPackagingGroupsRequest {
            max_results: None,
            next_token: self.paging.next_token.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetPackagingGroupArgs {
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub output: SelectArgs,
}

#[derive(Args, Debug)]
pub struct NewPackagingGroupArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long = "tag", value_parser = parse_key_value, help = "Tag as Key=Value (repeatable)")]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

#[derive(Args, Debug)]
pub struct RemovePackagingGroupArgs {
    #[arg(long)]
    pub id: String,

    #[command(flatten)]
    pub output: MutatingArgs,
}

#[derive(Args, Debug)]
pub struct GetPackagingConfigurationListArgs {
    #[arg(long = "packaging-group-id")]
    pub packaging_group_id: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetPackagingConfigurationListArgs {
    pub fn request(&self) -> ListPackagingConfigurationsRequest {
        ListPackagingConfigurationsRequest {
            max_results: None,
            next_token: self.paging.next_token.clone(),
            packaging_group_id: self.packaging_group_id.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetResourceTagArgs {
    #[arg(long = "resource-arn")]
    pub resource_arn: String,

    #[command(flatten)]
    pub output: SelectArgs,
}

#[derive(Args, Debug)]
pub struct AddResourceTagArgs {
    #[arg(long = "resource-arn")]
    pub resource_arn: String,

    #[arg(long = "tag", value_parser = parse_key_value, help = "Tag as Key=Value (repeatable)")]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl AddResourceTagArgs {
    pub fn request(&self) -> Result<TagResourceRequest> {
        if self.tags.is_empty() {
            return Err(CmdletError::MissingParameter("Tag"));
        }
        Ok(TagResourceRequest {
            resource_arn: self.resource_arn.clone(),
            tags: tags(&self.tags),
        })
    }
}

#[derive(Args, Debug)]
pub struct RemoveResourceTagArgs {
    #[arg(long = "resource-arn")]
    pub resource_arn: String,

    #[arg(long = "tag-key", value_delimiter = ',')]
    pub tag_keys: Vec<String>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl RemoveResourceTagArgs {
    pub fn request(&self) -> Result<UntagResourceRequest> {
        if self.tag_keys.is_empty() {
            return Err(CmdletError::MissingParameter("TagKey"));
        }
        Ok(UntagResourceRequest {
            resource_arn: self.resource_arn.clone(),
            tag_keys: self.tag_keys.clone(),
        })
    }
}

/// Later pairs win when a key repeats.
fn tags(pairs: &[(String, String)]) -> Tags {
    pairs.iter().cloned().collect()
}

pub async fn run(
    command: VodCommand,
    host: &mut Host<'_>,
    client: &(dyn MediaPackageVodApi + 'static),
) -> Result<InvocationSummary> {
    match command {
        VodCommand::GetAssetList(args) => {
            invoke_paged::<GetEMPVAssetList>(
                host,
                client,
                args.request(),
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        VodCommand::GetAsset(args) => {
            let request = AssetIdRequest { id: args.id };
            invoke::<GetEMPVAsset>(host, client, request, &args.output.options()).await
        }
        VodCommand::NewAsset(args) => {
            invoke::<NewEMPVAsset>(host, client, args.request(), &args.output.options()).await
        }
        VodCommand::RemoveAsset(args) => {
            let request = AssetIdRequest { id: args.id };
            invoke::<RemoveEMPVAsset>(host, client, request, &args.output.options()).await
        }
        VodCommand::GetPackagingGroupList(args) => {
            invoke_paged::<GetEMPVPackagingGroupList>(
                host,
                client,
                args.request(),
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        VodCommand::GetPackagingGroup(args) => {
            let request = PackagingGroupIdRequest { id: args.id };
            invoke::<GetEMPVPackagingGroup>(host, client, request, &args.output.options()).await
        }
        VodCommand::NewPackagingGroup(args) => {
            let request = CreatePackagingGroupRequest {
                id: args.id,
                tags: tags(&args.tags),
            };
            invoke::<NewEMPVPackagingGroup>(host, client, request, &args.output.options()).await
        }
        VodCommand::RemovePackagingGroup(args) => {
            let request = PackagingGroupIdRequest { id: args.id };
            invoke::<RemoveEMPVPackagingGroup>(host, client, request, &args.output.options())
                .await
        }
        VodCommand::GetPackagingConfigurationList(args) => {
            invoke_paged::<GetEMPVPackagingConfigurationList>(
                host,
                client,
                args.request(),
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        VodCommand::GetResourceTag(args) => {
            let request = ResourceArnRequest {
                resource_arn: args.resource_arn,
            };
            invoke::<GetEMPVResourceTag>(host, client, request, &args.output.options()).await
        }
        VodCommand::AddResourceTag(args) => {
            invoke::<AddEMPVResourceTag>(host, client, args.request()?, &args.output.options())
                .await
        }
        VodCommand::RemoveResourceTag(args) => {
            invoke::<RemoveEMPVResourceTag>(host, client, args.request()?, &args.output.options())
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_last_value_wins() {
        let converted = tags(&[
            ("env".into(), "dev".into()),
            ("env".into(), "prod".into()),
            ("team".into(), "media".into()),
        ]);
        assert_eq!(converted.len(), 2);
        assert_eq!(converted["env"], "prod");
    }

    #[test]
    fn test_add_tag_requires_a_tag() {
        let args = AddResourceTagArgs {
            resource_arn: "arn:aws:mediapackage-vod:us-east-1:1:assets/a1".into(),
            tags: vec![],
            output: MutatingArgs::default(),
        };
        assert!(matches!(
            args.request(),
            Err(CmdletError::MissingParameter("Tag"))
        ));
    }

    #[test]
    fn test_remove_tag_requires_a_key() {
        let args = RemoveResourceTagArgs {
            resource_arn: "arn".into(),
            tag_keys: vec![],
            output: MutatingArgs::default(),
        };
        assert!(args.request().is_err());
    }
}
