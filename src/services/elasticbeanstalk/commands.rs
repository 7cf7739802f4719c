use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};

use super::models::*;
use super::operations::*;
use super::ElasticBeanstalkApi;
use crate::cli::{parse_key_value, required, MutatingArgs, PagingArgs, SelectArgs};
use crate::error::{CmdletError, Result};
use crate::invoke::{invoke, invoke_paged, Host, InvocationSummary};

#[derive(Subcommand, Debug)]
pub enum EbCommand {
    #[command(
        name = "get-eb-application",
        visible_alias = "Get-EBApplication",
        about = "Describe applications (DescribeApplications)"
    )]
    GetApplication(GetApplicationArgs),

    #[command(
        name = "new-eb-application",
        visible_alias = "New-EBApplication",
        about = "Create an application (CreateApplication)"
    )]
    NewApplication(NewApplicationArgs),

    #[command(
        name = "remove-eb-application",
        visible_alias = "Remove-EBApplication",
        about = "Delete an application (DeleteApplication)"
    )]
    RemoveApplication(RemoveApplicationArgs),

    #[command(
        name = "get-eb-application-version",
        visible_alias = "Get-EBApplicationVersion",
        about = "Describe application versions (DescribeApplicationVersions)"
    )]
    GetApplicationVersion(GetApplicationVersionArgs),

    #[command(
        name = "get-eb-environment",
        visible_alias = "Get-EBEnvironment",
        about = "Describe environments (DescribeEnvironments)"
    )]
    GetEnvironment(GetEnvironmentArgs),

    #[command(
        name = "new-eb-environment",
        visible_alias = "New-EBEnvironment",
        about = "Launch an environment (CreateEnvironment)"
    )]
    NewEnvironment(NewEnvironmentArgs),

    #[command(
        name = "stop-eb-environment",
        visible_alias = "Stop-EBEnvironment",
        about = "Terminate an environment (TerminateEnvironment)"
    )]
    StopEnvironment(StopEnvironmentArgs),

    #[command(
        name = "restart-eb-app-server",
        visible_alias = "Restart-EBAppServer",
        about = "Restart the application server on every instance (RestartAppServer)"
    )]
    RestartAppServer(EnvironmentTargetArgs),

    #[command(
        name = "get-eb-event",
        visible_alias = "Get-EBEvent",
        about = "Describe events (DescribeEvents)"
    )]
    GetEvent(GetEventArgs),

    #[command(
        name = "get-eb-available-solution-stack",
        visible_alias = "Get-EBAvailableSolutionStack",
        about = "List available solution stacks (ListAvailableSolutionStacks)"
    )]
    GetAvailableSolutionStack(SelectArgs),

    #[command(
        name = "get-eb-dns-availability",
        visible_alias = "Get-EBDNSAvailability",
        about = "Check whether a CNAME prefix is available (CheckDNSAvailability)"
    )]
    GetDnsAvailability(GetDnsAvailabilityArgs),
}

#[derive(Args, Debug)]
pub struct GetApplicationArgs {
    #[arg(long = "application-name", value_delimiter = ',')]
    pub application_name: Vec<String>,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetApplicationArgs {
    pub fn request(&self) -> DescribeApplicationsRequest {
        DescribeApplicationsRequest {
            application_names: self.application_name.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct NewApplicationArgs {
    #[arg(long = "application-name")]
    pub application_name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long = "tag", value_parser = parse_key_value, help = "Tag as Key=Value (repeatable)")]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl NewApplicationArgs {
    pub fn request(&self) -> CreateApplicationRequest {
        CreateApplicationRequest {
            application_name: self.application_name.clone(),
            description: self.description.clone(),
            tags: tags(&self.tags),
        }
    }
}

#[derive(Args, Debug)]
pub struct RemoveApplicationArgs {
    #[arg(long = "application-name")]
    pub application_name: String,

    #[arg(long = "terminate-env-by-force")]
    pub terminate_env_by_force: bool,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl RemoveApplicationArgs {
    pub fn request(&self) -> DeleteApplicationRequest {
        DeleteApplicationRequest {
            application_name: self.application_name.clone(),
            terminate_env_by_force: self.terminate_env_by_force.then_some(true),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetApplicationVersionArgs {
    #[arg(long = "application-name")]
    pub application_name: Option<String>,

    #[arg(long = "version-label", value_delimiter = ',')]
    pub version_label: Vec<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetApplicationVersionArgs {
    pub fn request(&self) -> DescribeApplicationVersionsRequest {
        DescribeApplicationVersionsRequest {
            application_name: self.application_name.clone(),
            version_labels: self.version_label.clone(),
            max_records: None,
            next_token: self.paging.next_token.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetEnvironmentArgs {
    #[arg(long = "application-name")]
    pub application_name: Option<String>,

    #[arg(long = "version-label")]
    pub version_label: Option<String>,

    #[arg(long = "environment-id", value_delimiter = ',')]
    pub environment_id: Vec<String>,

    #[arg(long = "environment-name", value_delimiter = ',')]
    pub environment_name: Vec<String>,

    #[arg(long = "include-deleted")]
    pub include_deleted: bool,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetEnvironmentArgs {
    pub fn request(&self) -> DescribeEnvironmentsRequest {
        DescribeEnvironmentsRequest {
            application_name: self.application_name.clone(),
            version_label: self.version_label.clone(),
            environment_ids: self.environment_id.clone(),
            environment_names: self.environment_name.clone(),
            include_deleted: self.include_deleted.then_some(true),
            max_records: None,
            next_token: self.paging.next_token.clone(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierName {
    #[value(name = "WebServer", alias = "webserver")]
    WebServer,
    #[value(name = "Worker", alias = "worker")]
    Worker,
}

#[derive(Args, Debug)]
pub struct NewEnvironmentArgs {
    #[arg(long = "application-name")]
    pub application_name: String,

    #[arg(long = "environment-name")]
    pub environment_name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long = "cname-prefix")]
    pub cname_prefix: Option<String>,

    #[arg(long, value_enum)]
    pub tier: Option<TierName>,

    #[arg(long = "version-label")]
    pub version_label: Option<String>,

    #[arg(long = "template-name")]
    pub template_name: Option<String>,

    #[arg(long = "solution-stack-name")]
    pub solution_stack_name: Option<String>,

    #[arg(long = "platform-arn")]
    pub platform_arn: Option<String>,

    #[arg(long = "tag", value_parser = parse_key_value, help = "Tag as Key=Value (repeatable)")]
    pub tags: Vec<(String, String)>,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl NewEnvironmentArgs {
    pub fn request(&self) -> Result<CreateEnvironmentRequest> {
        if self.solution_stack_name.is_some() && self.platform_arn.is_some() {
            return Err(CmdletError::invalid_argument(
                "PlatformArn",
                self.platform_arn.clone().unwrap_or_default(),
                "specify either a solution stack name or a platform ARN, not both",
            ));
        }
        Ok(CreateEnvironmentRequest {
            application_name: self.application_name.clone(),
            environment_name: self.environment_name.clone(),
            description: self.description.clone(),
            cname_prefix: self.cname_prefix.clone(),
            tier: self.tier.map(|tier| match tier {
                TierName::WebServer => EnvironmentTier::web_server(),
                TierName::Worker => EnvironmentTier::worker(),
            }),
            version_label: self.version_label.clone(),
            template_name: self.template_name.clone(),
            solution_stack_name: self.solution_stack_name.clone(),
            platform_arn: self.platform_arn.clone(),
            tags: tags(&self.tags),
        })
    }
}

#[derive(Args, Debug)]
pub struct StopEnvironmentArgs {
    #[command(flatten)]
    pub environment: EnvironmentSelector,

    #[arg(long = "terminate-resources", help = "Also terminate the environment's AWS resources")]
    pub terminate_resources: Option<bool>,

    #[arg(long = "force-terminate")]
    pub force_terminate: bool,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl StopEnvironmentArgs {
    pub fn request(&self) -> Result<TerminateEnvironmentRequest> {
        self.environment.validate()?;
        Ok(TerminateEnvironmentRequest {
            environment_id: self.environment.environment_id.clone(),
            environment_name: self.environment.environment_name.clone(),
            terminate_resources: self.terminate_resources,
            force_terminate: self.force_terminate.then_some(true),
        })
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct EnvironmentSelector {
    #[arg(long = "environment-id")]
    pub environment_id: Option<String>,

    #[arg(long = "environment-name")]
    pub environment_name: Option<String>,
}

impl EnvironmentSelector {
    /// At least one of the two identifiers is needed.
    pub fn validate(&self) -> Result<()> {
        if self.environment_id.is_none() && self.environment_name.is_none() {
            return Err(CmdletError::MissingParameter("EnvironmentId or EnvironmentName"));
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct EnvironmentTargetArgs {
    #[command(flatten)]
    pub environment: EnvironmentSelector,

    #[command(flatten)]
    pub output: MutatingArgs,
}

impl EnvironmentTargetArgs {
    pub fn request(&self) -> Result<RestartAppServerRequest> {
        self.environment.validate()?;
        Ok(RestartAppServerRequest {
            environment_id: self.environment.environment_id.clone(),
            environment_name: self.environment.environment_name.clone(),
        })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

#[derive(Args, Debug)]
pub struct GetEventArgs {
    #[arg(long = "application-name")]
    pub application_name: Option<String>,

    #[arg(long = "version-label")]
    pub version_label: Option<String>,

    #[arg(long = "template-name")]
    pub template_name: Option<String>,

    #[command(flatten)]
    pub environment: EnvironmentSelector,

    #[arg(long = "request-id")]
    pub request_id: Option<String>,

    #[arg(long, value_enum, ignore_case = true)]
    pub severity: Option<Severity>,

    #[arg(long = "start-time", help = "RFC 3339 timestamp, e.g. 2024-05-01T00:00:00Z")]
    pub start_time: Option<DateTime<Utc>>,

    #[arg(long = "end-time", help = "RFC 3339 timestamp")]
    pub end_time: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub paging: PagingArgs,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetEventArgs {
    pub fn request(&self) -> Result<DescribeEventsRequest> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(CmdletError::invalid_argument(
                    "EndTime",
                    end.to_rfc3339(),
                    "the end time is before the start time",
                ));
            }
        }
        Ok(DescribeEventsRequest {
            application_name: self.application_name.clone(),
            version_label: self.version_label.clone(),
            template_name: self.template_name.clone(),
            environment_id: self.environment.environment_id.clone(),
            environment_name: self.environment.environment_name.clone(),
            request_id: self.request_id.clone(),
            severity: self.severity.map(|s| s.as_str().to_string()),
            start_time: self.start_time,
            end_time: self.end_time,
            max_records: None,
            next_token: self.paging.next_token.clone(),
        })
    }
}

#[derive(Args, Debug)]
pub struct GetDnsAvailabilityArgs {
    #[arg(long = "cname-prefix")]
    pub cname_prefix: Option<String>,

    #[command(flatten)]
    pub output: SelectArgs,
}

impl GetDnsAvailabilityArgs {
    pub fn request(&self) -> Result<CheckDnsAvailabilityRequest> {
        Ok(CheckDnsAvailabilityRequest {
            cname_prefix: required(self.cname_prefix.clone(), "CNAMEPrefix")?,
        })
    }
}

fn tags(pairs: &[(String, String)]) -> Vec<Tag> {
    pairs
        .iter()
        .map(|(key, value)| Tag {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

pub async fn run(
    command: EbCommand,
    host: &mut Host<'_>,
    client: &(dyn ElasticBeanstalkApi + 'static),
) -> Result<InvocationSummary> {
    match command {
        EbCommand::GetApplication(args) => {
            invoke::<GetEBApplication>(host, client, args.request(), &args.output.options()).await
        }
        EbCommand::NewApplication(args) => {
            invoke::<NewEBApplication>(host, client, args.request(), &args.output.options()).await
        }
        EbCommand::RemoveApplication(args) => {
            invoke::<RemoveEBApplication>(host, client, args.request(), &args.output.options())
                .await
        }
        EbCommand::GetApplicationVersion(args) => {
            invoke_paged::<GetEBApplicationVersion>(
                host,
                client,
                args.request(),
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        EbCommand::GetEnvironment(args) => {
            invoke_paged::<GetEBEnvironment>(
                host,
                client,
                args.request(),
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        EbCommand::NewEnvironment(args) => {
            invoke::<NewEBEnvironment>(host, client, args.request()?, &args.output.options()).await
        }
        EbCommand::StopEnvironment(args) => {
            invoke::<StopEBEnvironment>(host, client, args.request()?, &args.output.options())
                .await
        }
        EbCommand::RestartAppServer(args) => {
            invoke::<RestartEBAppServer>(host, client, args.request()?, &args.output.options())
                .await
        }
        EbCommand::GetEvent(args) => {
            invoke_paged::<GetEBEvent>(
                host,
                client,
                args.request()?,
                &args.output.options(),
                &args.paging.options()?,
            )
            .await
        }
        EbCommand::GetAvailableSolutionStack(args) => {
            invoke::<GetEBAvailableSolutionStack>(
                host,
                client,
                ListAvailableSolutionStacksRequest,
                &args.options(),
            )
            .await
        }
        EbCommand::GetDnsAvailability(args) => {
            invoke::<GetEBDNSAvailability>(host, client, args.request()?, &args.output.options())
                .await
        }
    }
}
