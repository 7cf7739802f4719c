//! Elastic Beanstalk operation table.

use super::models::*;
use super::ElasticBeanstalkApi;
use crate::invoke::{operation, paginated, OperationInfo};
use crate::select::{field_set, Selection};
use crate::services::{NoField, Service};

field_set! {
    pub enum NoParam for ListAvailableSolutionStacksRequest {}
}

field_set! {
    pub enum ApplicationsField for DescribeApplicationsResponse {
        Applications => applications,
    }
}

field_set! {
    pub enum DescribeApplicationsParam for DescribeApplicationsRequest {
        ApplicationName => application_names,
    }
}

operation! {
    /// Returns the descriptions of existing applications.
    pub struct GetEBApplication {
        cmdlet: "Get-EBApplication",
        action: "DescribeApplications",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: DescribeApplicationsRequest,
        response: DescribeApplicationsResponse,
        fields: ApplicationsField,
        params: DescribeApplicationsParam,
        default: Selection::Field(ApplicationsField::Applications),
        target: |r| r.application_names.join(","),
        call: describe_applications,
    }
}

field_set! {
    pub enum CreateApplicationField for CreateApplicationResponse {
        Application => application,
    }
}

field_set! {
    pub enum CreateApplicationParam for CreateApplicationRequest {
        ApplicationName => application_name,
        Description => description,
        Tag => tags,
    }
}

operation! {
    /// Creates an application that has one configuration template named `default` and no application versions.
    pub struct NewEBApplication {
        cmdlet: "New-EBApplication",
        action: "CreateApplication",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: true,
        request: CreateApplicationRequest,
        response: CreateApplicationResponse,
        fields: CreateApplicationField,
        params: CreateApplicationParam,
        default: Selection::Field(CreateApplicationField::Application),
        target: |r| r.application_name.clone(),
        call: create_application,
    }
}

field_set! {
    pub enum DeleteApplicationParam for DeleteApplicationRequest {
        ApplicationName => application_name,
        TerminateEnvByForce => terminate_env_by_force,
    }
}

operation! {
    /// Deletes the specified application along with all associated versions and configurations.
    pub struct RemoveEBApplication {
        cmdlet: "Remove-EBApplication",
        action: "DeleteApplication",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: true,
        request: DeleteApplicationRequest,
        response: EmptyResponse,
        fields: NoField,
        params: DeleteApplicationParam,
        default: Selection::Whole,
        target: |r| r.application_name.clone(),
        call: delete_application,
    }
}

field_set! {
    pub enum ApplicationVersionsField for DescribeApplicationVersionsResponse {
        ApplicationVersions => application_versions,
        NextToken => next_token,
    }
}

field_set! {
    pub enum DescribeApplicationVersionsParam for DescribeApplicationVersionsRequest {
        ApplicationName => application_name,
        VersionLabel => version_labels,
        MaxRecord => max_records,
        NextToken => next_token,
    }
}

operation! {
    /// Retrieves a list of application versions.
    pub struct GetEBApplicationVersion {
        cmdlet: "Get-EBApplicationVersion",
        action: "DescribeApplicationVersions",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: DescribeApplicationVersionsRequest,
        response: DescribeApplicationVersionsResponse,
        fields: ApplicationVersionsField,
        params: DescribeApplicationVersionsParam,
        default: Selection::Field(ApplicationVersionsField::ApplicationVersions),
        target: |r| r.application_name.clone().unwrap_or_default(),
        call: describe_application_versions,
    }
}

paginated!(GetEBApplicationVersion {
    item: ApplicationVersionDescription,
    items: application_versions,
    page_size: max_records,
    max_page_size: 1000,
});

field_set! {
    pub enum EnvironmentsField for DescribeEnvironmentsResponse {
        Environments => environments,
        NextToken => next_token,
    }
}

field_set! {
    pub enum DescribeEnvironmentsParam for DescribeEnvironmentsRequest {
        ApplicationName => application_name,
        VersionLabel => version_label,
        EnvironmentId => environment_ids,
        EnvironmentName => environment_names,
        IncludeDeleted => include_deleted,
        MaxRecord => max_records,
        NextToken => next_token,
    }
}

operation! {
    /// Returns descriptions for existing environments.
    pub struct GetEBEnvironment {
        cmdlet: "Get-EBEnvironment",
        action: "DescribeEnvironments",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: DescribeEnvironmentsRequest,
        response: DescribeEnvironmentsResponse,
        fields: EnvironmentsField,
        params: DescribeEnvironmentsParam,
        default: Selection::Field(EnvironmentsField::Environments),
        target: |r| r.application_name.clone().unwrap_or_default(),
        call: describe_environments,
    }
}

paginated!(GetEBEnvironment {
    item: EnvironmentDescription,
    items: environments,
    page_size: max_records,
    max_page_size: 1000,
});

field_set! {
    #[allow(clippy::upper_case_acronyms)]
    pub enum EnvironmentField for EnvironmentDescription {
        EnvironmentName => environment_name,
        EnvironmentId => environment_id,
        ApplicationName => application_name,
        VersionLabel => version_label,
        SolutionStackName => solution_stack_name,
        PlatformArn => platform_arn,
        TemplateName => template_name,
        Description => description,
        EndpointURL => endpoint_url,
        CNAME => cname,
        DateCreated => date_created,
        DateUpdated => date_updated,
        Status => status,
        AbortableOperationInProgress => abortable_operation_in_progress,
        Health => health,
        HealthStatus => health_status,
        Tier => tier,
        EnvironmentArn => environment_arn,
    }
}

field_set! {
    pub enum CreateEnvironmentParam for CreateEnvironmentRequest {
        ApplicationName => application_name,
        EnvironmentName => environment_name,
        Description => description,
        CNAMEPrefix => cname_prefix,
        Tier => tier,
        VersionLabel => version_label,
        TemplateName => template_name,
        SolutionStackName => solution_stack_name,
        PlatformArn => platform_arn,
        Tag => tags,
    }
}

operation! {
    /// Launches an Elastic Beanstalk environment for the specified application.
    pub struct NewEBEnvironment {
        cmdlet: "New-EBEnvironment",
        action: "CreateEnvironment",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: true,
        request: CreateEnvironmentRequest,
        response: EnvironmentDescription,
        fields: EnvironmentField,
        params: CreateEnvironmentParam,
        default: Selection::Whole,
        target: |r| match &r.environment_name {
            Some(name) => format!("{} ({})", name, r.application_name),
            None => r.application_name.clone(),
        },
        call: create_environment,
    }
}

field_set! {
    pub enum TerminateEnvironmentParam for TerminateEnvironmentRequest {
        EnvironmentId => environment_id,
        EnvironmentName => environment_name,
        TerminateResource => terminate_resources,
        ForceTerminate => force_terminate,
    }
}

operation! {
    /// Terminates the specified environment.
    pub struct StopEBEnvironment {
        cmdlet: "Stop-EBEnvironment",
        action: "TerminateEnvironment",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: true,
        request: TerminateEnvironmentRequest,
        response: EnvironmentDescription,
        fields: EnvironmentField,
        params: TerminateEnvironmentParam,
        default: Selection::Whole,
        target: |r| environment_target(&r.environment_id, &r.environment_name),
        call: terminate_environment,
    }
}

field_set! {
    pub enum RestartAppServerParam for RestartAppServerRequest {
        EnvironmentId => environment_id,
        EnvironmentName => environment_name,
    }
}

operation! {
    /// Causes the environment to restart the application container server running on each instance.
    pub struct RestartEBAppServer {
        cmdlet: "Restart-EBAppServer",
        action: "RestartAppServer",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: true,
        request: RestartAppServerRequest,
        response: EmptyResponse,
        fields: NoField,
        params: RestartAppServerParam,
        default: Selection::Whole,
        target: |r| environment_target(&r.environment_id, &r.environment_name),
        call: restart_app_server,
    }
}

field_set! {
    pub enum EventsField for DescribeEventsResponse {
        Events => events,
        NextToken => next_token,
    }
}

field_set! {
    pub enum DescribeEventsParam for DescribeEventsRequest {
        ApplicationName => application_name,
        VersionLabel => version_label,
        TemplateName => template_name,
        EnvironmentId => environment_id,
        EnvironmentName => environment_name,
        RequestId => request_id,
        Severity => severity,
        StartTime => start_time,
        EndTime => end_time,
        MaxRecord => max_records,
        NextToken => next_token,
    }
}

operation! {
    /// Returns list of event descriptions matching criteria up to the last 6 weeks.
    pub struct GetEBEvent {
        cmdlet: "Get-EBEvent",
        action: "DescribeEvents",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: DescribeEventsRequest,
        response: DescribeEventsResponse,
        fields: EventsField,
        params: DescribeEventsParam,
        default: Selection::Field(EventsField::Events),
        target: |r| environment_target(&r.environment_id, &r.environment_name),
        call: describe_events,
    }
}

paginated!(GetEBEvent {
    item: EventDescription,
    items: events,
    page_size: max_records,
    max_page_size: 1000,
});

field_set! {
    pub enum SolutionStacksField for ListAvailableSolutionStacksResponse {
        SolutionStacks => solution_stacks,
        SolutionStackDetails => solution_stack_details,
    }
}

operation! {
    /// Returns a list of the available solution stack names.
    pub struct GetEBAvailableSolutionStack {
        cmdlet: "Get-EBAvailableSolutionStack",
        action: "ListAvailableSolutionStacks",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: ListAvailableSolutionStacksRequest,
        response: ListAvailableSolutionStacksResponse,
        fields: SolutionStacksField,
        params: NoParam,
        default: Selection::Field(SolutionStacksField::SolutionStacks),
        target: |_| String::new(),
        call: list_available_solution_stacks,
    }
}

field_set! {
    #[allow(clippy::upper_case_acronyms)]
    pub enum DnsAvailabilityField for CheckDnsAvailabilityResponse {
        Available => available,
        FullyQualifiedCNAME => fully_qualified_cname,
    }
}

field_set! {
    pub enum DnsAvailabilityParam for CheckDnsAvailabilityRequest {
        CNAMEPrefix => cname_prefix,
    }
}

operation! {
    /// Checks if the specified CNAME is available.
    pub struct GetEBDNSAvailability {
        cmdlet: "Get-EBDNSAvailability",
        action: "CheckDNSAvailability",
        service: Service::ElasticBeanstalk,
        client: dyn ElasticBeanstalkApi,
        mutating: false,
        request: CheckDnsAvailabilityRequest,
        response: CheckDnsAvailabilityResponse,
        fields: DnsAvailabilityField,
        params: DnsAvailabilityParam,
        default: Selection::Whole,
        target: |r| r.cname_prefix.clone(),
        call: check_dns_availability,
    }
}

fn environment_target(id: &Option<String>, name: &Option<String>) -> String {
    name.clone().or_else(|| id.clone()).unwrap_or_default()
}

pub fn catalog() -> Vec<OperationInfo> {
    vec![
        OperationInfo::of::<GetEBApplication>(),
        OperationInfo::of::<NewEBApplication>(),
        OperationInfo::of::<RemoveEBApplication>(),
        OperationInfo::paged::<GetEBApplicationVersion>(),
        OperationInfo::paged::<GetEBEnvironment>(),
        OperationInfo::of::<NewEBEnvironment>(),
        OperationInfo::of::<StopEBEnvironment>(),
        OperationInfo::of::<RestartEBAppServer>(),
        OperationInfo::paged::<GetEBEvent>(),
        OperationInfo::of::<GetEBAvailableSolutionStack>(),
        OperationInfo::of::<GetEBDNSAvailability>(),
    ]
}
