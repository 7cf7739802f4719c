//! Generic cmdlet invocation.
//!
//! Every command goes through [`invoke`] or [`invoke_paged`]: the selection
//! expression is validated first, mutating operations are confirmed, the
//! service call runs against the invocation's cancellation token, and the
//! selected part of the response is written to the output sink.

use async_trait::async_trait;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::confirm::Confirm;
use crate::context::ClientContext;
use crate::error::{CmdletError, Result, ServiceError};
use crate::paginate::{continuation, page_size_hint, PageOptions, Paginated};
use crate::select::{FieldSet, Selection};
use crate::services::Service;
use crate::ui::output::{emit, OutputSink};

/// One remote API operation exposed as a cmdlet.
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    /// Verb-noun name, e.g. `Get-EBEnvironment`.
    const CMDLET: &'static str;
    /// Service API action, e.g. `DescribeEnvironments`.
    const ACTION: &'static str;
    const SERVICE: Service;
    /// Whether the call changes remote state and needs confirmation.
    const MUTATING: bool;

    type Client: ?Sized + Send + Sync;
    type Request: Serialize + Send + Sync;
    type Response: Serialize + Send + Sync;
    type Field: FieldSet<Source = Self::Response>;
    type Param: FieldSet<Source = Self::Request>;

    fn default_selection() -> Selection<Self::Field, Self::Param>;

    /// Describes what a mutating call acts on, for the confirmation prompt.
    fn target(request: &Self::Request) -> String;

    async fn call(
        client: &Self::Client,
        request: &Self::Request,
        cancel: &CancellationToken,
    ) -> std::result::Result<Self::Response, ServiceError>;
}

/// Everything an invocation needs from its caller.
pub struct Host<'a> {
    pub context: &'a ClientContext,
    pub confirm: &'a dyn Confirm,
    pub sink: &'a mut dyn OutputSink,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeOptions {
    pub select: Option<String>,
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationSummary {
    pub pages: usize,
    /// Items received across all pages, after capping.
    pub items: usize,
    /// Values written to the output sink.
    pub emitted: usize,
    /// Continuation token left over when iteration stopped early.
    pub next_token: Option<String>,
}

pub async fn invoke<O: Operation>(
    host: &mut Host<'_>,
    client: &O::Client,
    request: O::Request,
    options: &InvokeOptions,
) -> Result<InvocationSummary> {
    let selection = Selection::<O::Field, O::Param>::resolve(
        options.select.as_deref(),
        O::default_selection(),
    )?;
    confirm::<O>(host, &request, options.force)?;

    debug!(cmdlet = O::CMDLET, action = O::ACTION, select = %selection, "invoking");
    let response = call::<O>(host, client, &request).await?;

    let value = selection.project(&response, &request)?;
    let emitted = emit(host.sink, value)?;
    Ok(InvocationSummary {
        pages: 1,
        items: 0,
        emitted,
        next_token: None,
    })
}

pub async fn invoke_paged<O: Paginated>(
    host: &mut Host<'_>,
    client: &O::Client,
    mut request: O::Request,
    options: &InvokeOptions,
    paging: &PageOptions,
) -> Result<InvocationSummary> {
    let selection = Selection::<O::Field, O::Param>::resolve(
        options.select.as_deref(),
        O::default_selection(),
    )?;
    confirm::<O>(host, &request, options.force)?;

    // paging rewrites the token and page size, so echo the caller's values
    let echoed = match &selection {
        Selection::Param(param) => Some(param.project(&request)),
        _ => None,
    };

    let mut summary = InvocationSummary::default();
    let mut remaining = paging.max_items;

    loop {
        if let Some(size) = page_size_hint(remaining, O::MAX_PAGE_SIZE) {
            O::set_page_size(&mut request, size);
        }

        debug!(
            cmdlet = O::CMDLET,
            action = O::ACTION,
            page = summary.pages + 1,
            "fetching page"
        );
        let mut response = match call::<O>(host, client, &request).await {
            Ok(response) => response,
            Err(err) if summary.pages > 0 && paging.max_items.is_some() && !err.is_cancelled() => {
                warn!(
                    cmdlet = O::CMDLET,
                    pages = summary.pages,
                    error = %err,
                    "page fetch failed, keeping results already written"
                );
                break;
            }
            Err(err) => return Err(err),
        };
        summary.pages += 1;

        let items = O::items_mut(&mut response);
        if let Some(left) = remaining {
            items.truncate(left);
            remaining = Some(left - items.len());
        }
        summary.items += items.len();

        if !selection.is_param() {
            let value = selection.project(&response, &request)?;
            summary.emitted += emit(host.sink, value)?;
        }

        let next = continuation(O::next_token(&response));
        summary.next_token = next.clone();
        O::set_next_token(&mut request, next);

        if summary.next_token.is_none() || !paging.auto_iterate || remaining == Some(0) {
            break;
        }
    }

    if let Some(value) = echoed {
        summary.emitted += emit(host.sink, value)?;
    }

    debug!(
        cmdlet = O::CMDLET,
        pages = summary.pages,
        items = summary.items,
        "pagination finished"
    );
    Ok(summary)
}

fn confirm<O: Operation>(host: &Host<'_>, request: &O::Request, force: bool) -> Result<()> {
    if !O::MUTATING || force {
        return Ok(());
    }
    let operation = format!("{} ({})", O::CMDLET, O::ACTION);
    if host.confirm.confirm(&operation, &O::target(request))? {
        Ok(())
    } else if host.cancel.is_cancelled() {
        Err(CmdletError::Cancelled {
            operation: O::CMDLET,
        })
    } else {
        Err(CmdletError::ConfirmationDeclined {
            operation: O::CMDLET,
        })
    }
}

async fn call<O: Operation>(
    host: &Host<'_>,
    client: &O::Client,
    request: &O::Request,
) -> Result<O::Response> {
    let cancel = host.cancel.clone();
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(cmdlet = O::CMDLET, "cancelled");
            Err(CmdletError::Cancelled { operation: O::CMDLET })
        }
        result = O::call(client, request, &cancel) => {
            result.map_err(|err| classify::<O>(host.context, err))
        }
    }
}

fn classify<O: Operation>(context: &ClientContext, err: ServiceError) -> CmdletError {
    if err.is_name_resolution_failure() {
        CmdletError::NameResolution {
            operation: O::CMDLET,
            service: O::SERVICE.name(),
            endpoint: context.endpoint_for(O::SERVICE),
            region: context.region_label(),
            source: err,
        }
    } else {
        CmdletError::Service {
            operation: O::CMDLET,
            source: err,
        }
    }
}

/// Row of the operation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperationInfo {
    pub cmdlet: &'static str,
    pub service: &'static str,
    pub action: &'static str,
    pub default_select: String,
    pub paginated: bool,
    pub mutating: bool,
}

impl OperationInfo {
    pub fn of<O: Operation>() -> Self {
        Self {
            cmdlet: O::CMDLET,
            service: O::SERVICE.name(),
            action: O::ACTION,
            default_select: O::default_selection().to_string(),
            paginated: false,
            mutating: O::MUTATING,
        }
    }

    pub fn paged<O: Paginated>() -> Self {
        Self {
            paginated: true,
            ..Self::of::<O>()
        }
    }
}

/// Declares an [`Operation`] that forwards to one client trait method.
macro_rules! operation {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            cmdlet: $cmdlet:literal,
            action: $action:literal,
            service: $service:expr,
            client: $client:ty,
            mutating: $mutating:literal,
            request: $request:ty,
            response: $response:ty,
            fields: $fields:ty,
            params: $params:ty,
            default: $default:expr,
            target: $target:expr,
            call: $method:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        #[::async_trait::async_trait]
        impl $crate::invoke::Operation for $name {
            const CMDLET: &'static str = $cmdlet;
            const ACTION: &'static str = $action;
            const SERVICE: $crate::services::Service = $service;
            const MUTATING: bool = $mutating;

            type Client = $client;
            type Request = $request;
            type Response = $response;
            type Field = $fields;
            type Param = $params;

            fn default_selection() -> $crate::select::Selection<$fields, $params> {
                $default
            }

            fn target(request: &$request) -> String {
                let describe: fn(&$request) -> String = $target;
                describe(request)
            }

            async fn call(
                client: &$client,
                request: &$request,
                cancel: &::tokio_util::sync::CancellationToken,
            ) -> ::std::result::Result<$response, $crate::error::ServiceError> {
                client.$method(request, cancel).await
            }
        }
    };
}

/// Implements [`Paginated`] for an operation whose request has `next_token`
/// and a page size field and whose response has `next_token` and an item list.
macro_rules! paginated {
    ($op:ty {
        item: $item:ty,
        items: $items:ident,
        page_size: $size:ident,
        max_page_size: $max:expr $(,)?
    }) => {
        impl $crate::paginate::Paginated for $op {
            type Item = $item;

            const MAX_PAGE_SIZE: usize = $max;

            fn set_next_token(request: &mut Self::Request, token: Option<String>) {
                request.next_token = token;
            }

            fn set_page_size(request: &mut Self::Request, size: usize) {
                request.$size = Some(i32::try_from(size).unwrap_or(i32::MAX));
            }

            fn next_token(response: &Self::Response) -> Option<&str> {
                response.next_token.as_deref()
            }

            fn items_mut(response: &mut Self::Response) -> &mut Vec<$item> {
                &mut response.$items
            }
        }
    };
}

pub(crate) use operation;
pub(crate) use paginated;
