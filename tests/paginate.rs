mod common;

use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use common::{asset, environment_pages, MockElasticBeanstalk, MockMediaPackageVod};
use ebvod::confirm::FixedAnswer;
use ebvod::error::CmdletError;
use ebvod::invoke::{invoke_paged, Host, InvokeOptions};
use ebvod::paginate::PageOptions;
use ebvod::services::elasticbeanstalk::models::DescribeEnvironmentsRequest;
use ebvod::services::elasticbeanstalk::operations::GetEBEnvironment;
use ebvod::services::mediapackagevod::models::ListAssetsRequest;
use ebvod::services::mediapackagevod::operations::GetEMPVAssetList;
use ebvod::services::ElasticBeanstalkApi;

fn names(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|v| v["EnvironmentName"].as_str().unwrap_or_default().to_string())
        .collect()
}

fn capped(max_items: usize) -> PageOptions {
    PageOptions::new(Some(max_items), false).unwrap()
}

#[tokio::test]
async fn test_auto_iteration_concatenates_all_pages_in_order() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &PageOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        names(&sink),
        vec!["env-0-0", "env-0-1", "env-1-0", "env-1-1", "env-2-0", "env-2-1"]
    );
    assert_eq!(summary.pages, 3);
    assert_eq!(summary.items, 6);
    assert_eq!(summary.next_token, None);
    assert_eq!(client.calls(), 3);
    // no cap, no page size sent
    assert_eq!(client.page_sizes(), vec![None, None, None]);
}

#[tokio::test]
async fn test_cap_limits_items_across_pages() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(4, 3));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &capped(4),
    )
    .await
    .unwrap();

    assert_eq!(names(&sink), vec!["env-0-0", "env-0-1", "env-0-2", "env-1-0"]);
    assert_eq!(summary.items, 4);
    assert_eq!(client.calls(), 2);
    assert_eq!(client.page_sizes(), vec![Some(4), Some(1)]);
    // stopped early, so a token to resume from is reported
    assert_eq!(summary.next_token.as_deref(), Some("page-2"));
}

#[tokio::test]
async fn test_cap_larger_than_total_returns_everything() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(2, 2));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &capped(50),
    )
    .await
    .unwrap();

    assert_eq!(sink.len(), 4);
    assert_eq!(summary.next_token, None);
}

#[tokio::test]
async fn test_manual_paging_fetches_exactly_one_page() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &PageOptions::new(None, true).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(client.calls(), 1);
    assert_eq!(names(&sink), vec!["env-0-0", "env-0-1"]);
    assert_eq!(summary.next_token.as_deref(), Some("page-1"));
}

#[tokio::test]
async fn test_manual_paging_resumes_from_token() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 1));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let request = DescribeEnvironmentsRequest {
        next_token: Some("page-2".to_string()),
        ..Default::default()
    };
    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        request,
        &InvokeOptions::default(),
        &PageOptions::new(None, true).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(names(&sink), vec!["env-2-0"]);
    assert_eq!(summary.next_token, None);
}

#[tokio::test]
async fn test_failure_on_later_page_keeps_capped_results() {
    let mut client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    client.fail_on_page = Some(1);
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &capped(5),
    )
    .await
    .unwrap();

    assert_eq!(summary.pages, 1);
    assert_eq!(names(&sink), vec!["env-0-0", "env-0-1"]);
}

#[tokio::test]
async fn test_failure_on_later_page_without_cap_is_an_error() {
    let mut client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    client.fail_on_page = Some(1);
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let result = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &PageOptions::default(),
    )
    .await;

    assert!(matches!(result, Err(CmdletError::Service { .. })));
    // the first page was already written
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn test_param_selection_emitted_once_for_paged_operation() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let request = DescribeEnvironmentsRequest {
        application_name: Some("shop".to_string()),
        ..Default::default()
    };
    let options = InvokeOptions {
        select: Some("^ApplicationName".to_string()),
        force: false,
    };
    invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        request,
        &options,
        &PageOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(sink, vec![json!("shop")]);
    assert_eq!(client.calls(), 3);
}

#[tokio::test]
async fn test_param_selection_echoes_caller_token_and_page_size() {
    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let request = DescribeEnvironmentsRequest {
        next_token: Some("page-1".to_string()),
        ..Default::default()
    };
    let options = InvokeOptions {
        select: Some("^NextToken".to_string()),
        force: false,
    };
    invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        request,
        &options,
        &PageOptions::default(),
    )
    .await
    .unwrap();

    // iteration ran to the end, the caller's token is still echoed
    assert_eq!(client.calls(), 2);
    assert_eq!(sink, vec![json!("page-1")]);

    let client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };
    let options = InvokeOptions {
        select: Some("^MaxRecord".to_string()),
        force: false,
    };
    invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &options,
        &capped(3),
    )
    .await
    .unwrap();

    // page sizes were derived from the cap, but the caller supplied none
    assert_eq!(client.page_sizes(), vec![Some(3), Some(1)]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_failure_on_first_page_is_an_error_even_with_cap() {
    let mut client = MockElasticBeanstalk::with_pages(environment_pages(3, 2));
    client.fail_on_page = Some(0);
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let result = invoke_paged::<GetEBEnvironment>(
        &mut host,
        &client as &dyn ElasticBeanstalkApi,
        DescribeEnvironmentsRequest::default(),
        &InvokeOptions::default(),
        &capped(5),
    )
    .await;

    assert!(matches!(result, Err(CmdletError::Service { .. })));
    assert_eq!(client.calls(), 1);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_zero_cap_is_rejected() {
    assert!(matches!(
        PageOptions::new(Some(0), false),
        Err(CmdletError::InvalidArgument {
            parameter: "MaxItems",
            ..
        })
    ));
}

#[tokio::test]
async fn test_vod_asset_list_follows_tokens() {
    let client = MockMediaPackageVod::with_asset_pages(vec![
        vec![asset("a1"), asset("a2")],
        vec![asset("a3")],
    ]);
    let ctx = common::context();
    let mut sink: Vec<Value> = Vec::new();
    let mut host = Host {
        context: &ctx,
        confirm: &FixedAnswer(true),
        sink: &mut sink,
        cancel: CancellationToken::new(),
    };

    let summary = invoke_paged::<GetEMPVAssetList>(
        &mut host,
        &client,
        ListAssetsRequest::default(),
        &InvokeOptions::default(),
        &capped(2),
    )
    .await
    .unwrap();

    let ids: Vec<&str> = sink.iter().filter_map(|v| v["Id"].as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(summary.next_token.as_deref(), Some("page-1"));
    let requests = client.asset_requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].max_results, Some(2));
}
