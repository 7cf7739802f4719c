use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use ebvod::cli::{Args, Command};
use ebvod::config::Config;
use ebvod::confirm::TerminalPrompt;
use ebvod::error::Result;
use ebvod::invoke::{Host, InvocationSummary};
use ebvod::select::to_value;
use ebvod::services::{self, elasticbeanstalk, mediapackagevod, Clients};
use ebvod::ui::{display_error, display_hint, emit, ConsoleOutput};

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args.global) {
        Ok(config) => config,
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    };

    init_tracing(config.verbose);

    match run(args.command, &config).await {
        Ok(summary) => {
            if let Some(token) = summary.next_token {
                display_hint(&format!(
                    "More results are available. Continue with --next-token {}",
                    token
                ));
            }
        }
        Err(e) => {
            display_error(&e.to_string());
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Command, config: &Config) -> Result<InvocationSummary> {
    let mut output = ConsoleOutput::stdout(config.output);

    if let Command::Operations = command {
        let emitted = emit(&mut output, to_value(&services::catalog()))?;
        return Ok(InvocationSummary {
            emitted,
            ..Default::default()
        });
    }

    let sdk_config = config.context.load_sdk_config().await;
    let context = config.context.clone().with_resolved_region(&sdk_config);
    debug!(
        region = %context.region_label(),
        profile = context.profile.as_deref().unwrap_or("default"),
        endpoint_url = context.endpoint_url.as_deref().unwrap_or("(service default)"),
        "resolved client context"
    );
    let clients = Clients::from_sdk_config(&sdk_config);

    // Ctrl-C cancels the in-flight call instead of killing the process mid-write
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let prompt = TerminalPrompt {
        cancel: cancel.clone(),
    };
    let mut host = Host {
        context: &context,
        confirm: &prompt,
        sink: &mut output,
        cancel,
    };

    match command {
        Command::ElasticBeanstalk(command) => {
            elasticbeanstalk::commands::run(command, &mut host, clients.elastic_beanstalk.as_ref())
                .await
        }
        Command::MediaPackageVod(command) => {
            mediapackagevod::commands::run(command, &mut host, clients.media_package_vod.as_ref())
                .await
        }
        Command::Operations => Ok(InvocationSummary::default()),
    }
}
