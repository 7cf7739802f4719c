use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::error::{CmdletError, Result};
use crate::invoke::InvokeOptions;
use crate::paginate::PageOptions;
use crate::services::elasticbeanstalk::commands::EbCommand;
use crate::services::mediapackagevod::commands::VodCommand;
use crate::ui::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "ebvod")]
#[command(
    about = "AWS Elastic Beanstalk and MediaPackage VOD operations as verb-noun commands",
    long_about = None
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    #[arg(long, global = true, help = "AWS region to send requests to")]
    pub region: Option<String>,

    #[arg(long, global = true, help = "Named profile from the shared AWS config files")]
    pub profile: Option<String>,

    #[arg(
        long = "endpoint-url",
        global = true,
        help = "Override the service endpoint (e.g., http://localhost:4566)"
    )]
    pub endpoint_url: Option<String>,

    #[arg(long, global = true, value_enum, help = "Output format")]
    pub output: Option<OutputFormat>,

    #[arg(short = 'v', long, global = true, help = "Log request details to stderr")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(flatten)]
    ElasticBeanstalk(EbCommand),

    #[command(flatten)]
    MediaPackageVod(VodCommand),

    #[command(about = "List the supported operations")]
    Operations,
}

/// `--select` for read-only commands.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SelectArgs {
    #[arg(
        long,
        help = "What to output: '*' for the whole response, a response field name, or ^ParameterName"
    )]
    pub select: Option<String>,
}

impl SelectArgs {
    pub fn options(&self) -> InvokeOptions {
        InvokeOptions {
            select: self.select.clone(),
            force: false,
        }
    }
}

/// `--select` and `--force` for commands that change remote state.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct MutatingArgs {
    #[arg(
        long,
        help = "What to output: '*' for the whole response, a response field name, or ^ParameterName"
    )]
    pub select: Option<String>,

    #[arg(long, help = "Skip the confirmation prompt")]
    pub force: bool,
}

impl MutatingArgs {
    pub fn options(&self) -> InvokeOptions {
        InvokeOptions {
            select: self.select.clone(),
            force: self.force,
        }
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PagingArgs {
    #[arg(long = "max-items", help = "Maximum number of items to return across all pages")]
    pub max_items: Option<usize>,

    #[arg(long = "next-token", help = "Continuation token to start from")]
    pub next_token: Option<String>,

    #[arg(
        long = "no-auto-iteration",
        help = "Fetch a single page instead of following continuation tokens"
    )]
    pub no_auto_iteration: bool,
}

impl PagingArgs {
    pub fn options(&self) -> Result<PageOptions> {
        PageOptions::new(self.max_items, self.no_auto_iteration)
    }
}

/// Parses `Key=Value`.
pub fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected Key=Value, got '{}'", s)),
    }
}

/// Returns `value` or a missing parameter error naming it.
pub fn required<T>(value: Option<T>, parameter: &'static str) -> Result<T> {
    value.ok_or(CmdletError::MissingParameter(parameter))
}
