mod defaults;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;
use crate::context::ClientContext;
use crate::error::CmdletError;
use crate::ui::OutputFormat;

pub use defaults::{default_output_format, default_verbose, is_truthy};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AwsConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Contents of `.ebvod.yaml` (or `.yml`, `.json`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub aws: AwsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for one run after flags, environment and config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub context: ClientContext,
    pub output: OutputFormat,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &GlobalArgs) -> Result<Self, CmdletError> {
        let file = FileConfig::load()?;
        Self::resolve(args, &file, |name| env::var(name).ok())
    }

    /// Merges the layers: CLI flag > environment > config file > default.
    pub fn resolve<F>(args: &GlobalArgs, file: &FileConfig, env_var: F) -> Result<Self, CmdletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| env_var(name).filter(|value| !value.trim().is_empty());

        let region = args
            .region
            .clone()
            .or_else(|| non_empty("AWS_REGION"))
            .or_else(|| non_empty("AWS_DEFAULT_REGION"))
            .or(file.aws.region.clone());

        let profile = args
            .profile
            .clone()
            .or_else(|| non_empty("AWS_PROFILE"))
            .or(file.aws.profile.clone());

        let endpoint_url = args
            .endpoint_url
            .clone()
            .or_else(|| non_empty("AWS_ENDPOINT_URL"))
            .or(file.aws.endpoint_url.clone());

        let env_output = match non_empty("EBVOD_OUTPUT") {
            Some(value) => Some(OutputFormat::from_str(value.trim(), true).map_err(|_| {
                CmdletError::Config(format!(
                    "EBVOD_OUTPUT must be one of json, yaml or text (got '{}')",
                    value
                ))
            })?),
            None => None,
        };
        let output = args
            .output
            .or(env_output)
            .or(file.output.format)
            .unwrap_or_else(default_output_format);

        // --verbose can only turn logging up
        let verbose = args.verbose
            || non_empty("EBVOD_VERBOSE")
                .map(|value| is_truthy(&value))
                .or(file.output.verbose)
                .unwrap_or_else(default_verbose);

        Ok(Config {
            context: ClientContext {
                region,
                profile,
                endpoint_url,
            },
            output,
            verbose,
        })
    }
}

impl FileConfig {
    /// Loads the first config file found. A missing file is not an error, an
    /// unreadable or malformed one is.
    pub fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config file: {}", path.display()))?
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config file: {}", path.display()))?
        };
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Working directory first, so a project can override the user config
        for ext in ["yaml", "yml", "json"] {
            paths.push(PathBuf::from(format!("{}.{}", defaults::LOCAL_CONFIG_STEM, ext)));
        }

        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join(defaults::CONFIG_DIR_NAME);
            for ext in ["yaml", "yml", "json"] {
                paths.push(config_dir.join(format!("{}.{}", defaults::CONFIG_DIR_NAME, ext)));
            }
        }

        paths
    }
}
