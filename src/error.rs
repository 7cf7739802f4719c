use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a service client implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service answered with an error response.
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    /// The request never produced a service response (connection, DNS, timeout, ...).
    #[error("{0}")]
    Dispatch(#[source] BoxError),
}

impl ServiceError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServiceError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn dispatch<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ServiceError::Dispatch(Box::new(err))
    }

    /// True when any error in the source chain reports a host name lookup failure.
    pub fn is_name_resolution_failure(&self) -> bool {
        match self {
            ServiceError::Service { .. } => false,
            ServiceError::Dispatch(source) => chain_mentions_name_resolution(source.as_ref()),
        }
    }
}

fn name_resolution_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)dns error|failed to lookup address|name or service not known|nodename nor servname|no such host is known|temporary failure in name resolution",
        )
        .expect("name resolution pattern is valid")
    })
}

fn chain_mentions_name_resolution(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if name_resolution_pattern().is_match(&e.to_string()) {
            return true;
        }
        current = e.source();
    }
    false
}

#[derive(Debug, Error)]
pub enum CmdletError {
    #[error("Invalid value '{value}' for parameter {parameter}: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        value: String,
        reason: String,
    },
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("{operation}: the operation was declined")]
    ConfirmationDeclined { operation: &'static str },
    #[error("{operation}: {source}")]
    Service {
        operation: &'static str,
        #[source]
        source: ServiceError,
    },
    #[error(
        "{operation}: name resolution failure trying to reach the {service} endpoint '{endpoint}' (region: {region}). \
         Check the --region and --endpoint-url values or the region configured for the active profile"
    )]
    NameResolution {
        operation: &'static str,
        service: &'static str,
        endpoint: String,
        region: String,
        #[source]
        source: ServiceError,
    },
    #[error("{operation}: the operation was cancelled")]
    Cancelled { operation: &'static str },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CmdletError {
    pub fn invalid_argument(
        parameter: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CmdletError::InvalidArgument {
            parameter,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, CmdletError::Cancelled { .. })
    }
}

impl From<anyhow::Error> for CmdletError {
    fn from(err: anyhow::Error) -> Self {
        CmdletError::Config(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, CmdletError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, Error)]
    #[error("dispatch failure")]
    struct Wrapper(#[source] io::Error);

    #[test]
    fn detects_dns_failure_deep_in_chain() {
        let inner = io::Error::new(
            io::ErrorKind::Other,
            "failed to lookup address information: Name or service not known",
        );
        let err = ServiceError::dispatch(Wrapper(inner));
        assert!(err.is_name_resolution_failure());
    }

    #[test]
    fn connection_refused_is_not_dns() {
        let inner = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = ServiceError::dispatch(Wrapper(inner));
        assert!(!err.is_name_resolution_failure());
    }

    #[test]
    fn service_errors_never_count_as_dns() {
        let err = ServiceError::service("InvalidParameterValue", "dns error in message text");
        assert!(!err.is_name_resolution_failure());
    }
}
