//! Conversions shared by the AWS SDK backed clients.

use aws_sdk_elasticbeanstalk::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_elasticbeanstalk::primitives::DateTime;
use chrono::Utc;

use crate::error::ServiceError;

/// Splits SDK failures into service-reported errors and dispatch failures.
/// Dispatch failures keep the full source chain so callers can inspect it.
pub(crate) fn service_error<E, R>(err: SdkError<E, R>) -> ServiceError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if let SdkError::ServiceError(context) = &err {
        let inner = context.err();
        let code = inner.code().unwrap_or("UnknownError").to_string();
        let message = inner
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
        return ServiceError::service(code, message);
    }
    ServiceError::dispatch(err)
}

pub(crate) fn timestamp(value: Option<&DateTime>) -> Option<chrono::DateTime<Utc>> {
    value.and_then(|dt| chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()))
}

pub(crate) fn sdk_timestamp(value: &chrono::DateTime<Utc>) -> DateTime {
    DateTime::from_secs(value.timestamp())
}

pub(crate) fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Empty lists become `None` so they serialize the same way the service omits them.
pub(crate) fn owned_list(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_roundtrip_to_seconds() {
        let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let sdk = sdk_timestamp(&now);
        assert_eq!(timestamp(Some(&sdk)), Some(now));
        assert_eq!(timestamp(None), None);
    }

    #[test]
    fn test_owned_list_empty_is_none() {
        assert_eq!(owned_list(&[]), None);
        assert_eq!(owned_list(&["a".to_string()]), Some(vec!["a".to_string()]));
    }
}
