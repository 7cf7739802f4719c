use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::services::Service;

/// Connection settings threaded explicitly into every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientContext {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

impl ClientContext {
    /// Builds the SDK configuration for this context. The returned region is the
    /// one the SDK resolved, which may come from the profile when no region was given.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let region_provider =
            RegionProviderChain::first_try(self.region.clone().map(Region::new)).or_default_provider();

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        loader.load().await
    }

    /// Copies the region the SDK resolved back into the context.
    pub fn with_resolved_region(mut self, config: &SdkConfig) -> Self {
        if self.region.is_none() {
            self.region = config.region().map(|r| r.to_string());
        }
        self
    }

    pub fn region_label(&self) -> String {
        self.region
            .clone()
            .unwrap_or_else(|| "(not set)".to_string())
    }

    /// The endpoint a request for `service` is sent to.
    pub fn endpoint_for(&self, service: Service) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(endpoint), _) => endpoint.clone(),
            (None, Some(region)) => {
                format!("https://{}.{}.amazonaws.com", service.endpoint_prefix(), region)
            }
            (None, None) => format!("https://{}.<region>.amazonaws.com", service.endpoint_prefix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_prefers_override() {
        let ctx = ClientContext {
            region: Some("eu-west-1".into()),
            profile: None,
            endpoint_url: Some("http://localhost:4566".into()),
        };
        assert_eq!(ctx.endpoint_for(Service::ElasticBeanstalk), "http://localhost:4566");
    }

    #[test]
    fn test_endpoint_from_region() {
        let ctx = ClientContext {
            region: Some("us-west-2".into()),
            ..Default::default()
        };
        assert_eq!(
            ctx.endpoint_for(Service::MediaPackageVod),
            "https://mediapackage-vod.us-west-2.amazonaws.com"
        );
        assert_eq!(
            ctx.endpoint_for(Service::ElasticBeanstalk),
            "https://elasticbeanstalk.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_region_label_when_unset() {
        assert_eq!(ClientContext::default().region_label(), "(not set)");
    }
}
