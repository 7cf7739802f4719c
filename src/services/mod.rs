pub mod elasticbeanstalk;
pub mod mediapackagevod;
mod sdk;

use aws_config::SdkConfig;
use serde::Serialize;

use crate::invoke::OperationInfo;
use crate::select::field_set;

pub use elasticbeanstalk::{ElasticBeanstalkApi, SdkElasticBeanstalk};
pub use mediapackagevod::{MediaPackageVodApi, SdkMediaPackageVod};

/// Response of an action that returns no data. Serializes to `null`, so
/// nothing is written for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyResponse;

field_set! {
    pub enum NoField for EmptyResponse {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    ElasticBeanstalk,
    MediaPackageVod,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::ElasticBeanstalk => "AWS Elastic Beanstalk",
            Service::MediaPackageVod => "AWS Elemental MediaPackage VOD",
        }
    }

    pub fn endpoint_prefix(self) -> &'static str {
        match self {
            Service::ElasticBeanstalk => "elasticbeanstalk",
            Service::MediaPackageVod => "mediapackage-vod",
        }
    }
}

/// Service clients used by the command dispatcher.
pub struct Clients {
    pub elastic_beanstalk: Box<dyn ElasticBeanstalkApi>,
    pub media_package_vod: Box<dyn MediaPackageVodApi>,
}

impl Clients {
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self {
            elastic_beanstalk: Box::new(SdkElasticBeanstalk::new(config)),
            media_package_vod: Box::new(SdkMediaPackageVod::new(config)),
        }
    }
}

/// Every supported cmdlet, Elastic Beanstalk first.
pub fn catalog() -> Vec<OperationInfo> {
    let mut operations = elasticbeanstalk::operations::catalog();
    operations.extend(mediapackagevod::operations::catalog());
    operations
}
