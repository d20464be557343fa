use async_trait::async_trait;

use super::Host;
use crate::error::HostError;
use crate::permissions::LocationSample;

/// Fallback adapter for hosts without a permission broker.
///
/// Requests report an undetermined status rather than failing, so
/// aggregation still completes; only the location provider is a hard
/// error here.
#[derive(Debug, Default)]
pub struct PortableHost;

impl PortableHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Host for PortableHost {
    fn id(&self) -> &str {
        "portable"
    }

    async fn request_camera(&self) -> Result<String, HostError> {
        Ok("undetermined".to_string())
    }

    async fn request_location(&self) -> Result<String, HostError> {
        Ok("undetermined".to_string())
    }

    async fn request_microphone(&self) -> Result<String, HostError> {
        Ok("undetermined".to_string())
    }

    async fn request_media(&self) -> Result<String, HostError> {
        Ok("undetermined".to_string())
    }

    async fn request_notifications(&self) -> Result<String, HostError> {
        Ok("undetermined".to_string())
    }

    async fn current_location(&self) -> Result<LocationSample, HostError> {
        Err(HostError(
            "location provider not available on this host".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::{PermissionKind, PermissionStatus};

    #[tokio::test]
    async fn all_requests_normalize_to_undetermined() {
        let host = PortableHost::new();
        for kind in PermissionKind::ALL {
            let raw = crate::host::request(&host, kind).await.expect("request");
            assert_eq!(
                PermissionStatus::from_platform(&raw),
                PermissionStatus::Undetermined
            );
        }
    }

    #[tokio::test]
    async fn location_fix_is_unavailable() {
        let host = PortableHost::new();
        assert!(host.current_location().await.is_err());
    }
}
