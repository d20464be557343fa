pub mod portable;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HostError;
use crate::permissions::{LocationSample, PermissionKind};

/// Capability set the host platform provides: one request method per
/// tracked permission plus the location provider.
///
/// Adapters wrap the real device SDK; tests inject fakes. Each request
/// method returns the host's raw status string ("granted", "denied", or
/// a platform-specific value); normalization happens in the aggregator.
#[async_trait]
pub trait Host: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    async fn request_camera(&self) -> Result<String, HostError>;
    async fn request_location(&self) -> Result<String, HostError>;
    async fn request_microphone(&self) -> Result<String, HostError>;
    async fn request_media(&self) -> Result<String, HostError>;
    async fn request_notifications(&self) -> Result<String, HostError>;

    /// One best-effort GPS fix. Only called once location permission is
    /// confirmed granted.
    async fn current_location(&self) -> Result<LocationSample, HostError>;
}

pub type SharedHost = Arc<dyn Host>;

/// Dispatch a permission request by kind so call sites can stay
/// order-driven.
pub(crate) async fn request(host: &dyn Host, kind: PermissionKind) -> Result<String, HostError> {
    match kind {
        PermissionKind::Camera => host.request_camera().await,
        PermissionKind::Location => host.request_location().await,
        PermissionKind::Microphone => host.request_microphone().await,
        PermissionKind::Media => host.request_media().await,
        PermissionKind::Notifications => host.request_notifications().await,
    }
}

pub fn default_host() -> SharedHost {
    Arc::new(portable::PortableHost::new())
}
