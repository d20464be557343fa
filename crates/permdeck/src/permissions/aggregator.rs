//! Requests the full permission set from the host and merges the results.

use crate::error::AggregationError;
use crate::host::{self, SharedHost};
use crate::permissions::types::{LocationSample, PermissionKind, PermissionRecord, PermissionStatus};

/// Result of one aggregation cycle: the merged record plus the location
/// fix taken while location permission was granted.
#[derive(Debug, Clone)]
pub struct AggregatedPermissions {
    pub record: PermissionRecord,
    pub location: Option<LocationSample>,
}

/// Requests each tracked permission from the host and produces a fresh
/// record. Does not persist; the session layer owns write-through.
pub struct PermissionAggregator {
    host: SharedHost,
}

impl PermissionAggregator {
    pub fn new(host: SharedHost) -> Self {
        Self { host }
    }

    /// Request all five permissions sequentially, then attempt one
    /// location fix iff location ended up granted.
    ///
    /// Fails with [`AggregationError`] if any request itself errors; the
    /// partially built record is dropped, never exposed. A failed
    /// location fix after a grant is non-fatal.
    pub async fn request_all(&self) -> Result<AggregatedPermissions, AggregationError> {
        let mut record = PermissionRecord::default();
        for kind in PermissionKind::ALL {
            let raw = host::request(self.host.as_ref(), kind)
                .await
                .map_err(|error| AggregationError::new(kind, error))?;
            record.set_status(kind, PermissionStatus::from_platform(&raw));
        }

        let location = if record.location.is_granted() {
            match self.host.current_location().await {
                Ok(sample) => Some(sample),
                Err(error) => {
                    tracing::warn!("location fix unavailable after grant: {error}");
                    None
                }
            }
        } else {
            None
        };

        Ok(AggregatedPermissions { record, location })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::error::HostError;
    use crate::host::Host;

    #[derive(Default)]
    struct FakeHost {
        statuses: HashMap<PermissionKind, String>,
        fail: Option<PermissionKind>,
        location: Option<LocationSample>,
    }

    impl FakeHost {
        fn with_status(mut self, kind: PermissionKind, status: &str) -> Self {
            self.statuses.insert(kind, status.to_string());
            self
        }

        fn failing(mut self, kind: PermissionKind) -> Self {
            self.fail = Some(kind);
            self
        }

        fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
            self.location = Some(LocationSample {
                latitude,
                longitude,
            });
            self
        }

        fn respond(&self, kind: PermissionKind) -> Result<String, HostError> {
            if self.fail == Some(kind) {
                return Err(HostError(format!("{kind} request blew up")));
            }
            Ok(self
                .statuses
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| "undetermined".to_string()))
        }
    }

    #[async_trait]
    impl Host for FakeHost {
        async fn request_camera(&self) -> Result<String, HostError> {
            self.respond(PermissionKind::Camera)
        }

        async fn request_location(&self) -> Result<String, HostError> {
            self.respond(PermissionKind::Location)
        }

        async fn request_microphone(&self) -> Result<String, HostError> {
            self.respond(PermissionKind::Microphone)
        }

        async fn request_media(&self) -> Result<String, HostError> {
            self.respond(PermissionKind::Media)
        }

        async fn request_notifications(&self) -> Result<String, HostError> {
            self.respond(PermissionKind::Notifications)
        }

        async fn current_location(&self) -> Result<LocationSample, HostError> {
            self.location
                .ok_or_else(|| HostError("no fix available".to_string()))
        }
    }

    fn aggregator(host: FakeHost) -> PermissionAggregator {
        PermissionAggregator::new(Arc::new(host))
    }

    #[tokio::test]
    async fn merges_grants_and_denials_into_one_record() {
        let host = FakeHost::default()
            .with_status(PermissionKind::Camera, "granted")
            .with_status(PermissionKind::Location, "denied")
            .with_status(PermissionKind::Microphone, "denied")
            .with_status(PermissionKind::Media, "granted")
            .with_status(PermissionKind::Notifications, "granted");

        let aggregated = aggregator(host).request_all().await.expect("request_all");
        assert_eq!(aggregated.record.camera, PermissionStatus::Granted);
        assert_eq!(aggregated.record.location, PermissionStatus::Denied);
        assert_eq!(aggregated.record.microphone, PermissionStatus::Denied);
        assert_eq!(aggregated.record.media, PermissionStatus::Granted);
        assert_eq!(aggregated.record.notifications, PermissionStatus::Granted);
        assert!(aggregated.location.is_none());
        assert_eq!(
            aggregated.record.denied(),
            vec![PermissionKind::Location, PermissionKind::Microphone]
        );
    }

    #[tokio::test]
    async fn granted_location_attaches_a_fix() {
        let host = FakeHost::default()
            .with_status(PermissionKind::Location, "granted")
            .with_location(40.4168, -3.7038);

        let aggregated = aggregator(host).request_all().await.expect("request_all");
        assert_eq!(aggregated.record.location, PermissionStatus::Granted);
        let sample = aggregated.location.expect("sample");
        assert_eq!(sample.latitude, 40.4168);
        assert_eq!(sample.longitude, -3.7038);
    }

    #[tokio::test]
    async fn failed_fix_after_grant_is_non_fatal() {
        let host = FakeHost::default().with_status(PermissionKind::Location, "granted");

        let aggregated = aggregator(host).request_all().await.expect("request_all");
        assert_eq!(aggregated.record.location, PermissionStatus::Granted);
        assert!(aggregated.location.is_none());
    }

    #[tokio::test]
    async fn no_fix_attempted_without_a_grant() {
        // A fix is on offer, but location was denied: it must not be taken.
        let host = FakeHost::default()
            .with_status(PermissionKind::Location, "denied")
            .with_location(40.4168, -3.7038);

        let aggregated = aggregator(host).request_all().await.expect("request_all");
        assert!(aggregated.location.is_none());
    }

    #[tokio::test]
    async fn platform_specific_statuses_normalize_to_undetermined() {
        let host = FakeHost::default()
            .with_status(PermissionKind::Camera, "restricted")
            .with_status(PermissionKind::Location, "limited")
            .with_status(PermissionKind::Microphone, "prompt")
            .with_status(PermissionKind::Media, "granted");

        let aggregated = aggregator(host).request_all().await.expect("request_all");
        assert_eq!(aggregated.record.camera, PermissionStatus::Undetermined);
        assert_eq!(aggregated.record.location, PermissionStatus::Undetermined);
        assert_eq!(aggregated.record.microphone, PermissionStatus::Undetermined);
        assert_eq!(aggregated.record.media, PermissionStatus::Granted);
    }

    #[tokio::test]
    async fn request_failure_fails_the_whole_cycle() {
        let host = FakeHost::default()
            .with_status(PermissionKind::Camera, "granted")
            .failing(PermissionKind::Microphone);

        let error = aggregator(host)
            .request_all()
            .await
            .expect_err("should fail");
        assert_eq!(error.permission, PermissionKind::Microphone);
        assert!(error.message.contains("blew up"));
    }
}
