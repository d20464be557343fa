use std::fmt;

use serde::{Deserialize, Serialize};

/// The five device permissions the screen tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Camera,
    Location,
    Microphone,
    Media,
    Notifications,
}

impl PermissionKind {
    /// All kinds in declaration order. Aggregation and denial reporting
    /// follow this order so output is reproducible across runs.
    pub const ALL: [PermissionKind; 5] = [
        PermissionKind::Camera,
        PermissionKind::Location,
        PermissionKind::Microphone,
        PermissionKind::Media,
        PermissionKind::Notifications,
    ];

    /// Stable wire name, also used in user-facing summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKind::Camera => "camera",
            PermissionKind::Location => "location",
            PermissionKind::Microphone => "microphone",
            PermissionKind::Media => "media",
            PermissionKind::Notifications => "notifications",
        }
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single permission as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// Never requested, or reported by the host as something other than a
    /// plain grant or denial.
    #[default]
    Undetermined,
}

impl PermissionStatus {
    /// Normalize a raw host status string to the three-variant model.
    ///
    /// Some hosts report values like "restricted" or "limited"; anything
    /// that is not a plain grant or denial maps to
    /// [`PermissionStatus::Undetermined`].
    pub fn from_platform(raw: &str) -> Self {
        match raw {
            "granted" => PermissionStatus::Granted,
            "denied" => PermissionStatus::Denied,
            _ => PermissionStatus::Undetermined,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Last-known status of every tracked permission.
///
/// One field per [`PermissionKind`], so a record always carries all five
/// statuses. Unknown shapes are rejected on deserialization and degraded
/// to "no prior record" by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionRecord {
    pub camera: PermissionStatus,
    pub location: PermissionStatus,
    pub microphone: PermissionStatus,
    pub media: PermissionStatus,
    pub notifications: PermissionStatus,
}

impl PermissionRecord {
    pub fn status(&self, kind: PermissionKind) -> PermissionStatus {
        match kind {
            PermissionKind::Camera => self.camera,
            PermissionKind::Location => self.location,
            PermissionKind::Microphone => self.microphone,
            PermissionKind::Media => self.media,
            PermissionKind::Notifications => self.notifications,
        }
    }

    pub fn set_status(&mut self, kind: PermissionKind, status: PermissionStatus) {
        match kind {
            PermissionKind::Camera => self.camera = status,
            PermissionKind::Location => self.location = status,
            PermissionKind::Microphone => self.microphone = status,
            PermissionKind::Media => self.media = status,
            PermissionKind::Notifications => self.notifications = status,
        }
    }

    /// Kinds whose status is denied, in [`PermissionKind::ALL`] order.
    pub fn denied(&self) -> Vec<PermissionKind> {
        PermissionKind::ALL
            .into_iter()
            .filter(|kind| self.status(*kind) == PermissionStatus::Denied)
            .collect()
    }
}

/// A single GPS fix, taken when location permission is granted.
///
/// Session-only: never persisted, recomputed on each refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
}
