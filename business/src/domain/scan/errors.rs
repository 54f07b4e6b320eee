use super::model::ScanState;

/// Categorized failure to acquire the scanning device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraAcquisitionError {
    #[error("camera.permission_denied")]
    PermissionDenied,
    #[error("camera.not_found")]
    NotFound,
    #[error("camera.device_busy")]
    DeviceBusy,
    #[error("camera.insecure_context")]
    InsecureContext,
    #[error("camera.unavailable")]
    Unavailable(String),
}

impl CameraAcquisitionError {
    /// Stable category shown to the user instead of the raw device error.
    pub fn category(&self) -> &'static str {
        match self {
            CameraAcquisitionError::PermissionDenied => "permission-denied",
            CameraAcquisitionError::NotFound => "not-found",
            CameraAcquisitionError::DeviceBusy => "device-busy",
            CameraAcquisitionError::InsecureContext => "insecure-context",
            CameraAcquisitionError::Unavailable(_) => "unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraReleaseError {
    #[error("camera.release_failed")]
    ReleaseFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadParseError {
    #[error("payload.unparseable")]
    Unparseable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("scan.invalid_transition")]
    InvalidTransition {
        from: ScanState,
        action: &'static str,
    },
}
