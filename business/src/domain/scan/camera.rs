use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::{CameraAcquisitionError, CameraReleaseError};
use super::events::SessionEvent;

/// Exclusive handle on an acquired scanning device.
///
/// Decoded payloads are pushed into the session's event channel by the
/// adapter. While paused, payloads are discarded at the source.
pub trait CameraHandle: Send + Sync {
    fn pause(&self);
    fn resume(&self);
    /// Releases the device. Must be idempotent and must not block.
    fn release(&mut self) -> Result<(), CameraReleaseError>;
}

/// Service port for acquiring the scanning device.
#[async_trait]
pub trait CameraService: Send + Sync {
    async fn acquire(
        &self,
        sink: mpsc::Sender<SessionEvent>,
    ) -> Result<Box<dyn CameraHandle>, CameraAcquisitionError>;
}
