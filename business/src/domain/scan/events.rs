use uuid::Uuid;

use super::errors::CameraAcquisitionError;
use crate::domain::cart::errors::CartSubmissionError;
use crate::domain::cart::model::CartLineRequest;
use crate::domain::product::errors::ResolveError;
use crate::domain::product::model::ResolvedScan;

/// Input of the scan session controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Raw text produced by the decoder.
    Decoded(String),
    Confirm,
    Cancel,
    Close,
    /// The decoder stopped producing payloads (end of stream or read failure).
    SourceLost,
}

/// Output of the scan session controller, one per observable transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionNotice {
    Started { session_id: Uuid },
    CameraFailed(CameraAcquisitionError),
    Paused { payload: String },
    Resolved(ResolvedScan),
    ResolveFailed(ResolveError),
    Added(CartLineRequest),
    SubmitFailed {
        error: CartSubmissionError,
        attempts: u32,
    },
    Discarded,
    /// Sent before `Closed` when the session ends because the decoder stopped.
    ScannerLost,
    Closed,
}
