use uuid::Uuid;

use super::errors::ScanError;
use crate::domain::product::model::ResolvedScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Paused,
    Resolving,
    Confirming,
}

impl std::fmt::Display for ScanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanState::Idle => write!(f, "idle"),
            ScanState::Scanning => write!(f, "scanning"),
            ScanState::Paused => write!(f, "paused"),
            ScanState::Resolving => write!(f, "resolving"),
            ScanState::Confirming => write!(f, "confirming"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    Accepted,
    Dropped,
}

/// One camera-active scanning attempt, from acquisition to release.
///
/// Holds the only mutable scan state: the lifecycle state, the payload that
/// paused the session and the product awaiting confirmation.
#[derive(Debug, Clone)]
pub struct ScanSession {
    id: Uuid,
    state: ScanState,
    last_decoded_payload: Option<String>,
    resolved: Option<ResolvedScan>,
    submit_failures: u32,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: ScanState::Idle,
            last_decoded_payload: None,
            resolved: None,
            submit_failures: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn last_decoded_payload(&self) -> Option<&str> {
        self.last_decoded_payload.as_deref()
    }

    pub fn resolved(&self) -> Option<&ResolvedScan> {
        self.resolved.as_ref()
    }

    /// Failed submissions of the product currently awaiting confirmation.
    pub fn submit_failures(&self) -> u32 {
        self.submit_failures
    }

    /// Idle -> Scanning, once the camera has been acquired.
    pub fn begin_scanning(&mut self) -> Result<(), ScanError> {
        self.expect(ScanState::Idle, "begin_scanning")?;
        self.state = ScanState::Scanning;
        Ok(())
    }

    /// Camera acquisition failed; the session stays (or returns to) Idle.
    pub fn acquisition_failed(&mut self) {
        self.close();
    }

    /// Scanning -> Paused on the first decode; any other state drops the event.
    pub fn accept_decode(&mut self, payload: &str) -> DecodeOutcome {
        if self.state != ScanState::Scanning {
            return DecodeOutcome::Dropped;
        }
        self.last_decoded_payload = Some(payload.to_string());
        self.state = ScanState::Paused;
        DecodeOutcome::Accepted
    }

    /// Paused -> Resolving. Returns the payload to resolve.
    pub fn begin_resolving(&mut self) -> Result<String, ScanError> {
        self.expect(ScanState::Paused, "begin_resolving")?;
        let payload = self.last_decoded_payload.clone().unwrap_or_default();
        self.state = ScanState::Resolving;
        Ok(payload)
    }

    /// Resolving -> Confirming with the backend-verified product.
    pub fn resolution_succeeded(&mut self, scan: ResolvedScan) -> Result<(), ScanError> {
        self.expect(ScanState::Resolving, "resolution_succeeded")?;
        self.resolved = Some(scan);
        self.submit_failures = 0;
        self.state = ScanState::Confirming;
        Ok(())
    }

    /// Resolving -> Scanning after an unparseable payload or a failed lookup.
    pub fn resolution_failed(&mut self) -> Result<(), ScanError> {
        self.expect(ScanState::Resolving, "resolution_failed")?;
        self.state = ScanState::Scanning;
        Ok(())
    }

    /// Submission failed: stays in Confirming so the user can retry.
    pub fn submit_failed(&mut self) -> Result<u32, ScanError> {
        self.expect(ScanState::Confirming, "submit_failed")?;
        self.submit_failures += 1;
        Ok(self.submit_failures)
    }

    /// Confirming -> Scanning after a successful submission or a cancel.
    /// Returns the product that left the confirmation slot.
    pub fn finish_confirmation(&mut self) -> Result<Option<ResolvedScan>, ScanError> {
        self.expect(ScanState::Confirming, "finish_confirmation")?;
        self.submit_failures = 0;
        self.state = ScanState::Scanning;
        Ok(self.resolved.take())
    }

    /// Any state -> Idle. Clears the resolved slot.
    pub fn close(&mut self) {
        self.state = ScanState::Idle;
        self.resolved = None;
        self.submit_failures = 0;
    }

    fn expect(&self, expected: ScanState, action: &'static str) -> Result<(), ScanError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ScanError::InvalidTransition {
                from: self.state,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{ResolvedProduct, ResolvedScan};
    use crate::domain::scan::payload::parse_payload;
    use crate::domain::shared::value_objects::{ProductId, StoreId};

    fn resolved_scan() -> ResolvedScan {
        ResolvedScan {
            payload: parse_payload(r#"{"store_id":"S1","id":"P9"}"#).unwrap(),
            product: ResolvedProduct {
                product_id: Some(ProductId::new("P9")),
                store_id: Some(StoreId::new("S1")),
                name: "Milk Packet".to_string(),
                price: 45.0,
                size_or_weight: Some("500ml".to_string()),
                image_url: None,
                description: None,
            },
        }
    }

    fn confirming_session() -> ScanSession {
        let mut session = ScanSession::new();
        session.begin_scanning().unwrap();
        session.accept_decode("payload");
        session.begin_resolving().unwrap();
        session.resolution_succeeded(resolved_scan()).unwrap();
        session
    }

    #[test]
    fn should_start_idle() {
        let session = ScanSession::new();
        assert_eq!(session.state(), ScanState::Idle);
        assert!(session.resolved().is_none());
    }

    #[test]
    fn should_pause_on_first_decode_and_drop_the_next() {
        let mut session = ScanSession::new();
        session.begin_scanning().unwrap();

        assert_eq!(session.accept_decode("first"), DecodeOutcome::Accepted);
        assert_eq!(session.accept_decode("second"), DecodeOutcome::Dropped);
        assert_eq!(session.state(), ScanState::Paused);
        assert_eq!(session.last_decoded_payload(), Some("first"));
    }

    #[test]
    fn should_drop_decodes_while_resolving_or_confirming() {
        let mut session = ScanSession::new();
        session.begin_scanning().unwrap();
        session.accept_decode("first");
        session.begin_resolving().unwrap();
        assert_eq!(session.accept_decode("second"), DecodeOutcome::Dropped);

        let mut session = confirming_session();
        assert_eq!(session.accept_decode("third"), DecodeOutcome::Dropped);
        assert_eq!(session.state(), ScanState::Confirming);
    }

    #[test]
    fn should_drop_decodes_while_idle() {
        let mut session = ScanSession::new();
        assert_eq!(session.accept_decode("payload"), DecodeOutcome::Dropped);
        assert_eq!(session.state(), ScanState::Idle);
    }

    #[test]
    fn should_return_to_scanning_when_resolution_fails() {
        let mut session = ScanSession::new();
        session.begin_scanning().unwrap();
        session.accept_decode("garbage");
        assert_eq!(session.begin_resolving().unwrap(), "garbage");

        session.resolution_failed().unwrap();

        assert_eq!(session.state(), ScanState::Scanning);
        assert!(session.resolved().is_none());
    }

    #[test]
    fn should_stay_confirming_and_count_failed_submissions() {
        let mut session = confirming_session();

        assert_eq!(session.submit_failed().unwrap(), 1);
        assert_eq!(session.submit_failed().unwrap(), 2);
        assert_eq!(session.state(), ScanState::Confirming);
        assert!(session.resolved().is_some());
    }

    #[test]
    fn should_release_confirmation_slot_when_finished() {
        let mut session = confirming_session();
        session.submit_failed().unwrap();

        let finished = session.finish_confirmation().unwrap();

        assert_eq!(finished.unwrap().product.name, "Milk Packet");
        assert_eq!(session.state(), ScanState::Scanning);
        assert_eq!(session.submit_failures(), 0);
        assert!(session.resolved().is_none());
    }

    #[test]
    fn should_reject_out_of_order_transitions() {
        let mut session = ScanSession::new();

        let result = session.begin_resolving();

        assert_eq!(
            result,
            Err(ScanError::InvalidTransition {
                from: ScanState::Idle,
                action: "begin_resolving",
            })
        );
        assert!(session.submit_failed().is_err());
        assert!(session.finish_confirmation().is_err());
    }

    #[test]
    fn should_close_from_any_state() {
        let mut session = confirming_session();

        session.close();

        assert_eq!(session.state(), ScanState::Idle);
        assert!(session.resolved().is_none());
    }
}
