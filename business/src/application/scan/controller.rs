use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::resolve::{ResolvePayloadParams, ResolvePayloadUseCase};
use crate::domain::scan::camera::{CameraHandle, CameraService};
use crate::domain::scan::events::{SessionEvent, SessionNotice};
use crate::domain::scan::model::{DecodeOutcome, ScanSession, ScanState};

/// Drives one scan session from camera acquisition to release.
///
/// Events (decodes from the camera, confirm/cancel/close from the user) are
/// consumed from a single channel, one at a time. At most one lookup or cart
/// submission is in flight; while it runs, decode events are discarded and a
/// close abandons the work.
pub struct ScanSessionController {
    pub camera: Arc<dyn CameraService>,
    pub resolver: Arc<dyn ResolvePayloadUseCase>,
    pub add_to_cart: Arc<dyn AddCartLineUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Close,
    SourceLost,
}

impl ScanSessionController {
    /// Runs the session until a `Close` event arrives or every event sender
    /// is dropped. Returns the session in its final (Idle) state.
    ///
    /// `events_tx` is handed to the camera so decodes enter the same channel
    /// as user events.
    pub async fn run(
        &self,
        events_tx: mpsc::Sender<SessionEvent>,
        mut events: mpsc::Receiver<SessionEvent>,
        notices: mpsc::Sender<SessionNotice>,
    ) -> ScanSession {
        let mut session = ScanSession::new();

        let mut camera = match self.camera.acquire(events_tx).await {
            Ok(camera) => camera,
            Err(err) => {
                self.logger.warn(&format!(
                    "Camera acquisition failed for session {}: {} ({})",
                    session.id(),
                    err,
                    err.category()
                ));
                session.acquisition_failed();
                self.notify(&notices, SessionNotice::CameraFailed(err)).await;
                return session;
            }
        };

        if let Err(err) = session.begin_scanning() {
            self.logger.error(&format!("Cannot start scanning: {}", err));
            self.teardown(&mut session, &mut *camera);
            self.notify(&notices, SessionNotice::Closed).await;
            return session;
        }

        self.logger
            .info(&format!("Scan session {} started", session.id()));
        self.notify(
            &notices,
            SessionNotice::Started {
                session_id: session.id(),
            },
        )
        .await;

        while let Some(event) = events.recv().await {
            let flow = match event {
                SessionEvent::Decoded(payload) => {
                    self.on_decoded(&mut session, &*camera, &mut events, &notices, payload)
                        .await
                }
                SessionEvent::Confirm => {
                    self.on_confirm(&mut session, &*camera, &mut events, &notices)
                        .await
                }
                SessionEvent::Cancel => {
                    self.on_cancel(&mut session, &*camera, &notices).await
                }
                SessionEvent::Close => Flow::Close,
                SessionEvent::SourceLost => Flow::SourceLost,
            };
            match flow {
                Flow::Continue => {}
                Flow::Close => break,
                Flow::SourceLost => {
                    self.logger
                        .warn(&format!("Scanner lost during session {}", session.id()));
                    self.notify(&notices, SessionNotice::ScannerLost).await;
                    break;
                }
            }
        }

        self.teardown(&mut session, &mut *camera);
        self.notify(&notices, SessionNotice::Closed).await;
        session
    }

    async fn on_decoded(
        &self,
        session: &mut ScanSession,
        camera: &dyn CameraHandle,
        events: &mut mpsc::Receiver<SessionEvent>,
        notices: &mpsc::Sender<SessionNotice>,
        payload: String,
    ) -> Flow {
        if session.accept_decode(&payload) == DecodeOutcome::Dropped {
            self.logger
                .debug(&format!("Dropping decode while {}", session.state()));
            return Flow::Continue;
        }

        camera.pause();
        self.notify(notices, SessionNotice::Paused { payload }).await;

        let payload = match session.begin_resolving() {
            Ok(payload) => payload,
            Err(err) => {
                self.logger.error(&format!("Cannot resolve: {}", err));
                return Flow::Continue;
            }
        };

        let resolution = self.resolver.execute(ResolvePayloadParams { payload });
        let result = match self.drive(resolution, ScanState::Resolving, events).await {
            Ok(result) => result,
            Err(flow) => {
                self.logger.info("Session interrupted while resolving");
                return flow;
            }
        };

        match result {
            Ok(scan) => {
                if let Err(err) = session.resolution_succeeded(scan.clone()) {
                    self.logger.error(&format!("Cannot confirm: {}", err));
                    return Flow::Continue;
                }
                self.notify(notices, SessionNotice::Resolved(scan)).await;
            }
            Err(err) => {
                self.logger.warn(&format!("Resolution failed: {}", err));
                if let Err(err) = session.resolution_failed() {
                    self.logger.error(&format!("Cannot resume: {}", err));
                }
                camera.resume();
                self.notify(notices, SessionNotice::ResolveFailed(err)).await;
            }
        }

        Flow::Continue
    }

    async fn on_confirm(
        &self,
        session: &mut ScanSession,
        camera: &dyn CameraHandle,
        events: &mut mpsc::Receiver<SessionEvent>,
        notices: &mpsc::Sender<SessionNotice>,
    ) -> Flow {
        let product = match session.resolved() {
            Some(scan) => scan.product.clone(),
            None => {
                self.logger
                    .debug(&format!("Ignoring confirm while {}", session.state()));
                return Flow::Continue;
            }
        };

        let submission = self.add_to_cart.execute(AddCartLineParams { product });
        let result = match self.drive(submission, ScanState::Confirming, events).await {
            Ok(result) => result,
            Err(flow) => {
                self.logger.info("Session interrupted while submitting");
                return flow;
            }
        };

        match result {
            Ok(line) => {
                self.return_to_scanning(session, camera);
                self.notify(notices, SessionNotice::Added(line)).await;
            }
            Err(error) if error.is_retryable() => {
                let attempts = session.submit_failed().unwrap_or_default();
                self.logger.warn(&format!(
                    "Cart submission failed ({} attempts): {}",
                    attempts, error
                ));
                self.notify(notices, SessionNotice::SubmitFailed { error, attempts })
                    .await;
            }
            Err(error) => {
                let attempts = session.submit_failures();
                self.return_to_scanning(session, camera);
                self.notify(notices, SessionNotice::SubmitFailed { error, attempts })
                    .await;
                self.notify(notices, SessionNotice::Discarded).await;
            }
        }

        Flow::Continue
    }

    async fn on_cancel(
        &self,
        session: &mut ScanSession,
        camera: &dyn CameraHandle,
        notices: &mpsc::Sender<SessionNotice>,
    ) -> Flow {
        if session.state() != ScanState::Confirming {
            self.logger
                .debug(&format!("Ignoring cancel while {}", session.state()));
            return Flow::Continue;
        }

        self.return_to_scanning(session, camera);
        self.notify(notices, SessionNotice::Discarded).await;
        Flow::Continue
    }

    /// Awaits `work` while draining the event channel. Returns the ending
    /// flow when the session is closed or the scanner is lost first; the
    /// work is then dropped unfinished.
    async fn drive<T>(
        &self,
        work: impl Future<Output = T>,
        state: ScanState,
        events: &mut mpsc::Receiver<SessionEvent>,
    ) -> Result<T, Flow> {
        tokio::pin!(work);
        loop {
            tokio::select! {
                output = &mut work => return Ok(output),
                event = events.recv() => match event {
                    Some(SessionEvent::Decoded(_)) => {
                        self.logger.debug(&format!("Dropping decode while {}", state));
                    }
                    Some(SessionEvent::Close) | None => return Err(Flow::Close),
                    Some(SessionEvent::SourceLost) => return Err(Flow::SourceLost),
                    Some(other) => {
                        self.logger.debug(&format!("Ignoring {:?} while {}", other, state));
                    }
                },
            }
        }
    }

    fn return_to_scanning(&self, session: &mut ScanSession, camera: &dyn CameraHandle) {
        match session.finish_confirmation() {
            Ok(_) => camera.resume(),
            Err(err) => self.logger.error(&format!("Cannot resume: {}", err)),
        }
    }

    /// Best-effort release; failures are logged, never propagated.
    fn teardown(&self, session: &mut ScanSession, camera: &mut dyn CameraHandle) {
        if let Err(err) = camera.release() {
            self.logger.warn(&format!("Camera release failed: {}", err));
        }
        session.close();
        self.logger
            .info(&format!("Scan session {} closed", session.id()));
    }

    async fn notify(&self, notices: &mpsc::Sender<SessionNotice>, notice: SessionNotice) {
        if notices.send(notice).await.is_err() {
            self.logger.debug("Notice receiver dropped");
        }
    }
}
