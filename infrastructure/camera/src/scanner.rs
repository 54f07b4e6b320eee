use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::{TcpStream, lookup_host};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use business::domain::logger::Logger;
use business::domain::scan::camera::{CameraHandle, CameraService};
use business::domain::scan::errors::{CameraAcquisitionError, CameraReleaseError};
use business::domain::scan::events::SessionEvent;

use crate::source::ScannerSource;

type SourceReader = Box<dyn AsyncRead + Send + Unpin>;

/// Camera adapter for line-oriented code scanners.
///
/// Each non-empty line read from the source is one decoded payload.
pub struct ScannerCamera {
    source: ScannerSource,
    allow_insecure_remote: bool,
    logger: Arc<dyn Logger>,
}

impl ScannerCamera {
    pub fn new(source: ScannerSource, allow_insecure_remote: bool, logger: Arc<dyn Logger>) -> Self {
        Self {
            source,
            allow_insecure_remote,
            logger,
        }
    }

    async fn open(&self) -> Result<SourceReader, CameraAcquisitionError> {
        match &self.source {
            ScannerSource::Device(path) => {
                let file = File::open(path).await.map_err(|e| categorize(&e))?;
                Ok(Box::new(file))
            }
            ScannerSource::Tcp { host, port } => {
                if !self.allow_insecure_remote && !self.source.is_local() {
                    return Err(CameraAcquisitionError::InsecureContext);
                }
                // Resolve separately so an unknown host is told apart from
                // other connect failures.
                let addrs: Vec<_> = lookup_host((host.as_str(), *port))
                    .await
                    .map_err(|_| CameraAcquisitionError::NotFound)?
                    .collect();
                if addrs.is_empty() {
                    return Err(CameraAcquisitionError::NotFound);
                }
                let stream = TcpStream::connect(addrs.as_slice())
                    .await
                    .map_err(|e| categorize(&e))?;
                Ok(Box::new(stream))
            }
        }
    }
}

#[async_trait]
impl CameraService for ScannerCamera {
    async fn acquire(
        &self,
        sink: mpsc::Sender<SessionEvent>,
    ) -> Result<Box<dyn CameraHandle>, CameraAcquisitionError> {
        let reader = self.open().await.inspect_err(|e| {
            self.logger.warn(&format!(
                "Cannot open scanner {}: {}",
                self.source,
                e.category()
            ));
        })?;

        self.logger.info(&format!("Scanner {} opened", self.source));

        let paused = Arc::new(AtomicBool::new(false));
        let task = tokio::spawn(forward_lines(
            reader,
            sink,
            paused.clone(),
            self.logger.clone(),
        ));

        Ok(Box::new(ScannerHandle {
            paused,
            reader: Some(task),
        }))
    }
}

/// Maps OS errors onto acquisition categories by kind only.
pub fn categorize(err: &io::Error) -> CameraAcquisitionError {
    match err.kind() {
        io::ErrorKind::PermissionDenied => CameraAcquisitionError::PermissionDenied,
        io::ErrorKind::NotFound | io::ErrorKind::ConnectionRefused => {
            CameraAcquisitionError::NotFound
        }
        io::ErrorKind::ResourceBusy | io::ErrorKind::AddrInUse => {
            CameraAcquisitionError::DeviceBusy
        }
        _ => CameraAcquisitionError::Unavailable(err.to_string()),
    }
}

/// Forwards decodes until the source ends, then reports the loss. Stops
/// silently when the session stops listening.
async fn forward_lines<R>(
    reader: R,
    sink: mpsc::Sender<SessionEvent>,
    paused: Arc<AtomicBool>,
    logger: Arc<dyn Logger>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let payload = line.trim_end_matches('\r');
                if payload.trim().is_empty() {
                    continue;
                }
                if paused.load(Ordering::SeqCst) {
                    logger.debug("Scanner paused, discarding decode");
                    continue;
                }
                if sink
                    .send(SessionEvent::Decoded(payload.to_string()))
                    .await
                    .is_err()
                {
                    return;
                }
            }
            Ok(None) => {
                logger.warn("Scanner source reached end of stream");
                break;
            }
            Err(err) => {
                logger.warn(&format!("Scanner read failed: {}", err));
                break;
            }
        }
    }
    if sink.send(SessionEvent::SourceLost).await.is_err() {
        logger.debug("Session gone before scanner loss was reported");
    }
}

/// Live scanner. Decodes are discarded while paused.
pub struct ScannerHandle {
    paused: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl CameraHandle for ScannerHandle {
    fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    fn release(&mut self) -> Result<(), CameraReleaseError> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        Ok(())
    }
}

impl Drop for ScannerHandle {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::scan::controller::ScanSessionController;
    use business::domain::cart::errors::CartSubmissionError;
    use business::domain::cart::model::CartLineRequest;
    use business::domain::cart::use_cases::add_line::{AddCartLineParams, AddCartLineUseCase};
    use business::domain::product::errors::ResolveError;
    use business::domain::product::model::ResolvedScan;
    use business::domain::product::use_cases::resolve::{
        ResolvePayloadParams, ResolvePayloadUseCase,
    };
    use business::domain::scan::events::SessionNotice;
    use business::domain::scan::model::ScanState;
    use mockall::mock;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;
    use tokio::time::timeout;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    mock! {
        pub Resolver {}

        #[async_trait]
        impl ResolvePayloadUseCase for Resolver {
            async fn execute(&self, params: ResolvePayloadParams) -> Result<ResolvedScan, ResolveError>;
        }
    }

    mock! {
        pub AddToCart {}

        #[async_trait]
        impl AddCartLineUseCase for AddToCart {
            async fn execute(&self, params: AddCartLineParams)
            -> Result<CartLineRequest, CartSubmissionError>;
        }
    }

    fn camera(source: ScannerSource, allow_insecure_remote: bool) -> ScannerCamera {
        ScannerCamera::new(source, allow_insecure_remote, mock_logger())
    }

    async fn next(rx: &mut mpsc::Receiver<SessionEvent>) -> Option<SessionEvent> {
        timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("event in time")
    }

    #[test]
    fn should_categorize_by_error_kind() {
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::PermissionDenied)),
            CameraAcquisitionError::PermissionDenied
        );
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::NotFound)),
            CameraAcquisitionError::NotFound
        );
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::ConnectionRefused)),
            CameraAcquisitionError::NotFound
        );
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::ResourceBusy)),
            CameraAcquisitionError::DeviceBusy
        );
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::AddrInUse)),
            CameraAcquisitionError::DeviceBusy
        );
        assert_eq!(
            categorize(&io::Error::from(io::ErrorKind::TimedOut)).category(),
            "unavailable"
        );
    }

    #[tokio::test]
    async fn should_forward_each_non_empty_line_from_device() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"store_id\":\"S1\",\"id\":\"P9\"}}\n\n   \r\nP2\r\n").unwrap();
        let camera = camera(ScannerSource::Device(file.path().to_path_buf()), false);
        let (tx, mut rx) = mpsc::channel(8);

        let _handle = camera.acquire(tx).await.unwrap();

        assert_eq!(
            next(&mut rx).await,
            Some(SessionEvent::Decoded(
                r#"{"store_id":"S1","id":"P9"}"#.to_string()
            ))
        );
        assert_eq!(
            next(&mut rx).await,
            Some(SessionEvent::Decoded("P2".to_string()))
        );
        assert_eq!(next(&mut rx).await, Some(SessionEvent::SourceLost));
        assert_eq!(next(&mut rx).await, None);
    }

    #[tokio::test]
    async fn should_report_missing_device_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let camera = camera(ScannerSource::Device(dir.path().join("ttyACM9")), false);
        let (tx, _rx) = mpsc::channel(8);

        let result = camera.acquire(tx).await;

        assert_eq!(result.err(), Some(CameraAcquisitionError::NotFound));
    }

    #[tokio::test]
    async fn should_discard_lines_while_paused() {
        let (tx, mut rx) = mpsc::channel(8);
        let paused = Arc::new(AtomicBool::new(true));

        forward_lines(&b"P1\nP2\n"[..], tx, paused, mock_logger()).await;

        assert_eq!(rx.recv().await, Some(SessionEvent::SourceLost));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn should_refuse_remote_source_without_opt_in() {
        let source = ScannerSource::Tcp {
            host: "203.0.113.5".to_string(),
            port: 7000,
        };
        let (tx, _rx) = mpsc::channel(8);

        let result = camera(source, false).acquire(tx).await;

        assert_eq!(result.err(), Some(CameraAcquisitionError::InsecureContext));
    }

    #[tokio::test]
    async fn should_report_refused_connection_as_not_found() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let source = ScannerSource::Tcp {
            host: "127.0.0.1".to_string(),
            port,
        };
        let (tx, _rx) = mpsc::channel(8);

        let result = camera(source, false).acquire(tx).await;

        assert_eq!(result.err(), Some(CameraAcquisitionError::NotFound));
    }

    #[tokio::test]
    async fn should_stream_decodes_from_loopback_tcp_until_released() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let source = ScannerSource::Tcp {
            host: "127.0.0.1".to_string(),
            port,
        };
        let (tx, mut rx) = mpsc::channel(8);

        let mut handle = camera(source, false).acquire(tx).await.unwrap();
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(b"https://x/store/S1/product/P9\n").await.unwrap();

        assert_eq!(
            next(&mut rx).await,
            Some(SessionEvent::Decoded(
                "https://x/store/S1/product/P9".to_string()
            ))
        );

        assert!(handle.release().is_ok());
        assert!(handle.release().is_ok());
        assert_eq!(next(&mut rx).await, None);
    }

    #[tokio::test]
    async fn should_accept_path_without_device_prefix() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path: PathBuf = file.path().to_path_buf();
        let source: ScannerSource = path.display().to_string().parse().unwrap();
        let (tx, _rx) = mpsc::channel(8);

        assert!(camera(source, false).acquire(tx).await.is_ok());
    }

    #[tokio::test]
    async fn should_report_lost_source_when_peer_disconnects() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let source = ScannerSource::Tcp {
            host: "127.0.0.1".to_string(),
            port,
        };
        let (tx, mut rx) = mpsc::channel(8);

        let _handle = camera(source, false).acquire(tx).await.unwrap();
        let (socket, _) = listener.accept().await.unwrap();
        drop(socket);

        assert_eq!(next(&mut rx).await, Some(SessionEvent::SourceLost));
    }

    #[tokio::test]
    async fn should_end_session_when_device_runs_dry() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut resolver = MockResolver::new();
        resolver.expect_execute().never();
        let mut add_to_cart = MockAddToCart::new();
        add_to_cart.expect_execute().never();
        let controller = ScanSessionController {
            camera: Arc::new(camera(ScannerSource::Device(file.path().to_path_buf()), false)),
            resolver: Arc::new(resolver),
            add_to_cart: Arc::new(add_to_cart),
            logger: mock_logger(),
        };
        let (events_tx, events_rx) = mpsc::channel(8);
        let (notices_tx, mut notices_rx) = mpsc::channel(8);
        // Keeps the channel open so only the loss event can end the session.
        let _user_events = events_tx.clone();

        let session = timeout(
            Duration::from_secs(5),
            controller.run(events_tx, events_rx, notices_tx),
        )
        .await
        .expect("session ends on its own");

        assert_eq!(session.state(), ScanState::Idle);
        assert!(matches!(
            notices_rx.recv().await,
            Some(SessionNotice::Started { .. })
        ));
        assert_eq!(notices_rx.recv().await, Some(SessionNotice::ScannerLost));
        assert_eq!(notices_rx.recv().await, Some(SessionNotice::Closed));
    }
}
