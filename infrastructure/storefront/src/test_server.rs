use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use url::Url;

use crate::client::StorefrontClient;

/// Serves `app` on an ephemeral loopback port and returns a client for it.
pub(crate) async fn spawn(app: Router) -> StorefrontClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    let base_url = Url::parse(&format!("http://{addr}")).expect("base url");
    StorefrontClient::new(base_url, Duration::from_secs(5))
}

/// A base URL nothing listens on.
pub(crate) async fn unreachable() -> StorefrontClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let base_url = Url::parse(&format!("http://{addr}")).expect("base url");
    StorefrontClient::new(base_url, Duration::from_secs(5))
}
