#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use quill_proxy::{ProxyConfigBuilder, router};
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral local port.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts the proxy in front of a fake remote service.
pub async fn spawn_proxy(upstream: Router) -> SocketAddr {
    let upstream_addr = spawn_server(upstream).await;
    let config = ProxyConfigBuilder::new()
        .with_upstream_url(format!("http://{upstream_addr}"))
        .build();
    spawn_server(router(config)).await
}

/// Returns an address nothing listens on.
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
