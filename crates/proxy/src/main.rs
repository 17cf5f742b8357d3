//! Runs the intermediary endpoint.

#[macro_use]
extern crate tracing;

use quill_proxy::ProxyConfigBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ProxyConfigBuilder::from_env().build();
    let listener = match TcpListener::bind(config.listen_addr()).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("cannot listen on {}: {err}", config.listen_addr());
            return;
        }
    };
    info!(
        "forwarding http://{}/api/generate to {}",
        config.listen_addr(),
        config.generate_url()
    );

    if let Err(err) = quill_proxy::serve(listener, config).await {
        error!("server stopped: {err}");
    }
}
