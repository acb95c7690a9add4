use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::Config;
use crate::files::{FileHandler, FileStore};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.listen_addr))?;
    info!(
        root = %cfg.storage.root.display(),
        "Listening on {}", cfg.server.listen_addr
    );

    let handler = Arc::new(FileHandler::new(FileStore::new(cfg.storage.root.clone())));
    serve(listener, handler, cfg.server.max_request_bytes).await
}

/// Accepts connections forever, one task each.
///
/// A failing connection is logged and dropped; only an accept error ends the
/// loop.
pub async fn serve(
    listener: TcpListener,
    handler: Arc<FileHandler>,
    buffer_capacity: usize,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        debug!("Accepted connection from {}", peer);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let conn = Connection::new(socket, handler, buffer_capacity);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
