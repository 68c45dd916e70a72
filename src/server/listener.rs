use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::proxy::{BackendPool, RelaySession};

/// Bind the frontend listener and serve forever.
///
/// The pool is validated by the caller before this runs; a bind failure
/// is fatal and is the only error this returns. Everything past the bind
/// stays inside the accept loop.
pub async fn run(cfg: &Config, pool: Arc<BackendPool>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", cfg.frontend_port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{}", cfg.frontend_port))?;
    info!("Listening on port {}", cfg.frontend_port);

    serve(listener, pool).await
}

/// Accept loop over an already-bound listener.
///
/// Every accepted connection gets its own spawned relay session; the loop
/// never waits on a session. Accept errors are treated as transient: they
/// are logged and the loop continues.
pub async fn serve(listener: TcpListener, pool: Arc<BackendPool>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(pair) => pair,
            Err(e) => {
                error!("Error accepting: {}", e);
                continue;
            }
        };

        let pool = pool.clone();
        tokio::spawn(async move {
            RelaySession::new(socket, peer, pool).run().await;
        });
    }
}
