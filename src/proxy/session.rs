//! Relay sessions
//!
//! A session pairs one accepted frontend connection with a freshly dialed
//! backend connection and pumps bytes in both directions until each side
//! has finished. The session owns both sockets; the pumps never close
//! them. Both sockets are released exactly once, when the halves held by
//! the two pump tasks are dropped.

use std::net::SocketAddr;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::proxy::backend::BackendPool;

/// Per-direction copy buffer size. Bounded and reused across reads.
const PUMP_BUFFER_SIZE: usize = 1024;

/// One accepted connection plus the backend it relays to.
pub struct RelaySession {
    frontend: TcpStream,
    peer: SocketAddr,
    pool: Arc<BackendPool>,
}

impl RelaySession {
    pub fn new(frontend: TcpStream, peer: SocketAddr, pool: Arc<BackendPool>) -> Self {
        Self {
            frontend,
            peer,
            pool,
        }
    }

    /// Run the session to completion.
    ///
    /// Dials the next backend in round-robin order, then runs one pump
    /// task per direction and waits for both before letting the sockets
    /// drop. A dial failure abandons the session: the frontend connection
    /// is closed and no other backend is tried.
    pub async fn run(self) {
        let port = self.pool.next_port();

        let backend = match TcpStream::connect(("127.0.0.1", port)).await {
            Ok(stream) => stream,
            Err(e) => {
                error!("Error connecting to backend 127.0.0.1:{}: {}", port, e);
                return;
            }
        };

        info!("Relaying {} to 127.0.0.1:{}", self.peer, port);

        let (front_read, front_write) = self.frontend.into_split();
        let (back_read, back_write) = backend.into_split();

        let upstream = tokio::spawn(pump(front_read, back_write, "frontend", "backend"));
        let downstream = tokio::spawn(pump(back_read, front_write, "backend", "frontend"));

        // Each half is dropped by its pump task; joining both guarantees
        // neither socket is torn down while the other direction still
        // needs it.
        join_pumps(upstream, downstream).await;

        info!("Finished relaying {} to 127.0.0.1:{}", self.peer, port);
    }
}

/// Wait for both directional pumps, surfacing a panicked pump task
/// instead of swallowing it. Teardown continues either way.
async fn join_pumps(upstream: JoinHandle<()>, downstream: JoinHandle<()>) {
    let (up, down) = tokio::join!(upstream, downstream);
    for res in [up, down] {
        if let Err(e) = res {
            error!("Pump task failed: {}", e);
        }
    }
}

/// Copy bytes from `src` to `dst` until end-of-stream or an I/O error.
///
/// Short writes are retried until the full range read has been flushed.
/// On a clean end-of-stream the half-close is forwarded to `dst` so the
/// destination sees EOF while the opposite direction keeps running.
async fn pump(
    mut src: OwnedReadHalf,
    mut dst: OwnedWriteHalf,
    from: &'static str,
    to: &'static str,
) {
    let mut buf = BytesMut::with_capacity(PUMP_BUFFER_SIZE);

    loop {
        buf.clear();

        match src.read_buf(&mut buf).await {
            Ok(0) => {
                // Graceful close of the source. Forward the FIN; the
                // socket itself stays open for the other direction.
                if let Err(e) = dst.shutdown().await {
                    // Usually means the peer is already fully gone.
                    debug!("Error shutting down write side to {}: {}", to, e);
                }
                return;
            }
            Ok(_) => {
                // write_all loops over partial writes for us.
                if let Err(e) = dst.write_all(&buf).await {
                    error!("Error writing to {}: {}", to, e);
                    return;
                }
            }
            Err(e) => {
                error!("Error reading from {}: {}", from, e);
                return;
            }
        }
    }
}
