//! Backend selection
//!
//! This module holds the configured backend ports and hands them out
//! in round-robin order, one per accepted connection.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Pool of backend ports with a round-robin cursor.
///
/// The port list is fixed at startup; the cursor is an atomic counter so
/// concurrently accepted sessions never observe a skipped or duplicated
/// assignment.
#[derive(Debug)]
pub struct BackendPool {
    ports: Vec<u16>,
    cursor: AtomicUsize,
}

impl BackendPool {
    /// Create a pool from the configured port list, in order.
    ///
    /// Fails if the list is empty; the pool is non-empty by construction.
    pub fn new(ports: Vec<u16>) -> anyhow::Result<Self> {
        anyhow::ensure!(!ports.is_empty(), "backend pool requires at least one port");

        Ok(Self {
            ports,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Select the next backend port, cycling through the configured list.
    ///
    /// Atomic: each call takes exactly one slot in the round-robin
    /// sequence, even under concurrent callers.
    pub fn next_port(&self) -> u16 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.ports[i % self.ports.len()]
    }

    /// Number of configured backends.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Configured ports, in selection order.
    pub fn ports(&self) -> &[u16] {
        &self.ports
    }
}
