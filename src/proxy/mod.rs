//! Connection relaying
//!
//! This module implements the core load-balancing logic: round-robin
//! backend selection and the per-connection bidirectional relay.

pub mod backend;
pub mod session;

pub use backend::BackendPool;
pub use session::RelaySession;
