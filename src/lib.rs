//! Carousel - Round-robin TCP load balancer
//!
//! Core library for backend selection and connection relaying.

pub mod config;
pub mod proxy;
pub mod server;
