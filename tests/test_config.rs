//! Tests for the CLI configuration surface

use carousel::config::{Config, DEFAULT_FRONTEND_PORT};
use clap::Parser;

#[test]
fn test_default_frontend_port() {
    let cfg = Config::try_parse_from(["carousel", "-p", "9001"]).unwrap();

    assert_eq!(cfg.frontend_port, DEFAULT_FRONTEND_PORT);
    assert_eq!(cfg.frontend_port, 8080);
}

#[test]
fn test_custom_frontend_port() {
    let cfg = Config::try_parse_from(["carousel", "-f", "9090", "-p", "9001"]).unwrap();

    assert_eq!(cfg.frontend_port, 9090);
}

#[test]
fn test_backend_ports_keep_flag_order() {
    let cfg = Config::try_parse_from([
        "carousel", "-p", "9003", "-p", "9001", "-p", "9002",
    ])
    .unwrap();

    assert_eq!(cfg.backend_ports, vec![9003, 9001, 9002]);
}

#[test]
fn test_no_backend_ports_parses_as_empty() {
    // Parsing succeeds; main refuses to start on an empty list.
    let cfg = Config::try_parse_from(["carousel"]).unwrap();

    assert!(cfg.backend_ports.is_empty());
}

#[test]
fn test_invalid_port_value_rejected() {
    assert!(Config::try_parse_from(["carousel", "-p", "not-a-port"]).is_err());
    assert!(Config::try_parse_from(["carousel", "-p", "70000"]).is_err());
}
