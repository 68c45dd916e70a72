use clap::Parser;

/// Exit code when no backend ports were configured.
pub const EXIT_NO_BACKENDS: i32 = 1;
/// Exit code when the frontend listener could not be bound.
pub const EXIT_BIND_FAILED: i32 = 2;

pub const DEFAULT_FRONTEND_PORT: u16 = 8080;

#[derive(Parser, Debug, Clone)]
#[command(name = "carousel", about = "Round-robin TCP load balancer")]
pub struct Config {
    /// Port to accept client connections on
    #[arg(short = 'f', value_name = "PORT", default_value_t = DEFAULT_FRONTEND_PORT)]
    pub frontend_port: u16,

    /// Backend port to relay to; repeat the flag for multiple backends
    #[arg(short = 'p', value_name = "PORT")]
    pub backend_ports: Vec<u16>,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }
}
