use std::sync::Arc;

use carousel::config::{self, Config};
use carousel::proxy::BackendPool;
use carousel::server;

use clap::CommandFactory;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();

    let pool = match BackendPool::new(cfg.backend_ports.clone()) {
        Ok(pool) => Arc::new(pool),
        Err(_) => {
            eprintln!("error: at least one backend port (-p) is required\n");
            let _ = Config::command().write_help(&mut std::io::stderr());
            eprintln!();
            std::process::exit(config::EXIT_NO_BACKENDS);
        }
    };

    tokio::select! {
        res = server::listener::run(&cfg, pool) => {
            if let Err(e) = res {
                tracing::error!("{e:#}");
                std::process::exit(config::EXIT_BIND_FAILED);
            }
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
