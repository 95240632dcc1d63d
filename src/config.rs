use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::routing::PathRegistry;

/// Command-line arguments for the fixture server.
#[derive(Debug, Clone, Parser)]
#[command(name = "fixture-server")]
#[command(about = "HTTP test-fixture server serving GET/POST on configurable paths")]
pub struct Args {
    /// Port to start the server on
    #[arg(long, default_value_t = 11111)]
    pub port: u16,

    /// One or more (comma-separated) paths served by the server
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Delay every response by the given number of seconds
    #[arg(long, default_value_t = 0.0)]
    pub delay: f64,
}

/// Validated server configuration, immutable after construction.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub paths: Vec<String>,
    pub delay_seconds: f64,
}

impl ServerConfig {
    /// Validate raw CLI arguments into a usable configuration.
    ///
    /// The path spec is split on `,` with each segment trimmed of
    /// surrounding whitespace; empty segments are dropped. At least one
    /// serving path must remain.
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let paths: Vec<String> = args
            .path
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string)
            .collect();

        if paths.is_empty() {
            return Err(format!(
                "Invalid path spec '{}': at least one non-empty serving path is required",
                args.path
            ));
        }

        if !args.delay.is_finite() || args.delay < 0.0 {
            return Err(format!(
                "Invalid delay '{}': must be a non-negative number of seconds",
                args.delay
            ));
        }

        Ok(Self {
            port: args.port,
            paths,
            delay_seconds: args.delay,
        })
    }

    /// Bind address: all interfaces on the configured port.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs_f64(self.delay_seconds)
    }
}

/// Process-lifetime state shared read-only across all connection tasks.
pub struct AppState {
    pub config: ServerConfig,
    pub registry: PathRegistry,
    /// Resolved once at startup so `Server-Hostname` is stable for the
    /// lifetime of the process.
    pub hostname: String,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = PathRegistry::new(&config.paths);
        let hostname = gethostname::gethostname().to_string_lossy().into_owned();
        Self {
            config,
            registry,
            hostname,
        }
    }
}
