use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod logger;
mod response;
mod routing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = config::Args::parse();
    let cfg = config::ServerConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr();
    let listener = create_reusable_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_connection_accepted(&peer_addr);
                handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                eprintln!("[Error] Failed to accept connection: {}", e);
            }
        }
    }
}

/// Serve one connection in a spawned task. Connection-level failures are
/// logged and never affect other connections.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<config::AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&state))),
        );
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled.
///
/// Test harnesses start and stop this server frequently; reuse flags let a
/// new instance bind a port still in TIME_WAIT from the previous run.
fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
