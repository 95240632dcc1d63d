use crate::config::ServerConfig;
use hyper::{Method, Uri};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &ServerConfig) {
    println!("======================================");
    println!(
        "Starting http server on port {} for paths {} with response delay of {} seconds",
        config.port,
        config.paths.join(","),
        config.delay_seconds
    );
    println!("Listening on: http://{}", addr);
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {}", peer_addr);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {:?}", err);
}

pub fn log_request(method: &Method, uri: &Uri) {
    println!("[Request] {} {}", method, uri);
}

pub fn log_unmatched_path(path: &str) {
    println!("[Response] 500 for unserved path: {}", path);
}

pub fn log_body_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to read request body: {:?}", err);
}
