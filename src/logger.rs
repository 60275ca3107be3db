//! Logger module
//!
//! Bracketed-tag logging helpers for server lifecycle, access logging, and
//! errors. Everything goes to stdout/stderr; this service persists no files.

use crate::config::{Config, SecretsConfig};
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config, secrets: &SecretsConfig) {
    println!("======================================");
    println!("NIMC Backend running on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Environment: {}", secrets.environment_or_default());
    println!("App name: {}", secrets.app_name_or_default());
    println!(
        "Weather API key loaded: {}",
        secrets.weather_api_key.is_some()
    );
    println!(
        "Payment API key loaded: {}",
        secrets.payment_api_key.is_some()
    );
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: u16, size: u64) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_login_attempt(username: &str) {
    println!("[Login] Attempt for user: {username}");
}

pub fn log_login_success(username: &str) {
    println!("[Login] Successful for: {username}");
}

pub fn log_login_failure(username: &str) {
    println!("[Login] Failed for: {username}");
}

pub fn log_secrets_info_requested() {
    println!("[Secrets] Secrets info requested");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
