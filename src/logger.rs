//! Logger module
//!
//! Provides logging utilities for the HTTP server:
//! - Server lifecycle logging
//! - One access line per request, written before resolution begins
//! - Error and warning logging

use crate::config::AppState;
use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, state: &AppState) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("Serving from: {}", state.root.display());
    if let Some(workers) = state.config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_request(method: &Method, path: &str) {
    println!(
        "[{}] {method} {path}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_response(bytes: usize) {
    println!("[Response] 200 OK ({bytes} bytes)");
}
