//! Logger module
//!
//! Plain-text logging for the server: lifecycle lines, Common Log Format
//! access lines, and error/warning lines. Output goes to stdout/stderr or
//! to the files named in the configuration.

pub mod writer;

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("QR content server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Content image: {}", config.content.image_url));
    write_info(&format!("Content text:  {}", config.content.text_url));
    if let Some(ref base) = config.server.public_url {
        write_info(&format!("QR payload base: {base}"));
    } else {
        write_info("QR payload base: derived from request Host header");
    }
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

/// Common Log Format access line:
/// `$remote_addr - - [$time_local] "$method $path HTTP/1.1" $status $bytes`
pub fn log_access(remote_addr: &str, method: &str, path: &str, status: u16, body_bytes: usize) {
    write_info(&format!(
        "{remote_addr} - - [{}] \"{method} {path} HTTP/1.1\" {status} {body_bytes}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
    ));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
