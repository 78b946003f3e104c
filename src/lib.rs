//! Hearth - a minimal HTTP/1.1 server
//!
//! Core library for request parsing, routing and response serialization.

pub mod config;
pub mod http;
pub mod server;
