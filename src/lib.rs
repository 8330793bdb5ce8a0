//! staticd - Keep-alive static file server
//!
//! Core library for the HTTP/1.1 protocol layer and static file serving.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
