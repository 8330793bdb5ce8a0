//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server protocol with support
//! for keep-alive connections.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-socket session implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with canned constructors
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`codec`**: Protocol token enums (method, version, status, content type)
//!
//! # Session State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌───────────────┐
//!        │ ReadingHeader │ ← Accumulate bytes until the blank line
//!        └───────┬───────┘
//!                │ Request parsed (declared body still owed → ReadingBody first)
//!                ▼
//!        ┌───────────────┐
//!        │  Processing   │ ← Resolve the file, build the response
//!        └───────┬───────┘
//!                │ Response ready
//!                ▼
//!        ┌───────────────┐
//!        │    Writing    │ ← Send response to client
//!        └───────┬───────┘
//!                │ Response sent
//!                ├─ KEEP-ALIVE → ReadingHeader (same connection)
//!                └─ otherwise → Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use staticd::config::Config;
//! use staticd::http::connection::Session;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load()?;
//!     let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let static_files = cfg.static_files.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Session::new(socket, static_files).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod codec;
