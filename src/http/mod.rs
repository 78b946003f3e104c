//! HTTP protocol implementation.
//!
//! This module implements a small HTTP/1.1 server that answers exactly one
//! request per connection.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`line_reader`**: Reads CRLF-terminated lines from a connected stream
//! - **`parser`**: Builds a `Request` from the request line and the headers it cares about
//! - **`request`**: HTTP request representation
//! - **`router`**: Maps a request target to one of the fixed routes
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`connection`**: The per-connection state machine tying the above together
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read request line and headers until blank line
//!        └──────┬──────┘
//!               │ Headers done (or EOF / read error)
//!               ▼
//!        ┌──────────────────┐
//!        │    Routing       │ ← Pick a route, build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Serialize and send response
//!        └──────┬───────────┘
//!               │ Response sent (or write failed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hearth::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("0.0.0.0:4221").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod line_reader;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
