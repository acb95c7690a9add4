//! HTTP protocol implementation.
//!
//! A deliberately small slice of HTTP/1.1: one request per connection, read
//! in a single bounded read, answered with a single response.
//!
//! # Architecture
//!
//! - **`connection`**: Drives one accepted stream through read, route, write
//! - **`parser`**: Splits raw bytes into start line, headers and body
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Maps the two supported media types to file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read into a fixed-size buffer
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← FileHandler produces the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! A read of zero bytes goes straight from `Reading` to `Closed`. A malformed
//! start line ends the connection with an error and no response.

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
