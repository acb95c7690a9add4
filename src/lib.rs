//! Stash - a small HTTP/1.1 file server
//!
//! Stores request bodies as `.txt` or `.json` files under a root directory and
//! serves them back.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
