//! TCP front end: binds the listening socket and hands each accepted stream
//! to its own [`Connection`](crate::http::connection::Connection) task.

pub mod listener;
