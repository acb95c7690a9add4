//! File storage and request routing
//!
//! `store` owns the on-disk layout under the storage root; `handler` maps
//! GET/POST requests onto it.

pub mod handler;
pub mod store;

pub use handler::FileHandler;
pub use store::{FileStore, StoreError};
