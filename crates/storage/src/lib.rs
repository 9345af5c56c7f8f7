#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use repository::{InMemoryRepository, Storage, StorageError};
