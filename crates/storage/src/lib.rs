//! Storage abstraction and implementations for sheet progress.
//!
//! This crate provides a synchronous key-value store trait with an in-memory
//! implementation for tests and a JSON file implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;
pub mod json_storage;

pub use trait_::{KeyValueStore, StorageError, Result};
pub use memory::MemoryStore;
pub use json_storage::JsonFileStore;
