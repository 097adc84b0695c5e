//! Storage layer for Cobalt Shell
//!
//! This crate provides the embedded key-value store and the narrow
//! persistence capability the theme preference store depends on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod kv;

pub use adapter::{
    MemoryPreferenceStorage, PreferenceStorage, SledPreferenceStorage, StorageError,
};
pub use kv::{KvConfig, KvError, KvStore};
