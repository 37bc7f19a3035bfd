//! # sqm-store
//!
//! The marker store and the key-value storage it persists to.
//!
//! `MarkerStore` owns the ordered marker sequence. It loads once when opened
//! and writes the full sequence back after every mutation. Storage is
//! abstracted behind [`KeyValueStore`] so the same store runs against an
//! in-memory map in tests and a directory of JSON files in the CLI.

pub mod error;
pub mod kv;
pub mod store;

pub use error::StoreError;
pub use kv::{FileStorage, KeyValueStore, MemoryStorage};
pub use sqm_core::DEFAULT_STORAGE_KEY;
pub use store::{ImportSummary, MarkerStore};
