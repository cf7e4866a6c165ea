//! Infrastructure adapters for Tandaxn.
//!
//! Implementations of the `tx-core` ports on the device: file-backed
//! key-value persistence, an in-memory store for tests and previews, and the
//! system clock.

pub mod clock;
pub mod kv;

pub use clock::SystemClock;
pub use kv::{FileKeyValueStore, MemoryKeyValueStore};
