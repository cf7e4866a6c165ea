//! Device-local key-value store port
//!
//! One JSON document per key. Keys are already namespaced per user by the
//! caller (`onboarding_<userId>`), so nothing leaks across accounts on a
//! shared device.

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Fetch the raw document for `key`, or `None` when absent.
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write the document for `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}
