//! OS share-sheet / clipboard port

use async_trait::async_trait;

#[async_trait]
pub trait SharePort: Send + Sync {
    /// Present the system share sheet. `Ok(true)` when the user completed a
    /// share, `Ok(false)` when they dismissed it.
    async fn share_text(&self, text: &str) -> anyhow::Result<bool>;

    /// Copy to the system clipboard. `Ok(true)` when the clipboard took it.
    async fn copy_to_clipboard(&self, text: &str) -> anyhow::Result<bool>;
}
