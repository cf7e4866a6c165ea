use std::sync::Arc;

use tracing::debug;

use tx_core::invite::link::InviteLinkCodec;
use tx_core::invite::{share, InviteData};
use tx_core::ports::SharePort;

/// Use case for sharing an invite link through the OS.
pub struct ShareInvite {
    codec: InviteLinkCodec,
    share: Arc<dyn SharePort>,
}

impl ShareInvite {
    pub fn new(codec: InviteLinkCodec, share: Arc<dyn SharePort>) -> Self {
        Self { codec, share }
    }

    /// Open the share sheet with the invite message.
    ///
    /// `Ok(true)` when the user completed a share, `Ok(false)` when they
    /// dismissed the sheet.
    pub async fn execute(&self, invite: &InviteData) -> anyhow::Result<bool> {
        let link = self.codec.encode(invite);
        let message = share::invite_message(invite, &link);
        let shared = self.share.share_text(&message).await?;
        debug!(shared, invite = %invite.name(), "share sheet closed");
        Ok(shared)
    }

    /// Copy the bare link instead; `Ok(true)` when the clipboard took it.
    pub async fn copy_link(&self, invite: &InviteData) -> anyhow::Result<bool> {
        let link = self.codec.encode(invite);
        self.share.copy_to_clipboard(&link).await
    }
}
