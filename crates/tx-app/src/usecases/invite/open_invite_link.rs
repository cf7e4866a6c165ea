use std::sync::Arc;

use tracing::debug;

use tx_core::invite::link::InviteLinkCodec;
use tx_core::invite::InviteData;
use tx_core::ports::SessionPort;

use crate::state::PendingInviteStore;

/// What the routing layer should do with an incoming deep link.
#[derive(Debug, Clone, PartialEq)]
pub enum OpenInviteOutcome {
    /// Not an invite link; continue normal routing.
    NotAnInvite,
    /// Signed in: render the invite preview right away.
    ShowInvite(InviteData),
    /// Signed out: the invite is stashed. Route to sign-up and let the
    /// landing screen pick it up afterwards.
    AuthRequired(InviteData),
}

/// Use case for a URL handed to the app by the OS or the web router.
pub struct OpenInviteLink {
    codec: InviteLinkCodec,
    session: Arc<dyn SessionPort>,
    pending: Arc<PendingInviteStore>,
}

impl OpenInviteLink {
    pub fn new(
        codec: InviteLinkCodec,
        session: Arc<dyn SessionPort>,
        pending: Arc<PendingInviteStore>,
    ) -> Self {
        Self {
            codec,
            session,
            pending,
        }
    }

    /// Decode the URL and decide the route.
    ///
    /// Stashing happens here, before any navigation, so the invite survives
    /// the whole sign-up detour even if the app restarts navigation state.
    pub fn execute(&self, raw_url: &str) -> OpenInviteOutcome {
        let Some(invite) = self.codec.decode(raw_url) else {
            return OpenInviteOutcome::NotAnInvite;
        };
        if self.session.current_user().is_some() {
            OpenInviteOutcome::ShowInvite(invite)
        } else {
            debug!(invite = %invite.name(), "invite opened while signed out, stashing until after auth");
            self.pending.set(invite.clone());
            OpenInviteOutcome::AuthRequired(invite)
        }
    }
}
