use std::sync::Arc;

use tx_core::invite::InviteData;

use crate::state::PendingInviteStore;

/// Use case for the post-auth landing screen.
///
/// Navigation-supplied invite params win when present; otherwise the stashed
/// invite from before the sign-up detour is recovered. The slot is left set
/// either way; it is cleared only when the invite is consumed or declined.
pub struct ResumePendingInvite {
    pending: Arc<PendingInviteStore>,
}

impl ResumePendingInvite {
    pub fn new(pending: Arc<PendingInviteStore>) -> Self {
        Self { pending }
    }

    pub fn execute(&self, nav_invite: Option<InviteData>) -> Option<InviteData> {
        nav_invite.or_else(|| self.pending.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_core::ids::{CircleId, UserId};
    use tx_core::invite::CircleInvite;

    fn invite(id: &str) -> InviteData {
        InviteData::Circle(CircleInvite {
            id: CircleId::new(id),
            name: "Family Fund".to_string(),
            emoji: "💰".to_string(),
            invited_by: UserId::new("u1"),
            inviter_name: "Amara".to_string(),
            contribution_amount: None,
            frequency: None,
            member_count: None,
        })
    }

    #[test]
    fn test_nav_params_win_over_stash() {
        let pending = Arc::new(PendingInviteStore::new());
        pending.set(invite("stashed"));
        let resumed = ResumePendingInvite::new(pending.clone())
            .execute(Some(invite("from_nav")))
            .unwrap();
        let InviteData::Circle(c) = resumed else {
            panic!("expected circle");
        };
        assert_eq!(c.id.as_str(), "from_nav");
    }

    #[test]
    fn test_falls_back_to_stash_and_keeps_it() {
        let pending = Arc::new(PendingInviteStore::new());
        pending.set(invite("stashed"));
        let uc = ResumePendingInvite::new(pending.clone());
        assert!(uc.execute(None).is_some());
        // recovering is not consuming
        assert!(pending.is_set());
    }

    #[test]
    fn test_nothing_to_resume() {
        let uc = ResumePendingInvite::new(Arc::new(PendingInviteStore::new()));
        assert_eq!(uc.execute(None), None);
    }
}
