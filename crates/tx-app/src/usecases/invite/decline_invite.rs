use std::sync::Arc;

use tracing::info;

use crate::state::PendingInviteStore;

/// Use case for explicitly declining an invite.
///
/// Declining is the other legitimate consumption point of the pending slot
/// besides a successful join. Unrelated navigation never clears it.
pub struct DeclineInvite {
    pending: Arc<PendingInviteStore>,
}

impl DeclineInvite {
    pub fn new(pending: Arc<PendingInviteStore>) -> Self {
        Self { pending }
    }

    pub fn execute(&self) {
        if self.pending.is_set() {
            info!("pending invite declined");
        }
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_core::ids::{CircleId, UserId};
    use tx_core::invite::{CircleInvite, InviteData};

    #[test]
    fn test_decline_consumes_the_slot() {
        let pending = Arc::new(PendingInviteStore::new());
        pending.set(InviteData::Circle(CircleInvite {
            id: CircleId::new("abc"),
            name: "Family Fund".to_string(),
            emoji: "💰".to_string(),
            invited_by: UserId::new("u1"),
            inviter_name: "Amara".to_string(),
            contribution_amount: None,
            frequency: None,
            member_count: None,
        }));

        DeclineInvite::new(pending.clone()).execute();
        assert!(!pending.is_set());
    }

    #[test]
    fn test_decline_with_empty_slot_is_harmless() {
        let pending = Arc::new(PendingInviteStore::new());
        DeclineInvite::new(pending.clone()).execute();
        assert!(!pending.is_set());
    }
}
