use std::sync::Arc;

use tracing::{info, warn};

use tx_core::invite::InviteData;
use tx_core::onboarding::seed::{STEP_EXPLORE_COMMUNITIES, STEP_JOIN_CIRCLE};
use tx_core::ports::{JoinError, MembershipPort};

use crate::state::{OnboardingService, PendingInviteStore};

/// Use case for accepting an invite.
///
/// Order matters:
/// 1. Join through the membership backend. A failure leaves the pending slot
///    untouched so the user can retry without re-opening the original link.
/// 2. On success, complete the matching onboarding step. A persistence
///    failure there is logged; it never turns a successful join into an
///    error.
/// 3. Clear the pending slot, the single consumption point of the invite.
pub struct AcceptInvite {
    membership: Arc<dyn MembershipPort>,
    onboarding: Arc<OnboardingService>,
    pending: Arc<PendingInviteStore>,
}

impl AcceptInvite {
    pub fn new(
        membership: Arc<dyn MembershipPort>,
        onboarding: Arc<OnboardingService>,
        pending: Arc<PendingInviteStore>,
    ) -> Self {
        Self {
            membership,
            onboarding,
            pending,
        }
    }

    pub async fn execute(&self, invite: &InviteData) -> Result<(), JoinError> {
        let step_id = match invite {
            InviteData::Circle(c) => {
                self.membership.join_circle(&c.id).await?;
                STEP_JOIN_CIRCLE
            }
            InviteData::Community(c) => {
                self.membership.join_community(&c.id).await?;
                STEP_EXPLORE_COMMUNITIES
            }
        };
        info!(invite = %invite.name(), "invite accepted");

        if let Err(e) = self.onboarding.complete_step(step_id).await {
            warn!(error = %e, step = step_id, "completing onboarding step after join failed");
        }
        self.pending.clear();
        Ok(())
    }
}
