//! Dependency grouping for service construction.
//!
//! This is NOT a builder: no build steps, no default values, no hidden
//! logic. Just parameter grouping for the composition root.

use std::sync::Arc;

use tx_core::community::{CommunityScorer, UserProfile};
use tx_core::ports::{ClockPort, KeyValueStorePort, MembershipPort, SessionPort, SharePort};

use crate::state::{CommunitySuggestionService, OnboardingService};

/// Ports the application layer is assembled from. All fields are required.
pub struct AppDeps {
    pub kv_store: Arc<dyn KeyValueStorePort>,
    pub session: Arc<dyn SessionPort>,
    pub membership: Arc<dyn MembershipPort>,
    pub share: Arc<dyn SharePort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Services that live for exactly one authenticated session.
///
/// Built on sign-in, dropped on sign-out; a different account gets a fresh
/// pair and can never observe the previous one's state.
pub struct SessionServices {
    pub onboarding: Arc<OnboardingService>,
    pub suggestions: Arc<CommunitySuggestionService>,
}

impl SessionServices {
    pub async fn sign_in(
        deps: &AppDeps,
        profile: &UserProfile,
        scorer: &dyn CommunityScorer,
    ) -> Self {
        let onboarding = OnboardingService::load(
            profile.user_id.clone(),
            deps.kv_store.clone(),
            deps.clock.clone(),
        )
        .await;
        Self {
            onboarding: Arc::new(onboarding),
            suggestions: Arc::new(CommunitySuggestionService::new(scorer, profile)),
        }
    }
}
