//! Session-scoped state services.

pub mod onboarding_service;
pub mod pending_invite;
pub mod suggestions;

pub use onboarding_service::OnboardingService;
pub use pending_invite::PendingInviteStore;
pub use suggestions::CommunitySuggestionService;
