//! Tandaxn application orchestration layer.
//!
//! Session-scoped state services and the use cases screens call into.
//! Everything here is wired through the `tx-core` ports; no infrastructure
//! leaks in.

pub mod deps;
pub mod state;
pub mod usecases;

pub use state::{CommunitySuggestionService, OnboardingService, PendingInviteStore};
