//! Membership port
//!
//! Joining circles and communities is backend domain logic; the core treats
//! it as a black-box call that either succeeds or fails with a reason.

use async_trait::async_trait;
use thiserror::Error;

use crate::ids::{CircleId, CommunityId};

#[derive(Debug, Error)]
pub enum JoinError {
    /// The backend refused the join (full circle, revoked invite, ...).
    #[error("join rejected: {0}")]
    Rejected(String),

    /// Transport failure; the same request may succeed on retry.
    #[error("network error: {0}")]
    Network(String),
}

impl JoinError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[async_trait]
pub trait MembershipPort: Send + Sync {
    async fn join_circle(&self, id: &CircleId) -> Result<(), JoinError>;

    async fn join_community(&self, id: &CommunityId) -> Result<(), JoinError>;
}
