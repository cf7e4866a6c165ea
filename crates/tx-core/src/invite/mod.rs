//! Invite domain model
//!
//! A shareable reference to a savings circle or a community, carrying the
//! inviter and enough display metadata to render a preview before joining.
//! Invites are decoded once at the URL boundary ([`link`]) and travel through
//! the rest of the system as this tagged type, never as loose query strings.

pub mod link;
pub mod share;

use serde::{Deserialize, Serialize};

use crate::ids::{CircleId, CommunityId, UserId};

/// Invite to a savings circle.
///
/// `contribution_amount` and `frequency` describe the circle's schedule and
/// only exist for circles. Optional fields are a definite value or absent,
/// never NaN and never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleInvite {
    pub id: CircleId,
    pub name: String,
    pub emoji: String,
    pub invited_by: UserId,
    pub inviter_name: String,
    pub contribution_amount: Option<f64>,
    pub frequency: Option<String>,
    pub member_count: Option<u32>,
}

/// Invite to a community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityInvite {
    pub id: CommunityId,
    pub name: String,
    pub icon: String,
    pub invited_by: UserId,
    pub inviter_name: String,
    pub member_count: Option<u32>,
}

/// A decoded invite, tagged by what it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InviteData {
    Circle(CircleInvite),
    Community(CommunityInvite),
}

impl InviteData {
    /// Display name of the invited-to circle or community.
    pub fn name(&self) -> &str {
        match self {
            Self::Circle(c) => &c.name,
            Self::Community(c) => &c.name,
        }
    }

    /// Display name of the person who sent the invite.
    pub fn inviter_name(&self) -> &str {
        match self {
            Self::Circle(c) => &c.inviter_name,
            Self::Community(c) => &c.inviter_name,
        }
    }

    pub fn invited_by(&self) -> &UserId {
        match self {
            Self::Circle(c) => &c.invited_by,
            Self::Community(c) => &c.invited_by,
        }
    }
}
