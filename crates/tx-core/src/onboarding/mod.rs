//! Onboarding domain models
//!
//! Checklist steps, profile fields and contextual tooltips for the
//! getting-started experience. Collections are seeded per user (see [`seed`])
//! and only ever move forward: `completed` and `shown` flags are monotonic
//! except through a full reset.

pub mod progress;
pub mod seed;
pub mod tooltips;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Version of the persisted snapshot shapes. A mismatch is treated as a
/// legacy shape: the loader falls back wholesale to the seeds, no partial
/// merge.
pub const ONBOARDING_SCHEMA_VERSION: u32 = 1;

/// One checklist item in the getting-started sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Action the screen dispatches when the step is tapped.
    pub target_action: String,
    pub completed: bool,
    /// Unique total order across the seeded collection.
    pub order: u32,
}

/// One field of the profile-completion checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileField {
    pub id: String,
    pub label: String,
    pub completed: bool,
    /// Required fields gate the `complete_profile` cascade; never changes at
    /// runtime.
    pub required: bool,
    /// Screen the user is sent to when tapping the field.
    pub target_screen: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// One contextual hint anchored to a screen element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipRecord {
    pub id: String,
    /// Anchor reference the screen resolves to a widget.
    pub target_ref: String,
    pub title: String,
    pub message: String,
    pub position: TooltipPosition,
    pub screen: String,
    /// Monotonic false→true, except through a full reset.
    pub shown: bool,
    pub order: u32,
}

/// Persisted per-user pair of steps and profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSnapshot {
    pub schema_version: u32,
    /// Milliseconds since the Unix epoch at write time.
    pub updated_at_ms: i64,
    pub steps: Vec<OnboardingStep>,
    pub profile_fields: Vec<ProfileField>,
}

/// Persisted per-user tooltip collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSnapshot {
    pub schema_version: u32,
    pub updated_at_ms: i64,
    pub tooltips: Vec<TooltipRecord>,
}

impl OnboardingSnapshot {
    /// A snapshot is usable only as a whole. A wrong version, an empty
    /// collection, or a duplicated id or order means the caller reseeds.
    pub fn is_valid(&self) -> bool {
        self.schema_version == ONBOARDING_SCHEMA_VERSION
            && !self.steps.is_empty()
            && !self.profile_fields.is_empty()
            && unique(self.steps.iter().map(|s| s.id.as_str()))
            && unique(self.steps.iter().map(|s| s.order))
            && unique(self.profile_fields.iter().map(|f| f.id.as_str()))
    }
}

impl TooltipSnapshot {
    pub fn is_valid(&self) -> bool {
        self.schema_version == ONBOARDING_SCHEMA_VERSION
            && !self.tooltips.is_empty()
            && unique(self.tooltips.iter().map(|t| t.id.as_str()))
            && unique(self.tooltips.iter().map(|t| t.order))
    }
}

fn unique<T: std::hash::Hash + Eq>(items: impl Iterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

/// Store key for the per-user onboarding record.
pub fn onboarding_key(user: &UserId) -> String {
    format!("onboarding_{}", user)
}

/// Store key for the per-user tooltip collection.
pub fn tooltip_key(user: &UserId) -> String {
    format!("tooltips_{}", user)
}
