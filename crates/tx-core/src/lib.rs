//! # tx-core
//!
//! Core domain models and business logic for Tandaxn.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: the invite link codec, the onboarding collections and their
//! derivations, community suggestions, and the port traits the application
//! layer is wired through.

// Public module exports
pub mod community;
pub mod config;
pub mod ids;
pub mod invite;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::LinkConfig;
pub use ids::{CircleId, CommunityId, UserId};
pub use invite::{CircleInvite, CommunityInvite, InviteData};
