//! Business logic use cases
//!
//! A flow gets its own use case when the user or the system has to make
//! another decision in between; pure derivations stay in `tx-core`.

pub mod invite;

pub use invite::{
    AcceptInvite, DeclineInvite, OpenInviteLink, OpenInviteOutcome, ResumePendingInvite,
    ShareInvite,
};
