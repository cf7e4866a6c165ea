//! Invite flow use cases
//!
//! The flow across these use cases:
//!
//! ```text
//! OS hands over a URL
//!       ↓
//! OpenInviteLink ── NotAnInvite ──► normal routing
//!       │
//!       ├── ShowInvite ──────────► invite preview screen
//!       │                               │
//!       └── AuthRequired ─► sign-up ─► ResumePendingInvite
//!                                        │
//!                              AcceptInvite / DeclineInvite
//! ```
//!
//! The pending slot is cleared exactly once, by `AcceptInvite` on success or
//! by `DeclineInvite`, never by a failed join.

pub mod accept_invite;
pub mod decline_invite;
pub mod open_invite_link;
pub mod resume_pending_invite;
pub mod share_invite;

pub use accept_invite::AcceptInvite;
pub use decline_invite::DeclineInvite;
pub use open_invite_link::{OpenInviteLink, OpenInviteOutcome};
pub use resume_pending_invite::ResumePendingInvite;
pub use share_invite::ShareInvite;
