//! Single-slot holder for an invite that is waiting on authentication.

use std::sync::Mutex;

use tx_core::invite::InviteData;

/// At most one invite is outstanding at a time; storing a new one silently
/// replaces the previous (last-write-wins, no queue).
///
/// The slot is app-scoped (it has to exist before the user is signed in)
/// and is cleared exactly once by whichever screen consumes the invite,
/// after a successful join or an explicit decline. It is never cleared on
/// unrelated navigation or on a failed join, so a retry does not need the
/// original link.
#[derive(Debug, Default)]
pub struct PendingInviteStore {
    slot: Mutex<Option<InviteData>>,
}

impl PendingInviteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash `invite`, replacing any previous one.
    pub fn set(&self, invite: InviteData) {
        *self.slot.lock().unwrap() = Some(invite);
    }

    /// Current invite, if any. Does not consume the slot.
    pub fn get(&self) -> Option<InviteData> {
        self.slot.lock().unwrap().clone()
    }

    /// Drop the outstanding invite.
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }

    pub fn is_set(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }
}
