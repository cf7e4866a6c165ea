//! Share-message builders.
//!
//! Pure text assembly for the OS share sheet; the actual sharing happens
//! behind `SharePort`.

use super::InviteData;

/// One-line message for the share sheet, ending with the invite link.
pub fn invite_message(invite: &InviteData, link: &str) -> String {
    match invite {
        InviteData::Circle(c) => format!(
            "{} invited you to join the {} savings circle on Tandaxn. Tap to join: {}",
            c.inviter_name, c.name, link
        ),
        InviteData::Community(c) => format!(
            "{} invited you to join the {} community on Tandaxn. Tap to join: {}",
            c.inviter_name, c.name, link
        ),
    }
}

/// Subject line for share targets that take one (mail, some messengers).
pub fn share_subject(invite: &InviteData) -> String {
    format!("Join {} on Tandaxn", invite.name())
}
