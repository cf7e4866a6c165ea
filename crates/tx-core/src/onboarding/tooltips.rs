//! Tooltip sequencing.
//!
//! The active tooltip is derived on every call from the record list; there is
//! no stored "current index" to desynchronize. Dismissing a tooltip advances
//! the sequence by itself because the next derivation no longer sees it.

use super::TooltipRecord;

/// The tooltip to show now: smallest `order` among the unshown records,
/// optionally restricted to one screen.
pub fn active_tooltip<'a>(
    records: &'a [TooltipRecord],
    screen: Option<&str>,
) -> Option<&'a TooltipRecord> {
    records
        .iter()
        .filter(|t| !t.shown)
        .filter(|t| screen.map_or(true, |s| t.screen == s))
        .min_by_key(|t| t.order)
}

/// Mark one tooltip shown.
///
/// Returns `false` when the id is unknown or the tooltip was already shown.
/// Dismissing twice as part of an "advance" action is a caller bug: the next
/// derivation has already advanced without any further call.
pub fn mark_shown(records: &mut [TooltipRecord], id: &str) -> bool {
    match records.iter_mut().find(|t| t.id == id) {
        Some(t) if !t.shown => {
            t.shown = true;
            true
        }
        _ => false,
    }
}

/// Mark every tooltip for `screen` shown, or all of them when no filter is
/// given. Returns how many were newly marked.
pub fn mark_all_shown(records: &mut [TooltipRecord], screen: Option<&str>) -> usize {
    let mut marked = 0;
    for t in records.iter_mut() {
        if !t.shown && screen.map_or(true, |s| t.screen == s) {
            t.shown = true;
            marked += 1;
        }
    }
    marked
}
