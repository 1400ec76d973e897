//! Urgency escalation rules.
//!
//! Only movements towards closing are worth telling the user about; a tier
//! going back down (for example after the schedule changed) is silent.

use super::models::UrgencyTier;

pub fn is_escalation(old: UrgencyTier, new: UrgencyTier) -> bool {
    new > old
}

/// One-line notice for a tier change, or `None` when it is not worth one.
pub fn escalation_message(place_name: &str, old: UrgencyTier, new: UrgencyTier, label: &str) -> Option<String> {
    if !is_escalation(old, new) {
        return None;
    }

    let message = match new {
        UrgencyTier::Urgent => format!("{place_name} closes in {label}"),
        UrgencyTier::Warning => format!("{place_name} closes in {label}, plan accordingly"),
        UrgencyTier::Normal => return None,
    };
    Some(message)
}

/// Notice for a place whose countdown reached zero. Closing is not a tier
/// change (a place is already urgent by then), so it has its own message.
pub fn closed_message(place_name: &str) -> String {
    format!("{place_name} has closed")
}
