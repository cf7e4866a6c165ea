//! Default seed collections for a newly signed-in user.

use super::{OnboardingStep, ProfileField, TooltipPosition, TooltipRecord};

/// Completed by the required-field cascade, never directly by the user.
pub const STEP_COMPLETE_PROFILE: &str = "complete_profile";
/// Completed by a successful circle join.
pub const STEP_JOIN_CIRCLE: &str = "join_circle";
pub const STEP_ADD_PAYMENT_METHOD: &str = "add_payment_method";
pub const STEP_FIRST_CONTRIBUTION: &str = "first_contribution";
/// Completed by a successful community join.
pub const STEP_EXPLORE_COMMUNITIES: &str = "explore_communities";

pub fn default_steps() -> Vec<OnboardingStep> {
    fn step(id: &str, title: &str, description: &str, target_action: &str, order: u32) -> OnboardingStep {
        OnboardingStep {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            target_action: target_action.to_string(),
            completed: false,
            order,
        }
    }

    vec![
        step(
            STEP_COMPLETE_PROFILE,
            "Complete your profile",
            "Add your name and contact details so circle members know who you are.",
            "open_profile",
            1,
        ),
        step(
            STEP_JOIN_CIRCLE,
            "Join your first circle",
            "Accept an invite or start a savings circle with people you trust.",
            "open_circles",
            2,
        ),
        step(
            STEP_ADD_PAYMENT_METHOD,
            "Add a payment method",
            "Link a card or bank account to fund your contributions.",
            "open_payment_methods",
            3,
        ),
        step(
            STEP_FIRST_CONTRIBUTION,
            "Make your first contribution",
            "Put in your first round and watch the pot grow.",
            "open_wallet",
            4,
        ),
        step(
            STEP_EXPLORE_COMMUNITIES,
            "Explore communities",
            "Find savers from your city or your home country.",
            "open_communities",
            5,
        ),
    ]
}

pub fn default_profile_fields() -> Vec<ProfileField> {
    fn field(id: &str, label: &str, required: bool, target_screen: &str) -> ProfileField {
        ProfileField {
            id: id.to_string(),
            label: label.to_string(),
            completed: false,
            required,
            target_screen: target_screen.to_string(),
        }
    }

    vec![
        field("full_name", "Full name", true, "EditProfile"),
        field("email", "Email address", true, "EditProfile"),
        field("phone_number", "Phone number", true, "VerifyPhone"),
        field("profile_photo", "Profile photo", false, "EditProfile"),
        field("country_of_residence", "Country of residence", false, "EditProfile"),
        field("home_country", "Home country", false, "EditProfile"),
        field("occupation", "Occupation", false, "EditProfile"),
        field("preferred_language", "Preferred language", false, "LanguageSettings"),
    ]
}

pub fn default_tooltips() -> Vec<TooltipRecord> {
    fn tooltip(
        id: &str,
        target_ref: &str,
        title: &str,
        message: &str,
        position: TooltipPosition,
        screen: &str,
        order: u32,
    ) -> TooltipRecord {
        TooltipRecord {
            id: id.to_string(),
            target_ref: target_ref.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            position,
            screen: screen.to_string(),
            shown: false,
            order,
        }
    }

    vec![
        tooltip(
            "dashboard_balance",
            "dashboard.balance_card",
            "Your balance",
            "Everything you have saved across circles, in one place.",
            TooltipPosition::Bottom,
            "Dashboard",
            1,
        ),
        tooltip(
            "dashboard_quick_send",
            "dashboard.quick_send",
            "Send money home",
            "Send to family in two taps, straight from your balance.",
            TooltipPosition::Bottom,
            "Dashboard",
            2,
        ),
        tooltip(
            "circles_create",
            "circles.create_button",
            "Start a circle",
            "Create a tanda and set the contribution schedule.",
            TooltipPosition::Top,
            "Circles",
            3,
        ),
        tooltip(
            "circles_invite",
            "circles.invite_button",
            "Invite members",
            "Share a link; anyone who taps it lands in your circle.",
            TooltipPosition::Top,
            "Circles",
            4,
        ),
        tooltip(
            "wallet_add_funds",
            "wallet.add_funds",
            "Top up",
            "Add funds before your contribution date so rounds never slip.",
            TooltipPosition::Right,
            "Wallet",
            5,
        ),
        tooltip(
            "rewards_streak",
            "rewards.streak_banner",
            "Keep your streak",
            "On-time contributions earn rewards points every round.",
            TooltipPosition::Left,
            "Rewards",
            6,
        ),
    ]
}
