//! Community suggestions.
//!
//! The scoring strategy sits behind a trait so the shipped fixed seed can be
//! swapped for a real scorer without touching the screens.

use serde::{Deserialize, Serialize};

use crate::ids::{CommunityId, UserId};

/// One suggested community, ranked by `match_score` (0..=100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedCommunity {
    pub id: CommunityId,
    pub name: String,
    pub icon: String,
    /// Human-readable explanation shown under the suggestion.
    pub reason: String,
    pub member_count: u32,
    pub category: String,
    pub match_score: u8,
}

/// User attributes the scorer ranks against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub home_country: Option<String>,
    pub preferred_language: Option<String>,
}

/// Scoring strategy behind community suggestions.
pub trait CommunityScorer: Send + Sync {
    fn score(&self, profile: &UserProfile) -> Vec<SuggestedCommunity>;
}

/// Fixed seed list standing in for a real scorer. Returns the same ranked
/// list regardless of the profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedScorer;

impl CommunityScorer for SeedScorer {
    fn score(&self, _profile: &UserProfile) -> Vec<SuggestedCommunity> {
        fn suggestion(
            id: &str,
            name: &str,
            icon: &str,
            reason: &str,
            member_count: u32,
            category: &str,
            match_score: u8,
        ) -> SuggestedCommunity {
            SuggestedCommunity {
                id: CommunityId::new(id),
                name: name.to_string(),
                icon: icon.to_string(),
                reason: reason.to_string(),
                member_count,
                category: category.to_string(),
                match_score,
            }
        }

        vec![
            suggestion(
                "naija_houston",
                "Nigerians in Houston",
                "🇳🇬",
                "Popular with savers from your home country",
                2140,
                "Diaspora",
                92,
            ),
            suggestion(
                "family_remitters",
                "Family Remitters",
                "💸",
                "Members send money home on a schedule like yours",
                1675,
                "Remittance",
                87,
            ),
            suggestion(
                "first_gen_savers",
                "First-Gen Savers",
                "🌱",
                "New savers building their first emergency fund",
                980,
                "Savings",
                81,
            ),
            suggestion(
                "lagos_techies_abroad",
                "Lagos Techies Abroad",
                "💻",
                "Professionals saving toward big goals together",
                640,
                "Career",
                74,
            ),
            suggestion(
                "accra_home_builders",
                "Accra Home Builders",
                "🏠",
                "Long-horizon circles saving for land and housing",
                420,
                "Goals",
                66,
            ),
        ]
    }
}
