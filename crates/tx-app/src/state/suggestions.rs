//! Dismissible community suggestion list.

use std::sync::Mutex;

use tx_core::community::{CommunityScorer, SuggestedCommunity, UserProfile};
use tx_core::ids::CommunityId;

/// Ranked suggestions for the current user.
///
/// The list is materialized once per session from the configured scorer and
/// kept sorted descending by match score. Dismissal is in-memory only; a
/// dismissed suggestion comes back after a restart.
pub struct CommunitySuggestionService {
    suggestions: Mutex<Vec<SuggestedCommunity>>,
}

impl CommunitySuggestionService {
    pub fn new(scorer: &dyn CommunityScorer, profile: &UserProfile) -> Self {
        let mut list = scorer.score(profile);
        list.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Self {
            suggestions: Mutex::new(list),
        }
    }

    /// Current list, best match first.
    pub fn suggestions(&self) -> Vec<SuggestedCommunity> {
        self.suggestions.lock().unwrap().clone()
    }

    /// Remove one suggestion from the current list. Unknown ids are a no-op.
    pub fn dismiss(&self, id: &CommunityId) {
        self.suggestions.lock().unwrap().retain(|s| &s.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tx_core::community::SeedScorer;
    use tx_core::ids::UserId;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: UserId::new("u1"),
            display_name: "Amara".to_string(),
            home_country: Some("NG".to_string()),
            preferred_language: None,
        }
    }

    #[test]
    fn test_list_is_sorted_by_match_score_descending() {
        let service = CommunitySuggestionService::new(&SeedScorer, &profile());
        let scores: Vec<_> = service.suggestions().iter().map(|s| s.match_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_dismiss_removes_in_memory_only() {
        let service = CommunitySuggestionService::new(&SeedScorer, &profile());
        let first = service.suggestions()[0].clone();
        service.dismiss(&first.id);
        assert!(service.suggestions().iter().all(|s| s.id != first.id));

        // dismissing something unknown changes nothing
        let len = service.suggestions().len();
        service.dismiss(&CommunityId::new("nope"));
        assert_eq!(service.suggestions().len(), len);

        // a fresh session re-materializes the full list
        let fresh = CommunitySuggestionService::new(&SeedScorer, &profile());
        assert!(fresh.suggestions().iter().any(|s| s.id == first.id));
    }
}
