//! Session-scoped onboarding state.
//!
//! Owns the step / profile-field / tooltip collections for the signed-in
//! user, applies the mutation rules (monotonic flags, the required-field
//! cascade) and persists through the device key-value store. Constructed on
//! sign-in, dropped on sign-out; nothing bleeds across accounts.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use tx_core::ids::UserId;
use tx_core::onboarding::{
    onboarding_key, progress, seed, tooltip_key, tooltips, OnboardingSnapshot, OnboardingStep,
    ProfileField, TooltipRecord, TooltipSnapshot, ONBOARDING_SCHEMA_VERSION,
};
use tx_core::ports::{ClockPort, KeyValueStorePort};

struct Collections {
    steps: Vec<OnboardingStep>,
    profile_fields: Vec<ProfileField>,
    tooltips: Vec<TooltipRecord>,
}

/// Per-session owner of the onboarding collections.
///
/// Mutators update memory first, then await the corresponding write and
/// return its outcome. In-memory state stays authoritative for the session
/// even when a write fails; the failure is logged here, so callers are free
/// to drop the returned error. The internal mutex is held across the write,
/// which serializes persistence per user in issue order: two overlapping
/// mutations can never land on disk out of order.
pub struct OnboardingService {
    user_id: UserId,
    store: Arc<dyn KeyValueStorePort>,
    clock: Arc<dyn ClockPort>,
    state: Mutex<Collections>,
}

impl OnboardingService {
    /// Load the user's persisted collections.
    ///
    /// A record that is missing, unreadable or fails shape validation falls
    /// back wholesale to the default seeds, with no partial merge of legacy
    /// shapes. Read failures are logged and swallowed; the session runs on
    /// the seeds.
    pub async fn load(
        user_id: UserId,
        store: Arc<dyn KeyValueStorePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let (steps, profile_fields) = load_record(&user_id, store.as_ref()).await;
        let tooltips = load_tooltips(&user_id, store.as_ref()).await;
        Self {
            user_id,
            store,
            clock,
            state: Mutex::new(Collections {
                steps,
                profile_fields,
                tooltips,
            }),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    // === Read accessors, derived from the live collections on every call ===

    pub async fn steps(&self) -> Vec<OnboardingStep> {
        self.state.lock().await.steps.clone()
    }

    pub async fn profile_fields(&self) -> Vec<ProfileField> {
        self.state.lock().await.profile_fields.clone()
    }

    pub async fn tooltips(&self) -> Vec<TooltipRecord> {
        self.state.lock().await.tooltips.clone()
    }

    /// Profile completion percentage, 0..=100.
    pub async fn completion(&self) -> u8 {
        progress::completion(&self.state.lock().await.profile_fields)
    }

    /// Incomplete profile fields in seed order.
    pub async fn incomplete_fields(&self) -> Vec<ProfileField> {
        let st = self.state.lock().await;
        progress::incomplete_fields(&st.profile_fields)
            .into_iter()
            .cloned()
            .collect()
    }

    /// The next field the profile card points at, in seed order.
    pub async fn next_incomplete_field(&self) -> Option<ProfileField> {
        let st = self.state.lock().await;
        progress::next_incomplete_field(&st.profile_fields).cloned()
    }

    /// The one tooltip to show now, optionally restricted to a screen.
    pub async fn active_tooltip(&self, screen: Option<&str>) -> Option<TooltipRecord> {
        let st = self.state.lock().await;
        tooltips::active_tooltip(&st.tooltips, screen).cloned()
    }

    // === Mutators ===

    /// Mark a step completed. Idempotent: an already-complete or unknown id
    /// changes nothing and issues no write.
    pub async fn complete_step(&self, step_id: &str) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        if !mark_step_complete(&mut st.steps, step_id) {
            return Ok(());
        }
        debug!(user = %self.user_id, step = step_id, "onboarding step completed");
        self.persist_record(&st).await
    }

    /// Mark a profile field completed, then cascade: once every required
    /// field is complete, the `complete_profile` step is forced in the same
    /// in-memory update and the same write. Optional fields never gate the
    /// cascade.
    pub async fn complete_profile_field(&self, field_id: &str) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        let changed = mark_field_complete(&mut st.profile_fields, field_id);
        let cascaded = progress::required_complete(&st.profile_fields)
            && mark_step_complete(&mut st.steps, seed::STEP_COMPLETE_PROFILE);
        if !changed && !cascaded {
            return Ok(());
        }
        if cascaded {
            debug!(user = %self.user_id, "required profile fields complete, completing profile step");
        }
        self.persist_record(&st).await
    }

    /// Mark everything done: all steps completed, all tooltips shown.
    ///
    /// Both snapshots are written from this one call, steps first. The pair
    /// is not a transaction; a crash between the two writes can leave disk
    /// inconsistent until the next successful write.
    pub async fn skip_onboarding(&self) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        for step in &mut st.steps {
            step.completed = true;
        }
        tooltips::mark_all_shown(&mut st.tooltips, None);
        debug!(user = %self.user_id, "onboarding skipped");
        let record = self.persist_record(&st).await;
        let tips = self.persist_tooltips(&st).await;
        record.and(tips)
    }

    /// Restore all three collections to the default seeds and delete the
    /// persisted records.
    pub async fn reset_onboarding(&self) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        st.steps = seed::default_steps();
        st.profile_fields = seed::default_profile_fields();
        st.tooltips = seed::default_tooltips();
        debug!(user = %self.user_id, "onboarding reset to defaults");
        let record = self.store.remove(&onboarding_key(&self.user_id)).await;
        let tips = self.store.remove(&tooltip_key(&self.user_id)).await;
        if let Err(e) = record.as_ref().and(tips.as_ref()) {
            warn!(user = %self.user_id, error = %e, "removing persisted onboarding records failed");
        }
        record.and(tips)
    }

    /// Mark one tooltip shown. A second dismissal of the same id is a no-op
    /// and issues no write.
    pub async fn dismiss_tooltip(&self, tooltip_id: &str) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        if !tooltips::mark_shown(&mut st.tooltips, tooltip_id) {
            return Ok(());
        }
        self.persist_tooltips(&st).await
    }

    /// Mark every tooltip for `screen` shown, or all of them when no filter
    /// is given.
    pub async fn skip_all_tooltips(&self, screen: Option<&str>) -> anyhow::Result<()> {
        let mut st = self.state.lock().await;
        if tooltips::mark_all_shown(&mut st.tooltips, screen) == 0 {
            return Ok(());
        }
        self.persist_tooltips(&st).await
    }

    // === Persistence ===

    async fn persist_record(&self, st: &Collections) -> anyhow::Result<()> {
        let snapshot = OnboardingSnapshot {
            schema_version: ONBOARDING_SCHEMA_VERSION,
            updated_at_ms: self.clock.now_ms(),
            steps: st.steps.clone(),
            profile_fields: st.profile_fields.clone(),
        };
        let raw = serde_json::to_string(&snapshot)?;
        let result = self.store.set(&onboarding_key(&self.user_id), &raw).await;
        if let Err(e) = &result {
            warn!(
                user = %self.user_id,
                error = %e,
                "persisting onboarding record failed; in-memory state remains authoritative"
            );
        }
        result
    }

    async fn persist_tooltips(&self, st: &Collections) -> anyhow::Result<()> {
        let snapshot = TooltipSnapshot {
            schema_version: ONBOARDING_SCHEMA_VERSION,
            updated_at_ms: self.clock.now_ms(),
            tooltips: st.tooltips.clone(),
        };
        let raw = serde_json::to_string(&snapshot)?;
        let result = self.store.set(&tooltip_key(&self.user_id), &raw).await;
        if let Err(e) = &result {
            warn!(
                user = %self.user_id,
                error = %e,
                "persisting tooltips failed; in-memory state remains authoritative"
            );
        }
        result
    }
}

async fn load_record(
    user: &UserId,
    store: &dyn KeyValueStorePort,
) -> (Vec<OnboardingStep>, Vec<ProfileField>) {
    let seeds = || (seed::default_steps(), seed::default_profile_fields());
    match store.get(&onboarding_key(user)).await {
        Ok(Some(raw)) => match serde_json::from_str::<OnboardingSnapshot>(&raw) {
            Ok(snapshot) if snapshot.is_valid() => (snapshot.steps, snapshot.profile_fields),
            Ok(_) => {
                warn!(user = %user, "persisted onboarding record failed validation, reseeding");
                seeds()
            }
            Err(e) => {
                warn!(user = %user, error = %e, "persisted onboarding record unreadable, reseeding");
                seeds()
            }
        },
        Ok(None) => {
            debug!(user = %user, "no persisted onboarding record, seeding defaults");
            seeds()
        }
        Err(e) => {
            warn!(user = %user, error = %e, "reading onboarding record failed, using defaults");
            seeds()
        }
    }
}

async fn load_tooltips(user: &UserId, store: &dyn KeyValueStorePort) -> Vec<TooltipRecord> {
    match store.get(&tooltip_key(user)).await {
        Ok(Some(raw)) => match serde_json::from_str::<TooltipSnapshot>(&raw) {
            Ok(snapshot) if snapshot.is_valid() => snapshot.tooltips,
            Ok(_) => {
                warn!(user = %user, "persisted tooltips failed validation, reseeding");
                seed::default_tooltips()
            }
            Err(e) => {
                warn!(user = %user, error = %e, "persisted tooltips unreadable, reseeding");
                seed::default_tooltips()
            }
        },
        Ok(None) => seed::default_tooltips(),
        Err(e) => {
            warn!(user = %user, error = %e, "reading tooltips failed, using defaults");
            seed::default_tooltips()
        }
    }
}

fn mark_step_complete(steps: &mut [OnboardingStep], id: &str) -> bool {
    match steps.iter_mut().find(|s| s.id == id) {
        Some(step) if !step.completed => {
            step.completed = true;
            true
        }
        _ => false,
    }
}

fn mark_field_complete(fields: &mut [ProfileField], id: &str) -> bool {
    match fields.iter_mut().find(|f| f.id == id) {
        Some(field) if !field.completed => {
            field.completed = true;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;

    struct MockKvStore {
        entries: StdMutex<HashMap<String, String>>,
        writes: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl MockKvStore {
        fn new() -> Self {
            Self {
                entries: StdMutex::new(HashMap::new()),
                writes: AtomicUsize::new(0),
                fail_writes: AtomicBool::new(false),
            }
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        fn raw(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn put_raw(&self, key: &str, value: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[async_trait]
    impl KeyValueStorePort for MockKvStore {
        async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct FixedClock;

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            1_700_000_000_000
        }
    }

    async fn service(store: Arc<MockKvStore>) -> OnboardingService {
        OnboardingService::load(UserId::new("u1"), store, Arc::new(FixedClock)).await
    }

    #[tokio::test]
    async fn test_load_seeds_when_store_is_empty() {
        let svc = service(Arc::new(MockKvStore::new())).await;
        assert_eq!(svc.steps().await.len(), seed::default_steps().len());
        assert_eq!(svc.completion().await, 0);
        assert!(svc.active_tooltip(None).await.is_some());
    }

    #[tokio::test]
    async fn test_load_reseeds_on_corrupt_record() {
        let store = Arc::new(MockKvStore::new());
        store.put_raw("onboarding_u1", "{not json");
        store.put_raw("tooltips_u1", r#"{"schema_version":99,"updated_at_ms":0,"tooltips":[]}"#);
        let svc = service(store).await;
        assert!(svc.steps().await.iter().all(|s| !s.completed));
        assert!(svc.tooltips().await.iter().all(|t| !t.shown));
    }

    #[tokio::test]
    async fn test_complete_step_is_idempotent_and_writes_once() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;

        svc.complete_step(seed::STEP_JOIN_CIRCLE).await.unwrap();
        let after_first = store.raw("onboarding_u1").expect("record persisted");
        assert_eq!(store.write_count(), 1);

        svc.complete_step(seed::STEP_JOIN_CIRCLE).await.unwrap();
        assert_eq!(store.write_count(), 1, "second call must not write");
        assert_eq!(store.raw("onboarding_u1").unwrap(), after_first);

        // unknown ids are a quiet no-op as well
        svc.complete_step("no_such_step").await.unwrap();
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_required_cascade_completes_profile_step() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;

        svc.complete_profile_field("full_name").await.unwrap();
        svc.complete_profile_field("email").await.unwrap();
        let steps = svc.steps().await;
        assert!(!steps.iter().any(|s| s.id == seed::STEP_COMPLETE_PROFILE && s.completed));

        svc.complete_profile_field("phone_number").await.unwrap();
        let steps = svc.steps().await;
        assert!(steps.iter().any(|s| s.id == seed::STEP_COMPLETE_PROFILE && s.completed));
        // 3 of 8 fields: optionals remain, completion stays below 100
        assert_eq!(svc.completion().await, 38);

        // the cascade landed in the same persisted write
        let raw = store.raw("onboarding_u1").unwrap();
        let snapshot: OnboardingSnapshot = serde_json::from_str(&raw).unwrap();
        assert!(snapshot
            .steps
            .iter()
            .any(|s| s.id == seed::STEP_COMPLETE_PROFILE && s.completed));
    }

    #[tokio::test]
    async fn test_optional_fields_never_gate_the_cascade() {
        let svc = service(Arc::new(MockKvStore::new())).await;
        for id in ["profile_photo", "occupation", "home_country"] {
            svc.complete_profile_field(id).await.unwrap();
        }
        let steps = svc.steps().await;
        assert!(!steps.iter().any(|s| s.id == seed::STEP_COMPLETE_PROFILE && s.completed));
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_authoritative() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;
        store.fail_writes(true);

        let result = svc.complete_step(seed::STEP_JOIN_CIRCLE).await;
        assert!(result.is_err(), "write failure surfaces to the caller");
        // ...but the session state moved forward regardless
        assert!(svc
            .steps()
            .await
            .iter()
            .any(|s| s.id == seed::STEP_JOIN_CIRCLE && s.completed));
    }

    #[tokio::test]
    async fn test_skip_onboarding_persists_both_collections() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;
        svc.skip_onboarding().await.unwrap();

        assert!(svc.steps().await.iter().all(|s| s.completed));
        assert_eq!(svc.active_tooltip(None).await, None);

        let record: OnboardingSnapshot =
            serde_json::from_str(&store.raw("onboarding_u1").unwrap()).unwrap();
        assert!(record.steps.iter().all(|s| s.completed));
        let tips: TooltipSnapshot =
            serde_json::from_str(&store.raw("tooltips_u1").unwrap()).unwrap();
        assert!(tips.tooltips.iter().all(|t| t.shown));
    }

    #[tokio::test]
    async fn test_reset_restores_seeds_and_deletes_records() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;
        svc.skip_onboarding().await.unwrap();

        svc.reset_onboarding().await.unwrap();
        assert_eq!(svc.completion().await, 0);
        assert!(svc.steps().await.iter().all(|s| !s.completed));
        assert!(svc.active_tooltip(None).await.is_some());
        assert_eq!(store.raw("onboarding_u1"), None);
        assert_eq!(store.raw("tooltips_u1"), None);
    }

    #[tokio::test]
    async fn test_dismiss_tooltip_advances_by_derivation() {
        let store = Arc::new(MockKvStore::new());
        let svc = service(store.clone()).await;

        let first = svc.active_tooltip(Some("Dashboard")).await.unwrap();
        svc.dismiss_tooltip(&first.id).await.unwrap();
        let second = svc.active_tooltip(Some("Dashboard")).await.unwrap();
        assert_ne!(first.id, second.id);

        let writes = store.write_count();
        svc.dismiss_tooltip(&first.id).await.unwrap();
        assert_eq!(store.write_count(), writes, "re-dismissal issues no write");
    }

    #[tokio::test]
    async fn test_state_survives_reload_from_store() {
        let store = Arc::new(MockKvStore::new());
        {
            let svc = service(store.clone()).await;
            svc.complete_profile_field("full_name").await.unwrap();
            svc.dismiss_tooltip("dashboard_balance").await.unwrap();
        }
        // a fresh session for the same user picks the record back up
        let svc = service(store).await;
        assert_eq!(svc.completion().await, 13); // 1 of 8 -> 12.5 -> 13
        assert_ne!(
            svc.active_tooltip(Some("Dashboard")).await.unwrap().id,
            "dashboard_balance"
        );
    }
}
