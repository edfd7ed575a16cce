//! Typed persistence adapter over the keyed store. Holds the three keys the
//! wizard owns: the serialized document, the completion sentinel, and the
//! last-saved timestamp.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::document::completeness::is_complete;
use crate::errors::AppError;
use crate::models::document::ResumeDocument;
use crate::profile::ProfileSource;
use crate::storage::kv::KeyValueStore;

pub const RESUME_DATA_KEY: &str = "resumeData";
pub const RESUME_COMPLETE_KEY: &str = "resumeComplete";
pub const RESUME_SAVED_AT_KEY: &str = "resumeSavedAt";

const COMPLETE_SENTINEL: &str = "true";

pub struct ResumeStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ResumeStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Reads the saved document. Absent key means no save yet; a present but
    /// undecodable value is a storage error.
    pub fn load(&self) -> Result<Option<ResumeDocument>, AppError> {
        let Some(raw) = self
            .kv
            .get(RESUME_DATA_KEY)
            .map_err(|e| AppError::Storage(e.to_string()))?
        else {
            return Ok(None);
        };
        let doc = serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("stored resume is not valid JSON: {e}")))?;
        Ok(Some(doc))
    }

    /// Serializes the document under `resumeData`, unconditionally
    /// overwriting any prior value, and refreshes the completion sentinel to
    /// match the document as saved. The caller's in-memory document is never
    /// touched, so a failed write loses nothing.
    pub fn save(&self, doc: &ResumeDocument) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Storage(format!("could not serialize resume: {e}")))?;
        self.kv
            .set(RESUME_DATA_KEY, &raw)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        if is_complete(doc) {
            self.kv
                .set(RESUME_COMPLETE_KEY, COMPLETE_SENTINEL)
                .map_err(|e| AppError::Storage(e.to_string()))?;
        } else {
            self.kv
                .remove(RESUME_COMPLETE_KEY)
                .map_err(|e| AppError::Storage(e.to_string()))?;
        }

        self.kv
            .set(RESUME_SAVED_AT_KEY, &Utc::now().to_rfc3339())
            .map_err(|e| AppError::Storage(e.to_string()))?;

        info!("saved resume (complete: {})", is_complete(doc));
        Ok(())
    }

    pub fn is_marked_complete(&self) -> bool {
        matches!(self.kv.get(RESUME_COMPLETE_KEY), Ok(Some(v)) if v == COMPLETE_SENTINEL)
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.kv.get(RESUME_SAVED_AT_KEY).ok().flatten()?;
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// The document the wizard opens with: a previously saved document if one
/// exists, else an empty document prefilled from the profile source when one
/// is configured and reachable, else empty. Profile failures fall back
/// silently; an undecodable saved document is logged and treated as absent
/// rather than killing the session.
pub async fn load_initial(
    store: &ResumeStore,
    profile: Option<&Arc<dyn ProfileSource>>,
) -> ResumeDocument {
    match store.load() {
        Ok(Some(doc)) => {
            info!("loaded saved resume");
            return doc;
        }
        Ok(None) => {}
        Err(e) => warn!("ignoring unreadable saved resume: {e}"),
    }

    if let Some(source) = profile {
        match source.fetch_identity().await {
            Ok(identity) => {
                info!("prefilled resume from user profile");
                return ResumeDocument::prefilled(&identity);
            }
            Err(e) => warn!("profile prefetch failed, starting empty: {e}"),
        }
    }

    ResumeDocument::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::document::skills::add_skill;
    use crate::models::user::UserIdentity;
    use crate::profile::ProfileError;
    use crate::storage::kv::{FileStore, MemoryStore};

    fn memory_store() -> ResumeStore {
        ResumeStore::new(Arc::new(MemoryStore::new()))
    }

    fn complete_document() -> ResumeDocument {
        let mut doc = ResumeDocument::new();
        doc.personal_info.name = "Ana".to_string();
        doc.personal_info.email = "a@x.com".to_string();
        doc.personal_info.phone = "9800000000".to_string();
        doc.education[0].degree = "BSc CS".to_string();
        add_skill(&mut doc.skills, "React");
        doc
    }

    struct FakeProfile(Result<UserIdentity, ()>);

    #[async_trait]
    impl ProfileSource for FakeProfile {
        async fn fetch_identity(&self) -> Result<UserIdentity, ProfileError> {
            match &self.0 {
                Ok(identity) => Ok(identity.clone()),
                Err(()) => Err(ProfileError::Status(503)),
            }
        }
    }

    #[test]
    fn test_round_trip_yields_deep_equal_document() {
        let store = memory_store();
        let doc = complete_document();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), Some(doc));
    }

    #[test]
    fn test_load_without_save_is_none() {
        assert_eq!(memory_store().load().unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let store = memory_store();
        store.save(&complete_document()).unwrap();
        let mut second = complete_document();
        second.personal_info.name = "Bina".to_string();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap().unwrap().personal_info.name, "Bina");
    }

    #[test]
    fn test_complete_sentinel_set_only_when_invariant_holds() {
        let store = memory_store();
        store.save(&ResumeDocument::new()).unwrap();
        assert!(!store.is_marked_complete());

        store.save(&complete_document()).unwrap();
        assert!(store.is_marked_complete());

        // Saving an incomplete document again clears the flag.
        store.save(&ResumeDocument::new()).unwrap();
        assert!(!store.is_marked_complete());
    }

    #[test]
    fn test_save_records_timestamp() {
        let store = memory_store();
        assert!(store.last_saved_at().is_none());
        store.save(&complete_document()).unwrap();
        assert!(store.last_saved_at().is_some());
    }

    #[test]
    fn test_corrupt_stored_document_is_a_storage_error() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(RESUME_DATA_KEY, "not json").unwrap();
        let store = ResumeStore::new(kv);
        assert!(matches!(store.load(), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(Arc::new(FileStore::new(dir.path()).unwrap()));
        let doc = complete_document();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), Some(doc));
        assert!(store.is_marked_complete());
    }

    #[tokio::test]
    async fn test_load_initial_prefers_saved_document() {
        let store = memory_store();
        let saved = complete_document();
        store.save(&saved).unwrap();
        let profile: Arc<dyn ProfileSource> = Arc::new(FakeProfile(Ok(UserIdentity {
            name: "Someone Else".to_string(),
            email: String::new(),
            phone: String::new(),
        })));
        let doc = load_initial(&store, Some(&profile)).await;
        assert_eq!(doc, saved);
    }

    #[tokio::test]
    async fn test_load_initial_prefills_from_profile() {
        let store = memory_store();
        let profile: Arc<dyn ProfileSource> = Arc::new(FakeProfile(Ok(UserIdentity {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            phone: "98".to_string(),
        })));
        let doc = load_initial(&store, Some(&profile)).await;
        assert_eq!(doc.personal_info.name, "Ana");
        assert_eq!(doc.education.len(), 1);
    }

    #[tokio::test]
    async fn test_load_initial_falls_back_on_profile_failure() {
        let store = memory_store();
        let profile: Arc<dyn ProfileSource> = Arc::new(FakeProfile(Err(())));
        let doc = load_initial(&store, Some(&profile)).await;
        assert!(doc.personal_info.name.is_empty());
        assert_eq!(doc.education.len(), 1);
        assert!(doc.skills.is_empty());
    }

    #[tokio::test]
    async fn test_load_initial_without_profile_source() {
        let store = memory_store();
        let doc = load_initial(&store, None).await;
        assert!(doc.personal_info.name.is_empty());
        assert_eq!(doc.education.len(), 1);
    }

    #[tokio::test]
    async fn test_load_initial_ignores_corrupt_saved_data() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(RESUME_DATA_KEY, "{broken").unwrap();
        let store = ResumeStore::new(kv);
        let doc = load_initial(&store, None).await;
        assert!(doc.personal_info.name.is_empty());
    }
}
