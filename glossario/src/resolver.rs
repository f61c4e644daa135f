//! Read-through cache over the three tiers.

use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    generate::{GenerateError, TermGenerator},
    model::TermRecord,
    normalize::normalize,
    seed_data::seed_lookup,
    store::TermStore,
};

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("termo não encontrado em nenhuma camada")]
    NotFound,

    #[error("geração falhou: {0}")]
    Generation(#[from] GenerateError),
}

/// Outcome of a successful resolution. `write_back` is present exactly
/// when a freshly generated record is being persisted on a detached
/// task; callers that need read-your-writes (the seeder, tests) may
/// await it, everyone else drops it.
pub struct Resolution {
    pub record: TermRecord,
    pub write_back: Option<JoinHandle<()>>,
}

pub struct Resolver {
    store: Option<Arc<dyn TermStore>>,
    generator: Option<Arc<dyn TermGenerator>>,
}

impl Resolver {
    pub fn new(
        store: Option<Arc<dyn TermStore>>,
        generator: Option<Arc<dyn TermGenerator>>,
    ) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> Option<&Arc<dyn TermStore>> {
        self.store.as_ref()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolves a raw term through store → seed → generation, in that
    /// order, short-circuiting on the first hit. Store failures are soft:
    /// logged and skipped, never surfaced. A generation failure is
    /// terminal; [`ResolveError::NotFound`] means every available tier
    /// was exhausted.
    pub async fn resolve(&self, raw: &str) -> Result<Resolution, ResolveError> {
        let id = normalize(raw);

        if let Some(store) = &self.store {
            match store.fetch(&id).await {
                Ok(Some(record)) => {
                    return Ok(Resolution {
                        record,
                        write_back: None,
                    })
                }
                Ok(None) => {}
                Err(e) => warn!("Store lookup for \"{id}\" failed, falling through: {e}"),
            }
        }

        // Seed tier keys on the raw lower-cased text, not the slug.
        if let Some(record) = seed_lookup(raw) {
            return Ok(Resolution {
                record,
                write_back: None,
            });
        }

        let Some(generator) = &self.generator else {
            return Err(ResolveError::NotFound);
        };

        let record = generator.generate(raw.trim()).await?.into_record(id);

        let write_back = self.store.as_ref().map(|store| {
            let store = Arc::clone(store);
            let record = record.clone();

            tokio::spawn(async move {
                if let Err(e) = store.insert(&record).await {
                    warn!("Write-back for \"{}\" failed: {e}", record.id);
                }
            })
        });

        Ok(Resolution { record, write_back })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_record, FakeGenerator, FakeStore};

    fn resolver(store: Option<Arc<FakeStore>>, generator: Option<Arc<FakeGenerator>>) -> Resolver {
        Resolver::new(
            store.map(|s| s as Arc<dyn TermStore>),
            generator.map(|g| g as Arc<dyn TermGenerator>),
        )
    }

    #[tokio::test]
    async fn test_store_hit_wins_unchanged() {
        let store = Arc::new(FakeStore::with(sample_record("api", "API do estoque")));
        let generator = Arc::new(FakeGenerator::ok());
        let resolver = resolver(Some(store.clone()), Some(generator.clone()));

        let resolution = resolver.resolve("API").await.unwrap();

        assert_eq!(resolution.record.term, "API do estoque");
        assert!(resolution.write_back.is_none());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_seed_hit_skips_generation() {
        let generator = Arc::new(FakeGenerator::ok());
        let resolver = resolver(None, Some(generator.clone()));

        let resolution = resolver.resolve("  Deploy ").await.unwrap();

        assert_eq!(resolution.record.id, "deploy");
        assert!(resolution.write_back.is_none());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_store_error_falls_through_to_seed() {
        let store = Arc::new(FakeStore {
            fail_fetch: true,
            ..FakeStore::empty()
        });
        let resolver = resolver(Some(store.clone()), None);

        let resolution = resolver.resolve("API").await.unwrap();

        assert_eq!(resolution.record.id, "api");
        assert_eq!(store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_generated_id_is_always_the_slug() {
        let resolver = resolver(None, Some(Arc::new(FakeGenerator::ok())));

        let resolution = resolver.resolve("React JS").await.unwrap();

        assert_eq!(resolution.record.id, "react-js");
        assert_eq!(resolution.record.term, "React JS");
    }

    #[tokio::test]
    async fn test_generation_write_back_lands_in_store() {
        let store = Arc::new(FakeStore::empty());
        let resolver = resolver(Some(store.clone()), Some(Arc::new(FakeGenerator::ok())));

        let resolution = resolver.resolve("Kubernetes").await.unwrap();
        resolution.write_back.unwrap().await.unwrap();

        assert_eq!(store.insert_count(), 1);
        assert!(store
            .records
            .lock()
            .unwrap()
            .contains_key("kubernetes"));
    }

    #[tokio::test]
    async fn test_write_back_failure_does_not_affect_result() {
        let store = Arc::new(FakeStore {
            fail_insert: true,
            ..FakeStore::empty()
        });
        let resolver = resolver(Some(store.clone()), Some(Arc::new(FakeGenerator::ok())));

        let resolution = resolver.resolve("Kubernetes").await.unwrap();
        resolution.write_back.unwrap().await.unwrap();

        assert_eq!(resolution.record.id, "kubernetes");
        assert_eq!(store.insert_count(), 1);
    }

    #[tokio::test]
    async fn test_no_write_back_without_store() {
        let resolver = resolver(None, Some(Arc::new(FakeGenerator::ok())));

        let resolution = resolver.resolve("Kubernetes").await.unwrap();

        assert!(resolution.write_back.is_none());
    }

    #[tokio::test]
    async fn test_generation_failure_is_terminal() {
        let resolver = resolver(None, Some(Arc::new(FakeGenerator::failing())));

        assert!(matches!(
            resolver.resolve("Kubernetes").await,
            Err(ResolveError::Generation(_))
        ));
    }

    #[tokio::test]
    async fn test_all_tiers_exhausted_is_not_found() {
        let resolver = resolver(None, None);

        assert!(matches!(
            resolver.resolve("Kubernetes").await,
            Err(ResolveError::NotFound)
        ));
    }
}
