// src/services/variation_resolver.rs
// Order: override, cache, remote index, fallback. Products stay pinned to
// one variation for the cache's lifetime.

use crate::errors::StudioError;
use crate::models::{DisplayVariation, ResolvedDisplayImage};
use async_trait::async_trait;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Remote lookup of generated product imagery.
#[async_trait]
pub trait VariationIndex: Send + Sync {
    async fn find(
        &self,
        product_id: &str,
        category: &str,
        variation: DisplayVariation,
    ) -> Result<Option<String>, StudioError>;

    /// First hit among `choices`, in order.
    async fn find_any(
        &self,
        product_id: &str,
        category: &str,
        choices: &[DisplayVariation],
    ) -> Result<Option<(DisplayVariation, String)>, StudioError>;
}

#[derive(Debug, Clone)]
struct CachedImage {
    url: String,
    variation: DisplayVariation,
}

impl CachedImage {
    fn resolved(&self) -> ResolvedDisplayImage {
        ResolvedDisplayImage {
            url: self.url.clone(),
            is_loading: false,
            variation_type: Some(self.variation),
        }
    }
}

type CacheKey = (String, DisplayVariation, u64);

/// Session pins and remote hits. Owned by one resolver.
pub struct VariationCache {
    pins: HashMap<String, DisplayVariation>,
    entries: HashMap<CacheKey, CachedImage>,
    cache_buster: u64,
    rng: StdRng,
}

impl VariationCache {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            pins: HashMap::new(),
            entries: HashMap::new(),
            cache_buster: 0,
            rng,
        }
    }

    fn pin(&mut self, product_id: &str) -> DisplayVariation {
        if let Some(variation) = self.pins.get(product_id) {
            return *variation;
        }
        let variation = DisplayVariation::SESSION_CHOICES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DisplayVariation::Canvas);
        self.pins.insert(product_id.to_string(), variation);
        variation
    }

    fn key(&self, product_id: &str, variation: DisplayVariation) -> CacheKey {
        (product_id.to_string(), variation, self.cache_buster)
    }
}

pub struct ImageVariationResolver {
    index: Arc<dyn VariationIndex>,
    category: String,
    overrides: RwLock<HashMap<String, String>>,
    cache: Mutex<VariationCache>,
}

impl ImageVariationResolver {
    pub fn new(index: Arc<dyn VariationIndex>, category: impl Into<String>) -> Self {
        Self::with_cache(index, category, VariationCache::new())
    }

    pub fn with_cache(
        index: Arc<dyn VariationIndex>,
        category: impl Into<String>,
        cache: VariationCache,
    ) -> Self {
        Self {
            index,
            category: category.into(),
            overrides: RwLock::new(HashMap::new()),
            cache: Mutex::new(cache),
        }
    }

    pub async fn register_override(&self, product_id: &str, url: String) {
        debug!("Registered override for product {}", product_id);
        self.overrides
            .write()
            .await
            .insert(product_id.to_string(), url);
    }

    pub async fn resolve(&self, product_id: &str, fallback: &str) -> ResolvedDisplayImage {
        if let Some(resolved) = self.override_for(product_id).await {
            return resolved;
        }

        let (key, variation) = {
            let mut cache = self.cache.lock().await;
            let variation = cache.pin(product_id);
            let key = cache.key(product_id, variation);
            if let Some(hit) = cache.entries.get(&key) {
                return hit.resolved();
            }
            (key, variation)
        };

        // The lock is released while the index is queried.
        match self.fetch(product_id, variation).await {
            Some(image) => {
                let mut cache = self.cache.lock().await;
                // Drop results that straddled an invalidation.
                if cache.cache_buster == key.2 {
                    cache.entries.insert(key, image.clone());
                }
                image.resolved()
            }
            None => ResolvedDisplayImage {
                url: fallback.to_string(),
                is_loading: false,
                variation_type: None,
            },
        }
    }

    /// Answers without touching the index: an override or cached entry if one
    /// exists, otherwise the fallback flagged as still loading.
    pub async fn peek(&self, product_id: &str, fallback: &str) -> ResolvedDisplayImage {
        if let Some(resolved) = self.override_for(product_id).await {
            return resolved;
        }

        let mut cache = self.cache.lock().await;
        let variation = cache.pin(product_id);
        let key = cache.key(product_id, variation);
        match cache.entries.get(&key) {
            Some(hit) => hit.resolved(),
            None => ResolvedDisplayImage {
                url: fallback.to_string(),
                is_loading: true,
                variation_type: None,
            },
        }
    }

    /// Clears pins and cached entries. Returns the new cache buster.
    pub async fn invalidate(&self) -> u64 {
        let mut cache = self.cache.lock().await;
        cache.pins.clear();
        cache.entries.clear();
        cache.cache_buster += 1;
        info!(
            "Invalidated display image cache (buster {})",
            cache.cache_buster
        );
        cache.cache_buster
    }

    async fn override_for(&self, product_id: &str) -> Option<ResolvedDisplayImage> {
        self.overrides
            .read()
            .await
            .get(product_id)
            .map(|url| ResolvedDisplayImage {
                url: url.clone(),
                is_loading: false,
                variation_type: Some(DisplayVariation::Digital),
            })
    }

    async fn fetch(&self, product_id: &str, variation: DisplayVariation) -> Option<CachedImage> {
        match self.index.find(product_id, &self.category, variation).await {
            Ok(Some(url)) => return Some(CachedImage { url, variation }),
            Ok(None) => {}
            Err(e) => warn!(
                "Variation lookup failed for {} ({}): {}",
                product_id,
                variation.as_str(),
                e
            ),
        }

        match self
            .index
            .find_any(product_id, &self.category, &DisplayVariation::SESSION_CHOICES)
            .await
        {
            Ok(found) => found.map(|(variation, url)| CachedImage { url, variation }),
            Err(e) => {
                warn!("Fallback variation lookup failed for {}: {}", product_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeIndex {
        urls: StdMutex<HashMap<(String, DisplayVariation), String>>,
        lookups: AtomicUsize,
        broken: bool,
    }

    impl FakeIndex {
        fn with(entries: &[(&str, DisplayVariation, &str)]) -> Arc<Self> {
            let index = Self::default();
            for (product, variation, url) in entries {
                index.set(product, *variation, url);
            }
            Arc::new(index)
        }

        fn set(&self, product: &str, variation: DisplayVariation, url: &str) {
            self.urls
                .lock()
                .unwrap()
                .insert((product.to_string(), variation), url.to_string());
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VariationIndex for FakeIndex {
        async fn find(
            &self,
            product_id: &str,
            _category: &str,
            variation: DisplayVariation,
        ) -> Result<Option<String>, StudioError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.broken {
                return Err(StudioError::Redis("connection refused".to_string()));
            }
            Ok(self
                .urls
                .lock()
                .unwrap()
                .get(&(product_id.to_string(), variation))
                .cloned())
        }

        async fn find_any(
            &self,
            product_id: &str,
            _category: &str,
            choices: &[DisplayVariation],
        ) -> Result<Option<(DisplayVariation, String)>, StudioError> {
            if self.broken {
                return Err(StudioError::Redis("connection refused".to_string()));
            }
            let urls = self.urls.lock().unwrap();
            Ok(choices.iter().find_map(|v| {
                urls.get(&(product_id.to_string(), *v))
                    .map(|url| (*v, url.clone()))
            }))
        }
    }

    fn every_variation(product: &str) -> Arc<FakeIndex> {
        FakeIndex::with(&[
            (product, DisplayVariation::Canvas, "https://cdn/canvas.png"),
            (product, DisplayVariation::Unframed, "https://cdn/unframed.png"),
            (product, DisplayVariation::Framed, "https://cdn/framed.png"),
        ])
    }

    fn resolver(index: Arc<FakeIndex>) -> ImageVariationResolver {
        ImageVariationResolver::with_cache(index, "affirmations", VariationCache::with_seed(7))
    }

    #[tokio::test]
    async fn pinned_variation_is_stable() {
        let resolver = resolver(every_variation("p1"));
        let first = resolver.resolve("p1", "/fallback.png").await;
        assert!(first.variation_type.is_some());
        for _ in 0..10 {
            assert_eq!(resolver.resolve("p1", "/fallback.png").await, first);
        }
    }

    #[tokio::test]
    async fn override_wins_without_remote_lookup() {
        let index = every_variation("p1");
        let resolver = resolver(index.clone());
        resolver
            .register_override("p1", "/overrides/digital/p1.png".to_string())
            .await;

        let resolved = resolver.resolve("p1", "/fallback.png").await;
        assert_eq!(resolved.url, "/overrides/digital/p1.png");
        assert_eq!(resolved.variation_type, Some(DisplayVariation::Digital));
        assert_eq!(index.lookups(), 0);
    }

    #[tokio::test]
    async fn override_registered_after_cache_still_wins() {
        let index = every_variation("p1");
        let resolver = resolver(index.clone());
        let cached = resolver.resolve("p1", "/fallback.png").await;
        assert!(cached.url.starts_with("https://cdn/"));

        resolver
            .register_override("p1", "/overrides/digital/p1.png".to_string())
            .await;

        for resolved in [
            resolver.resolve("p1", "/fallback.png").await,
            resolver.peek("p1", "/fallback.png").await,
        ] {
            assert_eq!(resolved.url, "/overrides/digital/p1.png");
            assert_eq!(resolved.variation_type, Some(DisplayVariation::Digital));
        }
        assert_eq!(index.lookups(), 1);
    }

    #[tokio::test]
    async fn missing_session_variation_uses_any_other() {
        let index = FakeIndex::with(&[("p1", DisplayVariation::Framed, "https://cdn/framed.png")]);
        let resolver = resolver(index);
        let resolved = resolver.resolve("p1", "/fallback.png").await;
        assert_eq!(resolved.url, "https://cdn/framed.png");
        assert_eq!(resolved.variation_type, Some(DisplayVariation::Framed));
    }

    #[tokio::test]
    async fn no_imagery_returns_static_fallback() {
        let resolver = resolver(FakeIndex::with(&[]));
        let resolved = resolver.resolve("p1", "/fallback.png").await;
        assert_eq!(
            resolved,
            ResolvedDisplayImage {
                url: "/fallback.png".to_string(),
                is_loading: false,
                variation_type: None,
            }
        );
    }

    #[tokio::test]
    async fn index_errors_degrade_to_fallback() {
        let index = Arc::new(FakeIndex {
            broken: true,
            ..Default::default()
        });
        let resolved = resolver(index).resolve("p1", "/fallback.png").await;
        assert_eq!(resolved.url, "/fallback.png");
    }

    #[tokio::test]
    async fn hits_are_served_from_cache() {
        let index = every_variation("p1");
        let resolver = resolver(index.clone());
        resolver.resolve("p1", "/fallback.png").await;
        resolver.resolve("p1", "/fallback.png").await;
        assert_eq!(index.lookups(), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let index = FakeIndex::with(&[
            ("p1", DisplayVariation::Canvas, "v1"),
            ("p1", DisplayVariation::Unframed, "v1"),
            ("p1", DisplayVariation::Framed, "v1"),
        ]);
        let resolver = resolver(index.clone());
        assert_eq!(resolver.resolve("p1", "/fallback.png").await.url, "v1");

        for variation in DisplayVariation::SESSION_CHOICES {
            index.set("p1", variation, "v2");
        }
        assert_eq!(resolver.resolve("p1", "/fallback.png").await.url, "v1");

        assert_eq!(resolver.invalidate().await, 1);
        assert_eq!(resolver.resolve("p1", "/fallback.png").await.url, "v2");
        assert_eq!(index.lookups(), 2);
    }

    #[tokio::test]
    async fn peek_reports_loading_until_resolved() {
        let resolver = resolver(every_variation("p1"));
        let before = resolver.peek("p1", "/fallback.png").await;
        assert!(before.is_loading);
        assert_eq!(before.url, "/fallback.png");

        let resolved = resolver.resolve("p1", "/fallback.png").await;
        let after = resolver.peek("p1", "/fallback.png").await;
        assert_eq!(after, resolved);
        assert!(!after.is_loading);
    }
}
