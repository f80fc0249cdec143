//! Bounded memoization in front of a [`MetadataLookup`].

use std::num::NonZeroUsize;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use data_loader::MovieId;

use crate::{EnrichmentError, MetadataLookup, MovieDetails};

/// Memoizes successful lookups in an LRU cache of fixed capacity.
///
/// Failures are never cached. The lock is not held while the inner lookup
/// is in flight, so two concurrent misses on the same id may both fetch.
pub struct CachedLookup<L> {
    inner: L,
    cache: Mutex<LruCache<MovieId, MovieDetails>>,
}

impl<L: MetadataLookup> CachedLookup<L> {
    pub fn new(inner: L, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cache.lock().await.is_empty()
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: MetadataLookup> MetadataLookup for CachedLookup<L> {
    async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, EnrichmentError> {
        if let Some(hit) = self.cache.lock().await.get(&movie_id) {
            debug!(movie_id, "Details cache hit");
            return Ok(hit.clone());
        }

        let details = self.inner.fetch_details(movie_id).await?;
        self.cache.lock().await.put(movie_id, details.clone());
        Ok(details)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls; fails for ids listed in `failing`
    #[derive(Default)]
    struct CountingLookup {
        calls: AtomicUsize,
        failing: Vec<MovieId>,
    }

    #[async_trait]
    impl MetadataLookup for CountingLookup {
        async fn fetch_details(&self, movie_id: MovieId) -> Result<MovieDetails, EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(&movie_id) {
                return Err(EnrichmentError::UnexpectedStatus {
                    movie_id,
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(MovieDetails {
                poster_path: Some(format!("/{movie_id}.jpg")),
                vote_average: Some(7.0),
                overview: None,
            })
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn capacity(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn test_repeat_lookups_hit_cache() {
        let cached = CachedLookup::new(CountingLookup::default(), capacity(8));

        let first = cached.fetch_details(603).await.unwrap();
        let second = cached.fetch_details(603).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.len().await, 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let lookup = CountingLookup {
            failing: vec![13],
            ..Default::default()
        };
        let cached = CachedLookup::new(lookup, capacity(8));

        assert!(cached.fetch_details(13).await.is_err());
        assert!(cached.fetch_details(13).await.is_err());

        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
        assert!(cached.is_empty().await);
    }

    #[tokio::test]
    async fn test_capacity_is_bounded() {
        let cached = CachedLookup::new(CountingLookup::default(), capacity(2));

        cached.fetch_details(1).await.unwrap();
        cached.fetch_details(2).await.unwrap();
        // Touch 1 so 2 becomes least recently used
        cached.fetch_details(1).await.unwrap();
        cached.fetch_details(3).await.unwrap();
        assert_eq!(cached.len().await, 2);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);

        // 1 survived, 2 was evicted
        cached.fetch_details(1).await.unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);
        cached.fetch_details(2).await.unwrap();
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 4);
    }
}
