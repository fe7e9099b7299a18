//! Cache implementations for the settings store

use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use sunrise_types::cache_adapter::{CacheAdapter, CacheOptions};

use crate::prelude::*;

/// Cache that never stores anything, so every fetch computes
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCache;

#[async_trait]
impl CacheAdapter for NullCache {
	async fn read(&self, _key: &str) -> SrResult<Option<SettingValue>> {
		Ok(None)
	}

	async fn write(&self, _key: &str, _value: &SettingValue, _opts: &CacheOptions) -> SrResult<()> {
		Ok(())
	}

	async fn delete(&self, _key: &str) -> SrResult<bool> {
		Ok(false)
	}

	async fn clear(&self) -> SrResult<()> {
		Ok(())
	}
}

#[derive(Debug)]
struct CacheEntry {
	value: SettingValue,
	expires_at: Option<Instant>,
}

impl CacheEntry {
	fn is_expired(&self, now: Instant) -> bool {
		self.expires_at.is_some_and(|at| now >= at)
	}
}

/// In-process LRU cache with per-entry expiry
#[derive(Debug, Clone)]
pub struct MemoryCache {
	cache: Arc<parking_lot::Mutex<LruCache<Box<str>, CacheEntry>>>,
}

impl MemoryCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
		Self { cache: Arc::new(parking_lot::Mutex::new(LruCache::new(capacity))) }
	}

	/// Number of entries currently held, including expired ones not yet dropped
	pub fn len(&self) -> usize {
		self.cache.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.lock().is_empty()
	}
}

#[async_trait]
impl CacheAdapter for MemoryCache {
	async fn read(&self, key: &str) -> SrResult<Option<SettingValue>> {
		let mut cache = self.cache.lock();
		match cache.get(key) {
			None => return Ok(None),
			Some(entry) if !entry.is_expired(Instant::now()) => return Ok(Some(entry.value.clone())),
			Some(_) => {}
		}

		// expired
		cache.pop(key);
		Ok(None)
	}

	async fn write(&self, key: &str, value: &SettingValue, opts: &CacheOptions) -> SrResult<()> {
		let expires_at = opts.expires_in.and_then(|d| Instant::now().checked_add(d));
		self.cache.lock().put(key.into(), CacheEntry { value: value.clone(), expires_at });
		Ok(())
	}

	async fn delete(&self, key: &str) -> SrResult<bool> {
		Ok(self.cache.lock().pop(key).is_some())
	}

	async fn clear(&self) -> SrResult<()> {
		self.cache.lock().clear();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::time::Duration;

	#[tokio::test]
	async fn test_null_cache_always_computes() {
		let cache = NullCache;
		cache.write("k", &json!(1), &CacheOptions::default()).await.expect("write");
		assert_eq!(cache.read("k").await.expect("read"), None);

		let value = cache
			.fetch("k", &CacheOptions::default(), Box::pin(async { Ok(Some(json!(2))) }))
			.await
			.expect("fetch");
		assert_eq!(value, Some(json!(2)));
	}

	#[tokio::test]
	async fn test_memory_cache_read_write_delete() {
		let cache = MemoryCache::new(10);
		let opts = CacheOptions::default();

		cache.write("a", &json!("x"), &opts).await.expect("write");
		assert_eq!(cache.read("a").await.expect("read"), Some(json!("x")));

		assert!(cache.delete("a").await.expect("delete"));
		assert!(!cache.delete("a").await.expect("delete again"));
		assert_eq!(cache.read("a").await.expect("read"), None);
	}

	#[tokio::test]
	async fn test_memory_cache_expiry() {
		let cache = MemoryCache::new(10);

		cache.write("gone", &json!(1), &CacheOptions::expires_in(Duration::ZERO)).await.expect("write");
		cache.write("kept", &json!(2), &CacheOptions::never_expire()).await.expect("write");

		assert_eq!(cache.read("gone").await.expect("read"), None);
		assert_eq!(cache.read("kept").await.expect("read"), Some(json!(2)));
		// Expired entries are dropped on read
		assert_eq!(cache.len(), 1);
	}

	#[tokio::test]
	async fn test_memory_cache_lru_eviction() {
		let cache = MemoryCache::new(2);
		let opts = CacheOptions::default();

		cache.write("a", &json!(1), &opts).await.expect("write");
		cache.write("b", &json!(2), &opts).await.expect("write");
		// Touch "a" so "b" becomes least recently used
		cache.read("a").await.expect("read");
		cache.write("c", &json!(3), &opts).await.expect("write");

		assert_eq!(cache.read("b").await.expect("read"), None);
		assert_eq!(cache.read("a").await.expect("read"), Some(json!(1)));
		assert_eq!(cache.read("c").await.expect("read"), Some(json!(3)));
	}

	#[tokio::test]
	async fn test_memory_cache_clear() {
		let cache = MemoryCache::new(0);
		cache.write("a", &json!(1), &CacheOptions::default()).await.expect("write");
		assert_eq!(cache.len(), 1);

		cache.clear().await.expect("clear");
		assert!(cache.is_empty());
	}
}

// vim: ts=4
