//! Cache contract used by the settings store.
//!
//! Cached values are derived state. An implementation may drop or expire any
//! entry at any time, and a cache that never stores anything is legal.

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::fmt::Debug;
use std::time::Duration;

use crate::prelude::*;

/// Default entry lifetime: one day
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(24 * 60 * 60);

/// Options applied to every cache write the store performs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
	/// `None` keeps entries until they are evicted or cleared
	pub expires_in: Option<Duration>,
}

impl CacheOptions {
	pub fn expires_in(expires_in: Duration) -> Self {
		Self { expires_in: Some(expires_in) }
	}

	pub fn never_expire() -> Self {
		Self { expires_in: None }
	}
}

impl Default for CacheOptions {
	fn default() -> Self {
		Self { expires_in: Some(DEFAULT_EXPIRES_IN) }
	}
}

#[async_trait]
pub trait CacheAdapter: Debug + Send + Sync {
	async fn read(&self, key: &str) -> SrResult<Option<SettingValue>>;

	async fn write(&self, key: &str, value: &SettingValue, opts: &CacheOptions) -> SrResult<()>;

	/// Returns `true` if an entry was removed
	async fn delete(&self, key: &str) -> SrResult<bool>;

	async fn clear(&self) -> SrResult<()>;

	/// Returns the cached value, or awaits `compute` and caches its result.
	///
	/// A `None` result is returned as-is and not cached.
	async fn fetch<'a>(
		&self,
		key: &str,
		opts: &CacheOptions,
		compute: BoxFuture<'a, SrResult<Option<SettingValue>>>,
	) -> SrResult<Option<SettingValue>> {
		if let Some(value) = self.read(key).await? {
			debug!("Cache hit: {}", key);
			return Ok(Some(value));
		}

		let value = compute.await?;
		if let Some(value) = &value {
			self.write(key, value, opts).await?;
		}
		Ok(value)
	}
}


// vim: ts=4
