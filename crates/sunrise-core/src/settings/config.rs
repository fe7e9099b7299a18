//! Shared configuration of settings stores

use std::sync::Arc;

use sunrise_types::cache_adapter::{CacheAdapter, CacheOptions};
use sunrise_types::settings_adapter::SettingsAdapter;

use super::cache::NullCache;
use super::defaults::SettingsDefaults;
use crate::prelude::*;

/// Everything a `SettingsStore` needs besides its target.
///
/// Built once and shared through `Arc` by all stores derived from it.
#[derive(Debug)]
pub struct SettingsConfig {
	pub defaults: Arc<SettingsDefaults>,
	pub cache: Arc<dyn CacheAdapter>,
	/// Applied to every cache fetch and write
	pub cache_options: CacheOptions,
	pub adapter: Arc<dyn SettingsAdapter>,
}

impl SettingsConfig {
	pub fn builder() -> SettingsConfigBuilder {
		SettingsConfigBuilder::new()
	}
}

pub struct SettingsConfigBuilder {
	defaults: Option<Arc<SettingsDefaults>>,
	cache: Option<Arc<dyn CacheAdapter>>,
	cache_options: CacheOptions,
	adapter: Option<Arc<dyn SettingsAdapter>>,
}

impl SettingsConfigBuilder {
	pub fn new() -> Self {
		Self { defaults: None, cache: None, cache_options: CacheOptions::default(), adapter: None }
	}

	pub fn defaults(&mut self, defaults: SettingsDefaults) -> &mut Self {
		self.defaults = Some(Arc::new(defaults));
		self
	}

	pub fn shared_defaults(&mut self, defaults: Arc<SettingsDefaults>) -> &mut Self {
		self.defaults = Some(defaults);
		self
	}

	pub fn cache(&mut self, cache: Arc<dyn CacheAdapter>) -> &mut Self {
		self.cache = Some(cache);
		self
	}

	pub fn cache_options(&mut self, cache_options: CacheOptions) -> &mut Self {
		self.cache_options = cache_options;
		self
	}

	pub fn adapter(&mut self, adapter: Arc<dyn SettingsAdapter>) -> &mut Self {
		self.adapter = Some(adapter);
		self
	}

	pub fn build(&mut self) -> SrResult<Arc<SettingsConfig>> {
		let adapter = self
			.adapter
			.take()
			.ok_or_else(|| Error::ConfigError("Settings adapter is required".into()))?;
		let cache = self.cache.take().unwrap_or_else(|| Arc::new(NullCache));
		let defaults = self.defaults.take().unwrap_or_default();

		debug!(
			"Settings config: {} defaults, cache_options={:?}",
			defaults.len(),
			self.cache_options
		);

		Ok(Arc::new(SettingsConfig {
			defaults,
			cache,
			cache_options: self.cache_options.clone(),
			adapter,
		}))
	}
}

impl Default for SettingsConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
