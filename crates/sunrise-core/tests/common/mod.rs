//! Shared helpers for settings store tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sunrise_core::cache_adapter::CacheAdapter;
use sunrise_core::settings::{MemoryCache, SettingsConfig, SettingsDefaults, SettingsStore};
use sunrise_core::settings_adapter::{SettingsAdapter, validate_var};
use sunrise_types::prelude::*;

/// In-memory backend that counts the calls it receives
#[derive(Debug, Default)]
pub struct RecordingAdapter {
	records: parking_lot::Mutex<Vec<SettingRecord>>,
	reads: AtomicUsize,
	saves: AtomicUsize,
}

impl RecordingAdapter {
	pub fn reads(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn saves(&self) -> usize {
		self.saves.load(Ordering::SeqCst)
	}

	pub fn len(&self) -> usize {
		self.records.lock().len()
	}

	/// Store a raw record without going through the settings store
	pub fn insert_raw(&self, target: Target, var: &str, value: SettingValue) {
		let now = Timestamp::now();
		self.records.lock().push(SettingRecord {
			target,
			var: var.into(),
			value,
			created_at: now,
			updated_at: now,
		});
	}
}

#[async_trait]
impl SettingsAdapter for RecordingAdapter {
	async fn read_setting(&self, target: &Target, var: &str) -> SrResult<Option<SettingRecord>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		Ok(self.records.lock().iter().find(|r| &r.target == target && &*r.var == var).cloned())
	}

	async fn list_settings(
		&self,
		target: &Target,
		prefix: Option<&str>,
	) -> SrResult<Vec<SettingRecord>> {
		let condition = SettingCondition {
			target: Some(target.clone()),
			var_prefix: prefix.map(Into::into),
		};
		Ok(self
			.records
			.lock()
			.iter()
			.filter(|r| condition.matches(&r.target, &r.var))
			.cloned()
			.collect())
	}

	async fn save_setting(
		&self,
		target: &Target,
		var: &str,
		value: &SettingValue,
	) -> SrResult<SettingRecord> {
		validate_var(var)?;
		self.saves.fetch_add(1, Ordering::SeqCst);

		let now = Timestamp::now();
		let mut records = self.records.lock();
		if let Some(record) = records.iter_mut().find(|r| &r.target == target && &*r.var == var) {
			record.value = value.clone();
			record.updated_at = now;
			return Ok(record.clone());
		}

		let record = SettingRecord {
			target: target.clone(),
			var: var.into(),
			value: value.clone(),
			created_at: now,
			updated_at: now,
		};
		records.push(record.clone());
		Ok(record)
	}

	async fn delete_setting(&self, target: &Target, var: &str) -> SrResult<bool> {
		let mut records = self.records.lock();
		let before = records.len();
		records.retain(|r| !(&r.target == target && &*r.var == var));
		Ok(records.len() != before)
	}

	async fn delete_settings(&self, condition: &SettingCondition) -> SrResult<u64> {
		let mut records = self.records.lock();
		let before = records.len();
		records.retain(|r| !condition.matches(&r.target, &r.var));
		Ok((before - records.len()) as u64)
	}
}

pub struct TestEnv {
	pub adapter: Arc<RecordingAdapter>,
	pub cache: Arc<MemoryCache>,
	pub store: SettingsStore,
}

/// Global store over a fresh in-memory backend and memory cache
pub fn create_test_store(defaults: SettingValue) -> TestEnv {
	setup_test_logging();

	let mut builder = SettingsDefaults::builder();
	builder.register_json(defaults).expect("Failed to register defaults");

	let adapter = Arc::new(RecordingAdapter::default());
	let cache = Arc::new(MemoryCache::new(100));
	let config = SettingsConfig::builder()
		.defaults(builder.freeze())
		.cache(Arc::clone(&cache) as Arc<dyn CacheAdapter>)
		.adapter(Arc::clone(&adapter) as Arc<dyn SettingsAdapter>)
		.build()
		.expect("Failed to build settings config");

	TestEnv { adapter, cache, store: SettingsStore::new(config) }
}

/// Common test setup helper
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

// vim: ts=4
