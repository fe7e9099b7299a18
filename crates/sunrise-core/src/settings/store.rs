//! Settings store with cache-aside reads, defaults, and mapping merges

use serde::de::DeserializeOwned;
use std::sync::Arc;

use sunrise_types::types::value_type_name;

use super::config::SettingsConfig;
use crate::prelude::*;

/// Settings of one target scope.
///
/// Cheap to clone: the configuration is shared.
#[derive(Debug, Clone)]
pub struct SettingsStore {
	config: Arc<SettingsConfig>,
	target: Target,
}

impl SettingsStore {
	/// Store for the global scope
	pub fn new(config: Arc<SettingsConfig>) -> Self {
		Self { config, target: Target::global() }
	}

	pub fn scoped(config: Arc<SettingsConfig>, target: Target) -> Self {
		Self { config, target }
	}

	/// Store for another target, sharing this store's configuration
	pub fn for_target(&self, target: Target) -> Self {
		Self { config: Arc::clone(&self.config), target }
	}

	pub fn target(&self) -> &Target {
		&self.target
	}

	pub fn config(&self) -> &Arc<SettingsConfig> {
		&self.config
	}

	/// Cache key of `var`: the present parts of (target id, target type, var) joined by "::".
	///
	/// Parts are not escaped, so a global name like `42::User::theme` shares its key
	/// with `theme` of `User#42`.
	pub fn cache_key(&self, var: &str) -> String {
		let mut parts: Vec<String> = Vec::with_capacity(3);
		if let Some(id) = self.target.id {
			parts.push(id.to_string());
		}
		if let Some(typ) = &self.target.typ {
			parts.push(typ.to_string());
		}
		parts.push(var.to_string());
		parts.join("::")
	}

	/// Get setting value: cache, then persisted record, then default.
	///
	/// An unknown name is not an error, it resolves to `None`.
	pub async fn get(&self, var: &str) -> SrResult<Option<SettingValue>> {
		let key = self.cache_key(var);
		self.config
			.cache
			.fetch(&key, &self.config.cache_options, Box::pin(self.load(var)))
			.await
	}

	async fn load(&self, var: &str) -> SrResult<Option<SettingValue>> {
		debug!("Setting cache miss: {} [{}]", var, self.target);
		match self.config.adapter.read_setting(&self.target, var).await? {
			Some(record) => Ok(Some(record.value)),
			None => Ok(self.config.defaults.get(var).cloned()),
		}
	}

	/// Type-safe getter, fails with `TypeMismatch` if the value doesn't deserialize into `T`
	pub async fn get_as<T: DeserializeOwned>(&self, var: &str) -> SrResult<Option<T>> {
		match self.get(var).await? {
			Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
				Error::TypeMismatch(format!("Setting '{}' has an unexpected type: {}", var, e))
			}),
			None => Ok(None),
		}
	}

	pub async fn get_string(&self, var: &str) -> SrResult<Option<String>> {
		match self.get(var).await? {
			Some(SettingValue::String(s)) => Ok(Some(s)),
			Some(v) => Err(Error::TypeMismatch(format!(
				"Setting '{}' is not a string, got {}",
				var,
				value_type_name(&v)
			))),
			None => Ok(None),
		}
	}

	pub async fn get_int(&self, var: &str) -> SrResult<Option<i64>> {
		match self.get(var).await? {
			Some(SettingValue::Number(n)) if n.is_i64() => Ok(n.as_i64()),
			Some(v) => Err(Error::TypeMismatch(format!(
				"Setting '{}' is not an integer, got {}",
				var,
				value_type_name(&v)
			))),
			None => Ok(None),
		}
	}

	pub async fn get_bool(&self, var: &str) -> SrResult<Option<bool>> {
		match self.get(var).await? {
			Some(SettingValue::Bool(b)) => Ok(Some(b)),
			Some(v) => Err(Error::TypeMismatch(format!(
				"Setting '{}' is not a boolean, got {}",
				var,
				value_type_name(&v)
			))),
			None => Ok(None),
		}
	}

	/// Set setting value. The cache is only updated once the backend accepted the write.
	pub async fn set(&self, var: &str, value: SettingValue) -> SrResult<SettingValue> {
		let record = self.config.adapter.save_setting(&self.target, var, &value).await?;
		self.config
			.cache
			.write(&self.cache_key(var), &record.value, &self.config.cache_options)
			.await?;

		info!("Setting '{}' updated [{}]", var, self.target);
		Ok(value)
	}

	/// Shallow-merge `partial` into a mapping-valued setting.
	///
	/// Writes only if the merged mapping differs from the current one.
	/// Returns the merged mapping either way.
	pub async fn merge(&self, var: &str, partial: SettingValue) -> SrResult<SettingValue> {
		let partial = match partial {
			SettingValue::Object(map) => map,
			other => {
				return Err(Error::InvalidArgument(format!(
					"Merge value for '{}' must be a mapping, got {}",
					var,
					value_type_name(&other)
				)));
			}
		};

		let current = match self.get(var).await? {
			None | Some(SettingValue::Null) => serde_json::Map::new(),
			Some(SettingValue::Object(map)) => map,
			Some(other) => {
				return Err(Error::TypeMismatch(format!(
					"Existing value of '{}' is {}, not a mapping, can't merge",
					var,
					value_type_name(&other)
				)));
			}
		};

		let mut merged = current.clone();
		merged.extend(partial);
		let merged = SettingValue::Object(merged);

		if merged == SettingValue::Object(current) {
			debug!("Setting '{}' unchanged by merge [{}]", var, self.target);
		} else {
			self.set(var, merged.clone()).await?;
		}

		Ok(merged)
	}

	/// Destroy the record of `var` and evict its cache entry
	pub async fn destroy(&self, var: &str) -> SrResult<()> {
		if !self.config.adapter.delete_setting(&self.target, var).await? {
			return Err(Error::SettingNotFound(var.to_string()));
		}
		self.config.cache.delete(&self.cache_key(var)).await?;

		info!("Setting '{}' destroyed [{}]", var, self.target);
		Ok(())
	}

	/// All settings of this target (optionally only names starting with `prefix`),
	/// persisted values overriding defaults
	pub async fn all(&self, prefix: Option<&str>) -> SrResult<SettingsMap> {
		let prefix = prefix.filter(|p| !p.is_empty());
		let mut result = self.config.defaults.to_map(prefix);

		for record in self.config.adapter.list_settings(&self.target, prefix).await? {
			result.insert(record.var.into(), record.value);
		}

		Ok(result)
	}

	/// Set every pair, then clear the whole cache.
	///
	/// Stops at the first failing write. The cache is cleared in that case too, and
	/// the write error is returned even if clearing fails as well.
	pub async fn update<I, K>(&self, attrs: I) -> SrResult<()>
	where
		I: IntoIterator<Item = (K, SettingValue)>,
		K: AsRef<str>,
	{
		let mut res = Ok(());
		let mut count = 0usize;
		for (var, value) in attrs {
			if let Err(err) = self.set(var.as_ref(), value).await {
				warn!("Bulk update stopped at '{}': {}", var.as_ref(), err);
				res = Err(err);
				break;
			}
			count += 1;
		}

		let cleared = self.config.cache.clear().await;
		info!("Bulk update wrote {} settings [{}], cache cleared", count, self.target);
		match (res, cleared) {
			(Err(err), Err(clear_err)) => {
				warn!("Cache clear after failed bulk update also failed: {}", clear_err);
				Err(err)
			}
			(res, cleared) => res.and(cleared),
		}
	}

	/// Clear the whole cache, then delete every record matching `condition`
	pub async fn delete_all(&self, condition: &SettingCondition) -> SrResult<u64> {
		self.config.cache.clear().await?;
		let deleted = self.config.adapter.delete_settings(condition).await?;

		info!("Deleted {} settings matching {:?}", deleted, condition);
		Ok(deleted)
	}
}


// vim: ts=4
