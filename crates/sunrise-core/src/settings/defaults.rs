//! Default values consulted when a setting has no persisted record

use std::collections::HashMap;

use crate::prelude::*;

/// Mutable builder used during initialization
#[derive(Debug, Default)]
pub struct SettingsDefaultsBuilder {
	values: HashMap<String, SettingValue>,
}

impl SettingsDefaultsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a default value. Each name can only be registered once.
	pub fn register(&mut self, var: impl Into<String>, value: SettingValue) -> SrResult<&mut Self> {
		let var = var.into();
		if self.values.contains_key(&var) {
			return Err(Error::ConfigError(format!("Default for '{}' is already registered", var)));
		}

		debug!("Registering setting default: {}", var);
		self.values.insert(var, value);
		Ok(self)
	}

	/// Register every top-level entry of a JSON object
	pub fn register_json(&mut self, json: SettingValue) -> SrResult<&mut Self> {
		let SettingValue::Object(map) = json else {
			return Err(Error::ConfigError("Setting defaults must be a JSON object".into()));
		};
		for (var, value) in map {
			self.register(var, value)?;
		}
		Ok(self)
	}

	/// Freeze the defaults (make them immutable)
	pub fn freeze(self) -> SettingsDefaults {
		info!("Freezing settings defaults with {} entries", self.values.len());
		SettingsDefaults { values: self.values }
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Immutable default mapping shared by every store built from one config
#[derive(Debug, Default)]
pub struct SettingsDefaults {
	values: HashMap<String, SettingValue>,
}

impl SettingsDefaults {
	pub fn builder() -> SettingsDefaultsBuilder {
		SettingsDefaultsBuilder::new()
	}

	/// No defaults: every unset name resolves to `None`
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn get(&self, var: &str) -> Option<&SettingValue> {
		self.values.get(var)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Defaults whose name starts with `prefix`, or all of them
	pub fn to_map(&self, prefix: Option<&str>) -> SettingsMap {
		self.iter()
			.filter(|(var, _)| prefix.is_none_or(|p| var.starts_with(p)))
			.map(|(var, value)| (var.to_string(), value.clone()))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}


// vim: ts=4
