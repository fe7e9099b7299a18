//! Common types used throughout the Sunrise settings store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Value of a setting: a scalar, a string, an array, or a mapping
pub type SettingValue = serde_json::Value;

/// Merged name -> value view returned by bulk reads
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// Short type name for error messages
pub fn value_type_name(value: &SettingValue) -> &'static str {
	match value {
		SettingValue::Null => "null",
		SettingValue::Bool(_) => "bool",
		SettingValue::Number(_) => "number",
		SettingValue::String(_) => "string",
		SettingValue::Array(_) => "array",
		SettingValue::Object(_) => "mapping",
	}
}

// Target //
//********//
/// Owning entity of a group of settings.
///
/// Both parts absent denotes the global scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
	pub typ: Option<Box<str>>,
	pub id: Option<i64>,
}

impl Target {
	pub const fn global() -> Self {
		Self { typ: None, id: None }
	}

	pub fn new(typ: impl Into<Box<str>>, id: i64) -> Self {
		Self { typ: Some(typ.into()), id: Some(id) }
	}

	pub fn is_global(&self) -> bool {
		self.typ.is_none() && self.id.is_none()
	}
}

impl std::fmt::Display for Target {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match (&self.typ, self.id) {
			(None, None) => write!(f, "global"),
			(Some(typ), Some(id)) => write!(f, "{}#{}", typ, id),
			(Some(typ), None) => write!(f, "{}", typ),
			(None, Some(id)) => write!(f, "#{}", id),
		}
	}
}

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Self {
		let secs = SystemTime::now()
			.duration_since(SystemTime::UNIX_EPOCH)
			.map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
			.unwrap_or_default();
		Self(secs)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// SettingRecord //
//***************//
/// Persisted setting, unique per (target, var)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettingRecord {
	pub target: Target,
	pub var: Box<str>,
	pub value: SettingValue,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

// SettingCondition //
//******************//
/// Selects records for bulk deletion
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingCondition {
	/// `None` matches every target scope
	pub target: Option<Target>,
	pub var_prefix: Option<Box<str>>,
}

impl SettingCondition {
	pub fn any() -> Self {
		Self::default()
	}

	pub fn scoped(target: Target) -> Self {
		Self { target: Some(target), var_prefix: None }
	}

	pub fn with_prefix(mut self, prefix: impl Into<Box<str>>) -> Self {
		self.var_prefix = Some(prefix.into());
		self
	}

	pub fn matches(&self, target: &Target, var: &str) -> bool {
		self.target.as_ref().is_none_or(|t| t == target)
			&& self.var_prefix.as_deref().is_none_or(|p| var.starts_with(p))
	}
}


// vim: ts=4
