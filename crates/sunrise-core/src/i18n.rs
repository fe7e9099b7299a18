//! Translation lookup for human-readable labels

use std::collections::HashMap;

use crate::prelude::*;

pub trait Translator: Send + Sync {
	/// Translation of a dotted key such as `manage.role.kind.admin`
	fn translate(&self, key: &str) -> Option<String>;
}

/// In-memory translation table
#[derive(Debug, Clone, Default)]
pub struct StaticTranslations {
	entries: HashMap<Box<str>, Box<str>>,
}

impl StaticTranslations {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<Box<str>>, text: impl Into<Box<str>>) -> &mut Self {
		self.entries.insert(key.into(), text.into());
		self
	}

	/// Load a nested JSON object, e.g. `{"manage": {"role": {"kind": {"admin": "Admin"}}}}`.
	///
	/// Nested keys are joined with '.'. Leaves must be strings.
	pub fn from_json(json: &serde_json::Value) -> SrResult<Self> {
		let mut translations = Self::new();
		flatten_into(&mut translations, "", json)?;
		Ok(translations)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

fn flatten_into(
	translations: &mut StaticTranslations,
	prefix: &str,
	json: &serde_json::Value,
) -> SrResult<()> {
	match json {
		serde_json::Value::Object(map) => {
			for (key, value) in map {
				let path =
					if prefix.is_empty() { key.clone() } else { format!("{}.{}", prefix, key) };
				flatten_into(translations, &path, value)?;
			}
			Ok(())
		}
		serde_json::Value::String(text) if !prefix.is_empty() => {
			translations.insert(prefix, text.as_str());
			Ok(())
		}
		_ => Err(Error::ConfigError(format!(
			"Translation '{}' must be a string or a nested object",
			prefix
		))),
	}
}

impl Translator for StaticTranslations {
	fn translate(&self, key: &str) -> Option<String> {
		self.entries.get(key).map(ToString::to_string)
	}
}


// vim: ts=4
