//! Adapter that persists setting records.
//!
//! The settings store never talks to a database directly. Every durable read
//! and write goes through a `SettingsAdapter`, scoped by `Target`.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Longest accepted setting name, in bytes
pub const MAX_VAR_LEN: usize = 255;

/// Checks a setting name before it is persisted
pub fn validate_var(var: &str) -> SrResult<()> {
	if var.is_empty() {
		return Err(Error::ValidationError("Setting name can't be blank".into()));
	}
	if var.len() > MAX_VAR_LEN {
		return Err(Error::ValidationError(format!(
			"Setting name is too long ({} bytes, maximum is {})",
			var.len(),
			MAX_VAR_LEN
		)));
	}
	Ok(())
}

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Reads the record for `var` in `target`, if there is one
	async fn read_setting(&self, target: &Target, var: &str) -> SrResult<Option<SettingRecord>>;

	/// Lists the records of `target`, optionally restricted to names starting with `prefix`
	async fn list_settings(
		&self,
		target: &Target,
		prefix: Option<&str>,
	) -> SrResult<Vec<SettingRecord>>;

	/// Creates the record or updates it in place, after validation
	async fn save_setting(
		&self,
		target: &Target,
		var: &str,
		value: &SettingValue,
	) -> SrResult<SettingRecord>;

	/// Returns `false` if there was nothing to delete
	async fn delete_setting(&self, target: &Target, var: &str) -> SrResult<bool>;

	/// Deletes every record matching `condition`, returns the number removed
	async fn delete_settings(&self, condition: &SettingCondition) -> SrResult<u64>;
}


// vim: ts=4
