//! SQLite-based settings adapter
//!
//! Implements the `SettingsAdapter` trait on a single `settings` table.
//!
//! # Storage layout
//!
//! - `settings(setting_id, target_type, target_id, var, value, created_at, updated_at)`
//! - `value` holds the JSON encoding of the setting value
//! - the global scope stores NULL in both target columns
//! - a unique index over the target and `var` keeps one record per name and scope
//!
//! The database lives at `{dir}/settings.db` and runs in WAL mode.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use std::time::Duration;

use sunrise_types::prelude::*;
use sunrise_types::settings_adapter::SettingsAdapter;

mod schema;
mod setting;
mod utils;

use crate::utils::db_err;

/// File name of the database inside the configured directory
pub const DB_FILE_NAME: &str = "settings.db";

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	/// Opens (creating if missing) the settings database in `dir`
	pub async fn new(dir: impl AsRef<Path>) -> SrResult<Self> {
		let dir = dir.as_ref();
		tokio::fs::create_dir_all(dir).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.join(DB_FILE_NAME))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal)
			.busy_timeout(Duration::from_secs(5));
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.map_err(db_err)?;

		schema::init_db(&db).await.map_err(db_err)?;

		info!("Settings database opened: {}", dir.join(DB_FILE_NAME).display());
		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn read_setting(&self, target: &Target, var: &str) -> SrResult<Option<SettingRecord>> {
		setting::read(&self.db, target, var).await
	}

	async fn list_settings(
		&self,
		target: &Target,
		prefix: Option<&str>,
	) -> SrResult<Vec<SettingRecord>> {
		setting::list(&self.db, target, prefix).await
	}

	async fn save_setting(
		&self,
		target: &Target,
		var: &str,
		value: &SettingValue,
	) -> SrResult<SettingRecord> {
		setting::save(&self.db, target, var, value).await
	}

	async fn delete_setting(&self, target: &Target, var: &str) -> SrResult<bool> {
		setting::delete(&self.db, target, var).await
	}

	async fn delete_settings(&self, condition: &SettingCondition) -> SrResult<u64> {
		setting::delete_matching(&self.db, condition).await
	}
}

// vim: ts=4
