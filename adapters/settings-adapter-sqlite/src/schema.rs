//! Database schema initialization
//!
//! Creates the settings table and its indexes if they don't exist yet.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		setting_id integer PRIMARY KEY AUTOINCREMENT,
		target_type text,
		target_id integer,
		var text NOT NULL,
		value text,
		created_at integer NOT NULL,
		updated_at integer NOT NULL
	)",
	)
	.execute(&mut *tx)
	.await?;

	// One record per (target, var), the global scope (NULL type and id) included
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_settings_target_var
		ON settings(IFNULL(target_type, ''), IFNULL(target_id, -1), var)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
