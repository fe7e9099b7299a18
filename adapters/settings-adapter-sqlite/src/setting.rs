//! Settings key-value store management
//!
//! Handles persistent storage of per-target settings as JSON values.

use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use sunrise_types::prelude::*;
use sunrise_types::settings_adapter::validate_var;

use crate::utils::{db_err, record_from_row};

const SELECT_RECORD: &str =
	"SELECT target_type, target_id, var, value, created_at, updated_at FROM settings";

/// Appends the target filter. `IS` matches NULL against NULL for the global scope.
fn push_target<'a>(query: &mut QueryBuilder<'a, Sqlite>, target: &'a Target) {
	query
		.push(" AND target_type IS ")
		.push_bind(target.typ.as_deref())
		.push(" AND target_id IS ")
		.push_bind(target.id);
}

/// Appends a literal "starts with" filter on the name, without LIKE wildcards
fn push_prefix<'a>(query: &mut QueryBuilder<'a, Sqlite>, prefix: &'a str) {
	query.push(" AND instr(var, ").push_bind(prefix).push(") = 1");
}

/// Read a single setting by name
pub(crate) async fn read(
	db: &SqlitePool,
	target: &Target,
	var: &str,
) -> SrResult<Option<SettingRecord>> {
	let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_RECORD);
	query.push(" WHERE var = ").push_bind(var);
	push_target(&mut query, target);

	let row = query.build().fetch_optional(db).await.map_err(db_err)?;
	row.as_ref().map(record_from_row).transpose()
}

/// List the settings of a target, optionally filtered by name prefix
pub(crate) async fn list(
	db: &SqlitePool,
	target: &Target,
	prefix: Option<&str>,
) -> SrResult<Vec<SettingRecord>> {
	let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_RECORD);
	query.push(" WHERE 1 = 1");
	push_target(&mut query, target);
	if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
		push_prefix(&mut query, prefix);
	}
	query.push(" ORDER BY var");

	let rows = query.build().fetch_all(db).await.map_err(db_err)?;
	rows.iter().map(record_from_row).collect()
}

/// Update or create a setting in one upsert statement.
///
/// Concurrent writes to the same name are last-write-wins. An existing record keeps its `created_at`.
pub(crate) async fn save(
	db: &SqlitePool,
	target: &Target,
	var: &str,
	value: &SettingValue,
) -> SrResult<SettingRecord> {
	validate_var(var)?;

	let value_str = value.to_string();
	let now = Timestamp::now();

	let row = sqlx::query(
		"INSERT INTO settings (target_type, target_id, var, value, created_at, updated_at)
		VALUES (?, ?, ?, ?, ?, ?)
		ON CONFLICT(IFNULL(target_type, ''), IFNULL(target_id, -1), var)
		DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
		RETURNING created_at",
	)
	.bind(target.typ.as_deref())
	.bind(target.id)
	.bind(var)
	.bind(value_str.as_str())
	.bind(now.0)
	.bind(now.0)
	.fetch_one(db)
	.await
	.map_err(db_err)?;
	let created_at: i64 = row.try_get("created_at").map_err(db_err)?;

	Ok(SettingRecord {
		target: target.clone(),
		var: var.into(),
		value: value.clone(),
		created_at: Timestamp(created_at),
		updated_at: now,
	})
}

/// Delete a single setting, returns whether a record existed
pub(crate) async fn delete(db: &SqlitePool, target: &Target, var: &str) -> SrResult<bool> {
	let res = sqlx::query("DELETE FROM settings WHERE target_type IS ? AND target_id IS ? AND var = ?")
		.bind(target.typ.as_deref())
		.bind(target.id)
		.bind(var)
		.execute(db)
		.await
		.map_err(db_err)?;

	Ok(res.rows_affected() > 0)
}

/// Delete every setting matching `condition`
pub(crate) async fn delete_matching(db: &SqlitePool, condition: &SettingCondition) -> SrResult<u64> {
	let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new("DELETE FROM settings WHERE 1 = 1");
	if let Some(target) = &condition.target {
		push_target(&mut query, target);
	}
	if let Some(prefix) = condition.var_prefix.as_deref().filter(|p| !p.is_empty()) {
		push_prefix(&mut query, prefix);
	}

	let res = query.build().execute(db).await.map_err(db_err)?;
	Ok(res.rows_affected())
}

// vim: ts=4
