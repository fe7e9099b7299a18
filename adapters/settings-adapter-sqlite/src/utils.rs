//! Shared helpers for query error handling and row decoding

use sqlx::{Row, sqlite::SqliteRow};

use sunrise_types::prelude::*;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Log the driver error and collapse it into `Error::DbError`
pub(crate) fn db_err(err: sqlx::Error) -> Error {
	inspect(&err);
	Error::DbError
}

/// Decode a row selected as (target_type, target_id, var, value, created_at, updated_at)
pub(crate) fn record_from_row(row: &SqliteRow) -> SrResult<SettingRecord> {
	let typ: Option<String> = row.try_get("target_type").map_err(db_err)?;
	let id: Option<i64> = row.try_get("target_id").map_err(db_err)?;
	let var: String = row.try_get("var").map_err(db_err)?;
	let value: Option<String> = row.try_get("value").map_err(db_err)?;
	let created_at: i64 = row.try_get("created_at").map_err(db_err)?;
	let updated_at: i64 = row.try_get("updated_at").map_err(db_err)?;

	let value = match value {
		Some(json) => serde_json::from_str(&json)
			.inspect_err(|err| warn!("Undecodable value for setting '{}': {}", var, err))?,
		None => SettingValue::Null,
	};

	Ok(SettingRecord {
		target: Target { typ: typ.map(Into::into), id },
		var: var.into(),
		value,
		created_at: Timestamp(created_at),
		updated_at: Timestamp(updated_at),
	})
}

// vim: ts=4
