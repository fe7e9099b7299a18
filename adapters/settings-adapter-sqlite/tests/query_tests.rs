//! Settings adapter query tests
//!
//! Tests target scoping, prefix filtering and bulk deletion

use serde_json::json;
use sunrise_settings_adapter_sqlite::SettingsAdapterSqlite;
use sunrise_types::settings_adapter::SettingsAdapter;
use sunrise_types::types::{SettingCondition, Target};
use tempfile::TempDir;

async fn create_test_adapter() -> (SettingsAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = SettingsAdapterSqlite::new(temp_dir.path())
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

async fn seed(adapter: &SettingsAdapterSqlite) {
	let global = Target::global();
	let alice = Target::new("User", 1);
	let bob = Target::new("User", 2);

	for (target, var, value) in [
		(&global, "user_theme", json!("light")),
		(&global, "user_lang", json!("en")),
		(&global, "site_name", json!("Sunrise")),
		(&global, "user%odd", json!(1)),
		(&alice, "user_theme", json!("dark")),
		(&alice, "mail_from", json!("alice@example.com")),
		(&bob, "user_theme", json!("blue")),
	] {
		adapter.save_setting(target, var, &value).await.expect("seed");
	}
}

fn vars(records: &[sunrise_types::types::SettingRecord]) -> Vec<&str> {
	records.iter().map(|r| &*r.var).collect()
}

#[tokio::test]
async fn test_list_is_scoped_to_target() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let global = adapter.list_settings(&Target::global(), None).await.expect("list");
	assert_eq!(vars(&global), vec!["site_name", "user%odd", "user_lang", "user_theme"]);

	let alice = adapter.list_settings(&Target::new("User", 1), None).await.expect("list");
	assert_eq!(vars(&alice), vec!["mail_from", "user_theme"]);
	assert_eq!(alice[1].value, json!("dark"));
}

#[tokio::test]
async fn test_list_with_prefix() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let records = adapter.list_settings(&Target::global(), Some("user_")).await.expect("list");
	assert_eq!(vars(&records), vec!["user_lang", "user_theme"]);
}

#[tokio::test]
async fn test_prefix_is_literal() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let records = adapter.list_settings(&Target::global(), Some("user%")).await.expect("list");
	assert_eq!(vars(&records), vec!["user%odd"]);

	let records = adapter.list_settings(&Target::global(), Some("USER_")).await.expect("list");
	assert!(records.is_empty(), "Prefix match is case-sensitive");
}

#[tokio::test]
async fn test_empty_prefix_lists_everything() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let records = adapter.list_settings(&Target::global(), Some("")).await.expect("list");
	assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn test_delete_settings_by_target() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let deleted = adapter
		.delete_settings(&SettingCondition::scoped(Target::new("User", 1)))
		.await
		.expect("delete");
	assert_eq!(deleted, 2);

	assert!(adapter.list_settings(&Target::new("User", 1), None).await.expect("list").is_empty());
	assert_eq!(adapter.list_settings(&Target::new("User", 2), None).await.expect("list").len(), 1);
}

#[tokio::test]
async fn test_delete_settings_by_prefix_across_targets() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let deleted = adapter
		.delete_settings(&SettingCondition::any().with_prefix("user_theme"))
		.await
		.expect("delete");
	assert_eq!(deleted, 3);

	let global = adapter.list_settings(&Target::global(), None).await.expect("list");
	assert_eq!(vars(&global), vec!["site_name", "user%odd", "user_lang"]);
}

#[tokio::test]
async fn test_delete_all_settings() {
	let (adapter, _temp) = create_test_adapter().await;
	seed(&adapter).await;

	let deleted = adapter.delete_settings(&SettingCondition::any()).await.expect("delete");
	assert_eq!(deleted, 7);
}

// vim: ts=4
