//! Core of the Sunrise admin engine.
//!
//! # Modules
//!
//! - **Settings** (`settings`): per-target key/value store with cache-aside
//!   reads, default fallback, and merge-on-write for mapping values
//! - **Role types** (`role_type`): closed enumeration of admin roles
//! - **Translations** (`i18n`): label lookup used by role types
//!
//! Persistence and caching are pluggable. See `sunrise_types::settings_adapter`
//! and `sunrise_types::cache_adapter` for the contracts.

#![forbid(unsafe_code)]

pub mod i18n;
pub mod prelude;
pub mod role_type;
pub mod settings;

pub use sunrise_types::{cache_adapter, error, settings_adapter, types};

pub use crate::role_type::RoleType;
pub use crate::settings::{SettingsConfig, SettingsConfigBuilder, SettingsDefaults, SettingsStore};

// vim: ts=4
