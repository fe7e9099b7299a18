//! Settings subsystem: a cached, per-target key/value store
//!
//! # Architecture
//!
//! - **Defaults** (`defaults.rs`): frozen fallback values, built once at startup
//! - **Config** (`config.rs`): defaults, cache, cache options, and backend shared by every store
//! - **Cache** (`cache.rs`): `NullCache` and the LRU-backed `MemoryCache`
//! - **Store** (`store.rs`): `SettingsStore` with get/set/merge/destroy and bulk operations
//!
//! # Target scopes
//!
//! Every store is bound to a `Target`. The global scope has no type and no id.
//! `SettingsStore::for_target` derives a store for another owning entity that
//! shares the same configuration.
//!
//! # Caching
//!
//! Reads are cache-aside: the cache is consulted first and filled from the
//! backend on a miss. Writes update the cache after the backend accepted them.
//! Bulk operations clear the whole cache instead of tracking affected keys.

pub mod cache;
pub mod config;
pub mod defaults;
pub mod store;

pub use cache::{MemoryCache, NullCache};
pub use config::{SettingsConfig, SettingsConfigBuilder};
pub use defaults::{SettingsDefaults, SettingsDefaultsBuilder};
pub use store::SettingsStore;

// vim: ts=4
