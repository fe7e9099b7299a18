//! Shared types, adapter traits, and core utilities for the Sunrise settings store.
//!
//! This crate contains the foundational types that are shared between the
//! settings store and all adapter implementations. Keeping them separate lets
//! backend adapters depend on the contracts without pulling in the store.

pub mod cache_adapter;
pub mod error;
pub mod prelude;
pub mod settings_adapter;
pub mod types;

// vim: ts=4
