pub use sunrise_types::prelude::*;

pub use crate::settings::{SettingsConfig, SettingsStore};

// vim: ts=4
