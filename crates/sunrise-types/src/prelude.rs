pub use crate::error::{Error, SrResult};
pub use crate::types::{SettingCondition, SettingRecord, SettingValue, SettingsMap, Target, Timestamp};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
