//! Error type shared by the settings store, its adapters, and the CLI

pub type SrResult<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Destroy was asked to remove a setting that has no record in the target scope
	#[error("Setting variable \"{0}\" not found")]
	SettingNotFound(String),
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Type mismatch: {0}")]
	TypeMismatch(String),
	/// Rejected by the backend before anything was persisted
	#[error("Validation failed: {0}")]
	ValidationError(String),
	#[error("Configuration error: {0}")]
	ConfigError(String),
	/// Details are logged by the adapter, the caller only gets the kind
	#[error("Database error")]
	DbError,
	#[error("Cache error: {0}")]
	CacheError(String),

	// externals
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}


// vim: ts=4
