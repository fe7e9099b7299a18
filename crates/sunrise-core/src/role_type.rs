//! Roles that can be assigned to admin users

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::i18n::Translator;
use crate::prelude::*;

/// Translation scope of role titles
pub const TITLE_SCOPE: &str = "manage.role.kind";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RoleType {
	Default = 1,
	Redactor = 2,
	Moderator = 3,
	Admin = 4,
}

const ALL: [RoleType; 4] = [RoleType::Default, RoleType::Redactor, RoleType::Moderator, RoleType::Admin];

impl RoleType {
	pub fn all() -> &'static [RoleType] {
		&ALL
	}

	pub fn id(self) -> u8 {
		self as u8
	}

	pub fn code(self) -> &'static str {
		match self {
			RoleType::Default => "default",
			RoleType::Redactor => "redactor",
			RoleType::Moderator => "moderator",
			RoleType::Admin => "admin",
		}
	}

	pub fn from_id(id: u8) -> Option<Self> {
		ALL.into_iter().find(|role| role.id() == id)
	}

	pub fn from_code(code: &str) -> Option<Self> {
		ALL.into_iter().find(|role| role.code() == code)
	}

	/// Whether `id` belongs to a declared role
	pub fn is_legal(id: u8) -> bool {
		Self::from_id(id).is_some()
	}

	/// Human-readable title, falls back to the code when no translation exists
	pub fn title(self, translator: &dyn Translator) -> String {
		let key = format!("{}.{}", TITLE_SCOPE, self.code());
		translator.translate(&key).unwrap_or_else(|| {
			debug!("Missing translation: {}", key);
			self.code().to_string()
		})
	}
}

impl std::fmt::Display for RoleType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.code())
	}
}

impl FromStr for RoleType {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_code(s).ok_or_else(|| Error::InvalidArgument(format!("Unknown role type: {}", s)))
	}
}

impl TryFrom<u8> for RoleType {
	type Error = Error;

	fn try_from(id: u8) -> Result<Self, Self::Error> {
		Self::from_id(id).ok_or_else(|| Error::InvalidArgument(format!("Unknown role type id: {}", id)))
	}
}


// vim: ts=4
