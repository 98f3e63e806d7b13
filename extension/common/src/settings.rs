use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Synced storage key of the Gemini API key.
pub const API_KEY: &str = "apiKey";
pub const THEME: &str = "theme";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}
