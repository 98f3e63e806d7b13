use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every failure a Summarize or Ask action can end in. The `Display` text is what the popup shows.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("No API key set. Go to options to add one.")]
	MissingApiKey,
	#[error("Cannot run on this special page.")]
	RestrictedPage,
	#[error("Could not read this page. Reload and try again.")]
	PageUnreadable,
	#[error("Not enough text found on this page.")]
	InsufficientContent,
	#[error("Please enter a question.")]
	EmptyQuestion,
	#[error("You must summarize an article first.")]
	NoArticle,
	#[error("{0}")]
	Provider(String),
	#[error("Could not reach the generation API: {0}")]
	Network(String),
	#[error("An internal extension error occurred: {0}")]
	ExtensionError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ErrorCategory {
	Configuration,
	PageAccess,
	InsufficientContent,
	Validation,
	Provider,
	Internal,
}

impl AppError {
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::MissingApiKey => ErrorCategory::Configuration,
			Self::RestrictedPage | Self::PageUnreadable => ErrorCategory::PageAccess,
			Self::InsufficientContent => ErrorCategory::InsufficientContent,
			Self::EmptyQuestion | Self::NoArticle => ErrorCategory::Validation,
			Self::Provider(_) | Self::Network(_) => ErrorCategory::Provider,
			Self::ExtensionError(_) => ErrorCategory::Internal,
		}
	}

	/// The line rendered in the result area.
	pub fn display_text(&self) -> String {
		format!("Error: {self}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn provider_message_is_passed_through_verbatim() {
		assert_eq!(AppError::Provider("rate limited".to_owned()).to_string(), "rate limited");
	}

	#[test]
	fn display_text_is_prefixed() {
		assert_eq!(AppError::InsufficientContent.display_text(), "Error: Not enough text found on this page.");
	}

	#[test]
	fn page_failures_share_a_category() {
		assert_eq!(AppError::RestrictedPage.category(), ErrorCategory::PageAccess);
		assert_eq!(AppError::PageUnreadable.category(), ErrorCategory::PageAccess);
		assert_eq!(AppError::NoArticle.category(), ErrorCategory::Validation);
		assert_eq!(AppError::EmptyQuestion.category(), ErrorCategory::Validation);
	}
}
