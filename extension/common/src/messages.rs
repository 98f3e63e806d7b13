use crate::AppError;
use serde::{Deserialize, Serialize};

/// Resolves a tab id the content script can be messaged at. Browser-internal pages report no
/// id or `TAB_ID_NONE` (-1).
pub fn message_target(tab_id: Option<i32>) -> Result<u32, AppError> {
	tab_id.and_then(|id| u32::try_from(id).ok()).ok_or(AppError::RestrictedPage)
}

/// Requests the popup sends to the content script of the active tab.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ToContentScript {
	#[serde(rename = "GET ARTICLE TEXT")]
	GetArticleText,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTextResponse {
	#[serde(default)]
	pub text: Option<String>,
}

impl ArticleTextResponse {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: Some(text.into()) }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn request_uses_the_type_tag() {
		assert_eq!(serde_json::to_value(ToContentScript::GetArticleText).unwrap(), json!({ "type": "GET ARTICLE TEXT" }));
		let parsed: ToContentScript = serde_json::from_value(json!({ "type": "GET ARTICLE TEXT" })).unwrap();
		assert_eq!(parsed, ToContentScript::GetArticleText);
	}

	#[test]
	fn unknown_request_types_are_rejected() {
		assert!(serde_json::from_value::<ToContentScript>(json!({ "type": "SUMMARIZE" })).is_err());
	}

	#[test]
	fn tabs_without_a_usable_id_are_restricted() {
		assert_eq!(message_target(Some(-1)), Err(AppError::RestrictedPage));
		assert_eq!(message_target(None), Err(AppError::RestrictedPage));
		assert_eq!(message_target(Some(0)), Ok(0));
		assert_eq!(message_target(Some(7)), Ok(7));
	}

	#[test]
	fn reply_without_text_parses_as_absent() {
		let reply: ArticleTextResponse = serde_json::from_value(json!({})).unwrap();
		assert_eq!(reply.text, None);
		assert_eq!(serde_json::to_value(ArticleTextResponse::new("body")).unwrap(), json!({ "text": "body" }));
	}
}
