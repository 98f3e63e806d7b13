//! Client for the Gemini `generateContent` endpoint.

use crate::{controller::Generator, error::AppError};
use async_trait::async_trait;
use bon::Builder;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "models/gemini-2.5-flash-preview-05-20";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

pub const UNKNOWN_API_ERROR: &str = "An unknown API error occurred.";
pub const NO_CONTENT: &str = "The API returned no content.";
pub const NO_ANSWER: &str = "No answer could be generated.";

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
	contents: [RequestContent<'a>; 1],
	generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
	parts: [RequestPart<'a>; 1],
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
	text: &'a str,
}

#[derive(Serialize, Debug)]
struct GenerationConfig {
	temperature: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
	#[serde(default)]
	candidates: Option<Vec<Candidate>>,
	#[serde(default)]
	prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
	#[serde(default)]
	content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
	#[serde(default)]
	parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
	#[serde(default)]
	text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
	#[serde(default)]
	block_reason: Option<String>,
}

impl GenerateContentResponse {
	/// Turns a successful response into display text. Refusals and empty responses
	/// become explanatory strings rather than errors.
	fn into_text(self) -> String {
		let content = match self.candidates.and_then(|candidates| candidates.into_iter().next()).and_then(|candidate| candidate.content) {
			Some(content) => content,
			None => {
				return match self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
					Some(reason) => format!("Request blocked for safety reasons ({reason})."),
					None => NO_CONTENT.to_owned(),
				};
			},
		};
		content.parts.and_then(|parts| parts.into_iter().next()).and_then(|part| part.text).unwrap_or_else(|| NO_ANSWER.to_owned())
	}
}

/// Only a body that is not JSON at all falls back to the status code. Any JSON body
/// without a usable `error.message` string is an unknown API error.
fn provider_error(status: u16, body: &str) -> AppError {
	match serde_json::from_str::<serde_json::Value>(body) {
		Ok(value) => {
			let message = value.pointer("/error/message").and_then(serde_json::Value::as_str).filter(|message| !message.is_empty());
			AppError::Provider(message.unwrap_or(UNKNOWN_API_ERROR).to_owned())
		},
		Err(_) => AppError::Provider(format!("Request failed with status {status}")),
	}
}

#[derive(Debug, Clone, Builder)]
pub struct GeminiClient {
	#[builder(default)]
	http: Client,
	#[builder(into, default = DEFAULT_ENDPOINT.to_owned())]
	endpoint: String,
	#[builder(into, default = DEFAULT_MODEL.to_owned())]
	model: String,
	#[builder(default = DEFAULT_TEMPERATURE)]
	temperature: f64,
}

impl Default for GeminiClient {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl GeminiClient {
	fn request_url(&self, api_key: &str) -> Result<Url, AppError> {
		let mut url = Url::parse(&format!("{}/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model))
			.map_err(|e| AppError::ExtensionError(format!("Invalid generation endpoint: {e}")))?;
		url.query_pairs_mut().append_pair("key", api_key);
		Ok(url)
	}
}

#[async_trait(?Send)]
impl Generator for GeminiClient {
	async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, AppError> {
		let body = GenerateContentRequest {
			contents: [RequestContent { parts: [RequestPart { text: prompt }] }],
			generation_config: GenerationConfig { temperature: self.temperature },
		};
		debug!(model = %self.model, prompt_chars = prompt.chars().count(), "calling generateContent");

		let res = self
			.http
			.post(self.request_url(api_key)?)
			.json(&body)
			.send()
			.await
			.map_err(|e| AppError::Network(e.without_url().to_string()))?;

		let status = res.status();
		let text = res.text().await.map_err(|e| AppError::Network(e.without_url().to_string()))?;
		if !status.is_success() {
			let error = provider_error(status.as_u16(), &text);
			warn!(status = status.as_u16(), "generateContent failed: {error}");
			return Err(error);
		}

		let parsed: GenerateContentResponse =
			serde_json::from_str(&text).map_err(|e| AppError::Provider(format!("Failed to parse the API response: {e}")))?;
		Ok(parsed.into_text())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use mockito::{Matcher, Server, ServerGuard};
	use serde_json::json;

	const PATH: &str = "/models/test-model:generateContent";

	fn client_for(server: &ServerGuard) -> GeminiClient {
		GeminiClient::builder().endpoint(server.url()).model("models/test-model").build()
	}

	async fn respond_with(status: usize, body: &str) -> Result<String, AppError> {
		let mut server = Server::new_async().await;
		let mock = server
			.mock("POST", PATH)
			.match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
			.with_status(status)
			.with_header("content-type", "application/json")
			.with_body(body)
			.create_async()
			.await;
		let result = client_for(&server).generate("prompt", "secret").await;
		mock.assert_async().await;
		result
	}

	#[tokio::test]
	async fn sends_prompt_and_temperature() {
		let mut server = Server::new_async().await;
		let mock = server
			.mock("POST", PATH)
			.match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
			.match_header("content-type", "application/json")
			.match_body(Matcher::Json(json!({
				"contents": [{ "parts": [{ "text": "Summarize this" }] }],
				"generationConfig": { "temperature": 0.2 }
			})))
			.with_body(r#"{"candidates":[{"content":{"parts":[{"text":"A summary."}]}}]}"#)
			.create_async()
			.await;

		let text = client_for(&server).generate("Summarize this", "secret").await.unwrap();
		assert_eq!(text, "A summary.");
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn provider_message_is_surfaced() {
		let err = respond_with(429, r#"{"error":{"message":"rate limited"}}"#).await.unwrap_err();
		assert_eq!(err, AppError::Provider("rate limited".to_owned()));
		assert_eq!(err.to_string(), "rate limited");
	}

	#[tokio::test]
	async fn unparseable_error_body_reports_status() {
		let err = respond_with(500, "<html>oops</html>").await.unwrap_err();
		assert_eq!(err.to_string(), "Request failed with status 500");
	}

	#[tokio::test]
	async fn error_without_message_is_generic() {
		let err = respond_with(400, r#"{"error":{}}"#).await.unwrap_err();
		assert_eq!(err.to_string(), UNKNOWN_API_ERROR);
	}

	#[tokio::test]
	async fn json_error_of_another_shape_is_unknown() {
		let err = respond_with(429, r#"{"error":"quota exceeded"}"#).await.unwrap_err();
		assert_eq!(err, AppError::Provider(UNKNOWN_API_ERROR.to_owned()));
		let err = respond_with(500, "[]").await.unwrap_err();
		assert_eq!(err.to_string(), UNKNOWN_API_ERROR);
		let err = respond_with(403, r#"{"error":{"message":42}}"#).await.unwrap_err();
		assert_eq!(err.to_string(), UNKNOWN_API_ERROR);
	}

	#[test]
	fn only_non_json_bodies_report_the_status() {
		assert_eq!(provider_error(502, "").to_string(), "Request failed with status 502");
		assert_eq!(provider_error(502, "{\"error\":").to_string(), "Request failed with status 502");
		assert_eq!(provider_error(502, "null").to_string(), UNKNOWN_API_ERROR);
		assert_eq!(provider_error(400, r#"{"error":{"message":""}}"#).to_string(), UNKNOWN_API_ERROR);
	}

	#[tokio::test]
	async fn safety_block_resolves_with_reason() {
		let text = respond_with(200, r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).await.unwrap();
		assert!(text.contains("SAFETY"));
		assert_eq!(text, "Request blocked for safety reasons (SAFETY).");
	}

	#[tokio::test]
	async fn empty_candidates_resolve_to_placeholder() {
		assert_eq!(respond_with(200, r#"{"candidates":[]}"#).await.unwrap(), NO_CONTENT);
		assert_eq!(respond_with(200, "{}").await.unwrap(), NO_CONTENT);
	}

	#[tokio::test]
	async fn missing_part_text_resolves_to_no_answer() {
		assert_eq!(respond_with(200, r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).await.unwrap(), NO_ANSWER);
		assert_eq!(respond_with(200, r#"{"candidates":[{"content":{}}]}"#).await.unwrap(), NO_ANSWER);
	}

	#[tokio::test]
	async fn empty_part_text_is_returned_as_is() {
		let text = respond_with(200, r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#).await.unwrap();
		assert_eq!(text, "");
	}

	#[tokio::test]
	async fn garbled_success_body_is_an_error() {
		let err = respond_with(200, "not json").await.unwrap_err();
		assert!(matches!(err, AppError::Provider(message) if message.starts_with("Failed to parse the API response")));
	}

	#[test]
	fn url_carries_model_and_key() {
		let client = GeminiClient::default();
		let url = client.request_url("abc").unwrap();
		assert_eq!(url.as_str(), "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent?key=abc");
	}
}
