//! Browser-backed collaborators for the interaction controller.

use async_trait::async_trait;
use common::{
	ApiKeySource, AppError, ArticleTextResponse, GeminiClient, PageReader, Theme, ToContentScript, message_target,
	gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL},
	settings,
};
use dioxus::logger::tracing::warn;
use webext_api::{Browser, api::StorageArea, error::ExtensionError};

fn internal(e: ExtensionError) -> AppError {
	AppError::ExtensionError(e.to_string())
}

fn browser() -> Result<Browser, AppError> {
	webext_api::init().map_err(internal)
}

pub fn gemini_client() -> GeminiClient {
	GeminiClient::builder()
		.endpoint(option_env!("GEMINI_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT))
		.model(option_env!("GEMINI_MODEL").unwrap_or(DEFAULT_MODEL))
		.build()
}

/// Asks the content script of the active tab for its article text.
pub struct ActiveTabReader;

#[async_trait(?Send)]
impl PageReader for ActiveTabReader {
	async fn read_article_text(&self) -> Result<Option<String>, AppError> {
		let tabs = browser()?.tabs().map_err(internal)?;
		let tab = tabs.get_active().await.map_err(|e| {
			warn!("[popup] Could not query the active tab: {}", e);
			AppError::PageUnreadable
		})?;
		let tab_id = message_target(tab.id)?;

		let reply: Option<ArticleTextResponse> = tabs.send_message(tab_id, &ToContentScript::GetArticleText).await.map_err(|e| {
			warn!("[popup] Content script did not answer: {}", e);
			AppError::PageUnreadable
		})?;
		Ok(reply.and_then(|reply| reply.text))
	}
}

/// The `apiKey` and `theme` entries of synced extension storage.
#[derive(Clone, Copy)]
pub struct SyncSettings;

impl SyncSettings {
	fn area() -> Result<StorageArea, AppError> {
		browser()?.storage().and_then(|storage| storage.sync()).map_err(internal)
	}

	pub async fn theme() -> Theme {
		let stored = match Self::area() {
			Ok(area) => area.get::<Theme>(settings::THEME).await.map_err(internal),
			Err(e) => Err(e),
		};
		stored.unwrap_or_else(|e| {
			warn!("[popup] Could not read the theme: {}", e);
			None
		})
		.unwrap_or_default()
	}

	pub async fn set_theme(theme: Theme) -> Result<(), AppError> {
		Self::area()?.set(settings::THEME, &theme).await.map_err(internal)
	}
}

#[async_trait(?Send)]
impl ApiKeySource for SyncSettings {
	async fn api_key(&self) -> Result<Option<String>, AppError> {
		Self::area()?.get::<String>(settings::API_KEY).await.map_err(internal)
	}
}

pub async fn open_options_page() {
	let opened = match browser().and_then(|b| b.runtime().map_err(internal)) {
		Ok(runtime) => runtime.open_options_page().await.map_err(internal),
		Err(e) => Err(e),
	};
	if let Err(e) = opened {
		warn!("[popup] Could not open the options page: {}", e);
	}
}
