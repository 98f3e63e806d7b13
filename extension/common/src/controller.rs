//! Summarize/Ask orchestration and the session's cached article.

use crate::{
	error::AppError,
	prompt::{SummaryMode, build_answer_prompt, build_summary_prompt},
};
use async_trait::async_trait;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, info, warn};

/// Extracted text shorter than this (after trimming) is not worth summarizing.
pub const MIN_ARTICLE_CHARS: usize = 50;

/// Reaches the page text extractor running in the active tab.
#[async_trait(?Send)]
pub trait PageReader {
	/// `Ok(None)` when the page replied without any text.
	async fn read_article_text(&self) -> Result<Option<String>, AppError>;
}

/// Read access to the user's stored API key.
#[async_trait(?Send)]
pub trait ApiKeySource {
	async fn api_key(&self) -> Result<Option<String>, AppError>;
}

/// One remote generation call. No retries.
#[async_trait(?Send)]
pub trait Generator {
	async fn generate(&self, prompt: &str, api_key: &str) -> Result<String, AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText(Rc<str>);

impl ArticleText {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<String> for ArticleText {
	fn from(text: String) -> Self {
		Self(text.into())
	}
}

/// State that lives as long as the popup stays open.
#[derive(Debug, Default)]
pub struct Session {
	article: Option<ArticleText>,
}

impl Session {
	pub fn article(&self) -> Option<&ArticleText> {
		self.article.as_ref()
	}

	pub fn has_article(&self) -> bool {
		self.article.is_some()
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	Answer(String),
	Failed(AppError),
}

impl Outcome {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Answer(_))
	}

	/// The text shown in the result area.
	pub fn display_text(&self) -> String {
		match self {
			Self::Answer(text) => text.trim().to_owned(),
			Self::Failed(error) => error.display_text(),
		}
	}
}

impl From<Result<String, AppError>> for Outcome {
	fn from(result: Result<String, AppError>) -> Self {
		match result {
			Ok(text) => Self::Answer(text),
			Err(error) => Self::Failed(error),
		}
	}
}

/// Runs the Summarize and Ask actions against injected collaborators.
///
/// The session is only borrowed between suspension points, so both actions may be in
/// flight at once; whichever finishes last decides what the caller renders.
pub struct InteractionController<P, K, G> {
	page: P,
	keys: K,
	generator: G,
	session: RefCell<Session>,
}

impl<P: PageReader, K: ApiKeySource, G: Generator> InteractionController<P, K, G> {
	pub fn new(page: P, keys: K, generator: G) -> Self {
		Self { page, keys, generator, session: RefCell::new(Session::default()) }
	}

	pub fn has_article(&self) -> bool {
		self.session.borrow().has_article()
	}

	pub fn article(&self) -> Option<ArticleText> {
		self.session.borrow().article().cloned()
	}

	pub async fn summarize(&self, mode: SummaryMode) -> Outcome {
		debug!(%mode, "summarize requested");
		let outcome = Outcome::from(self.try_summarize(mode).await);
		if let Outcome::Failed(error) = &outcome {
			warn!(category = %error.category(), "summarize failed: {error}");
		}
		outcome
	}

	pub async fn ask(&self, question: &str) -> Outcome {
		debug!("ask requested");
		let outcome = Outcome::from(self.try_ask(question).await);
		if let Outcome::Failed(error) = &outcome {
			warn!(category = %error.category(), "ask failed: {error}");
		}
		outcome
	}

	async fn require_api_key(&self) -> Result<String, AppError> {
		self.keys.api_key().await?.filter(|key| !key.trim().is_empty()).ok_or(AppError::MissingApiKey)
	}

	async fn try_summarize(&self, mode: SummaryMode) -> Result<String, AppError> {
		let api_key = self.require_api_key().await?;

		let text = self.page.read_article_text().await?.filter(|text| !text.is_empty()).ok_or(AppError::PageUnreadable)?;
		let chars = text.trim().chars().count();
		info!(chars, "article text extracted");
		if chars < MIN_ARTICLE_CHARS {
			return Err(AppError::InsufficientContent);
		}

		let article = ArticleText::from(text);
		let summary = self.generator.generate(&build_summary_prompt(article.as_str(), mode), &api_key).await?;
		self.session.borrow_mut().article = Some(article);
		Ok(summary)
	}

	async fn try_ask(&self, question: &str) -> Result<String, AppError> {
		let question = question.trim();
		if question.is_empty() {
			return Err(AppError::EmptyQuestion);
		}
		let article = self.article().ok_or(AppError::NoArticle)?;
		let api_key = self.require_api_key().await?;
		self.generator.generate(&build_answer_prompt(article.as_str(), question), &api_key).await
	}
}
