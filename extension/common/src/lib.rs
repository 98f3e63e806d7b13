pub mod controller;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod messages;
pub mod prompt;
pub mod settings;

pub use controller::{ApiKeySource, ArticleText, Generator, InteractionController, MIN_ARTICLE_CHARS, Outcome, PageReader, Session};
pub use error::{AppError, ErrorCategory};
pub use extract::{PageDom, extract};
pub use gemini::GeminiClient;
pub use messages::{ArticleTextResponse, ToContentScript, message_target};
pub use prompt::{SummaryMode, build_answer_prompt, build_summary_prompt};
pub use settings::Theme;
