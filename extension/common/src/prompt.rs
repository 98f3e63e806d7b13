use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Article text beyond this many characters is cut off before prompting.
pub const MAX_ARTICLE_CHARS: usize = 20_000;
pub const ELLIPSIS: &str = "...";
pub const NOT_FOUND_ANSWER: &str = "The answer to that question is not found in the article.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryMode {
	#[default]
	Brief,
	Detailed,
	Bullets,
}

impl SummaryMode {
	/// Unknown names fall back to [`SummaryMode::Brief`].
	pub fn from_name(name: &str) -> Self {
		name.parse().unwrap_or_default()
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Brief => "Brief",
			Self::Detailed => "Detailed",
			Self::Bullets => "Bullet points",
		}
	}
}

/// Cuts `text` to [`MAX_ARTICLE_CHARS`] characters and marks the cut with [`ELLIPSIS`].
/// The caller is not told that anything was dropped.
pub fn truncate_article(text: &str) -> String {
	match text.char_indices().nth(MAX_ARTICLE_CHARS) {
		Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
		None => text.to_owned(),
	}
}

pub fn build_summary_prompt(text: &str, mode: SummaryMode) -> String {
	let text = truncate_article(text);
	match mode {
		SummaryMode::Brief => format!("Summarize in 2-3 sentences:\n\n{text}"),
		SummaryMode::Detailed => format!("Give a detailed summary:\n\n{text}"),
		SummaryMode::Bullets => format!("Summarize in 5-7 bullet points (start each line with \"- \"):\n\n{text}"),
	}
}

pub fn build_answer_prompt(text: &str, question: &str) -> String {
	let text = truncate_article(text);
	format!(
		"Based *only* on the content of the following article, answer the user's question. If the answer is not in the article, say \"{NOT_FOUND_ANSWER}\"\n\n---ARTICLE---\n{text}\n\n---QUESTION---\n{question}"
	)
}
