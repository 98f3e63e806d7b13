//! Page text extraction, independent of the DOM binding that feeds it.

/// Read-only view over a rendered page. Texts are the rendered (`innerText`) texts,
/// so script and hidden content never shows up here.
pub trait PageDom {
	/// Rendered text of the first `<article>` element, if the page has one.
	fn article_text(&self) -> Option<String>;

	/// Rendered text of every `<p>` element in document order.
	fn paragraph_texts(&self) -> Vec<String>;
}

/// Prefers the article container; falls back to the paragraphs joined by newlines.
/// Yields an empty string when the page has neither.
pub fn extract(dom: &impl PageDom) -> String {
	match dom.article_text() {
		Some(text) => text,
		None => dom.paragraph_texts().join("\n"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FakePage {
		article: Option<&'static str>,
		paragraphs: Vec<&'static str>,
	}

	impl PageDom for FakePage {
		fn article_text(&self) -> Option<String> {
			self.article.map(str::to_owned)
		}

		fn paragraph_texts(&self) -> Vec<String> {
			self.paragraphs.iter().map(|p| (*p).to_owned()).collect()
		}
	}

	#[test]
	fn article_wins_over_paragraphs() {
		let page = FakePage { article: Some("the article"), paragraphs: vec!["stray paragraph"] };
		assert_eq!(extract(&page), "the article");
	}

	#[test]
	fn paragraphs_are_joined_in_order() {
		let page = FakePage { article: None, paragraphs: vec!["first", "second", "third"] };
		assert_eq!(extract(&page), "first\nsecond\nthird");
	}

	#[test]
	fn empty_article_is_still_preferred() {
		let page = FakePage { article: Some(""), paragraphs: vec!["ignored"] };
		assert_eq!(extract(&page), "");
	}

	#[test]
	fn bare_page_yields_empty_text() {
		let page = FakePage { article: None, paragraphs: vec![] };
		assert!(extract(&page).is_empty());
	}
}
