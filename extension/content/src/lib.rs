use common::{ArticleTextResponse, PageDom, ToContentScript, extract};
use dioxus::logger::tracing::{error, info};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, HtmlElement};

/// The live page as the user sees it. `innerText` leaves out scripts and hidden nodes.
struct LiveDocument(Document);

impl PageDom for LiveDocument {
	fn article_text(&self) -> Option<String> {
		self.0.query_selector("article").ok().flatten().and_then(|el| el.dyn_into::<HtmlElement>().ok()).map(|el| el.inner_text())
	}

	fn paragraph_texts(&self) -> Vec<String> {
		let Ok(paragraphs) = self.0.query_selector_all("p") else {
			return Vec::new();
		};
		(0..paragraphs.length())
			.filter_map(|i| paragraphs.item(i))
			.filter_map(|node| node.dyn_into::<HtmlElement>().ok())
			.map(|el| el.inner_text())
			.collect()
	}
}

fn read_article_text() -> String {
	web_sys::window().and_then(|w| w.document()).map(|document| extract(&LiveDocument(document))).unwrap_or_default()
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	dioxus::logger::initialize_default();

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			error!("[content_script] Failed to initialize: {}", e);
			return;
		},
	};

	let listener = match browser.runtime().and_then(|runtime| runtime.on_message::<ToContentScript>()) {
		Ok(l) => l,
		Err(e) => {
			error!("[content_script] Failed to get listener: {}", e);
			return;
		},
	};

	let attached = listener.add_deferred_listener(|msg, _sender, responder| match msg {
		ToContentScript::GetArticleText => {
			let text = read_article_text();
			info!("[content_script] Extracted {} characters", text.chars().count());
			if let Err(e) = responder.respond(&ArticleTextResponse::new(text)) {
				error!("[content_script] Failed to send response: {}", e);
			}
			// Keep the channel open for the reply
			true
		},
	});

	match attached {
		Ok(handle) => handle.persist(),
		Err(e) => error!("[content_script] Failed to attach listener: {}", e),
	}
}
