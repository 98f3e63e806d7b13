use common::settings;
use dioxus::{
	logger::tracing::{Level, error},
	prelude::*,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use webext_api::{api::StorageArea, error::ExtensionError};

fn sync_storage() -> Result<StorageArea, ExtensionError> {
	webext_api::init()?.storage()?.sync()
}

async fn load_api_key() -> Result<Option<String>, ExtensionError> {
	sync_storage()?.get::<String>(settings::API_KEY).await
}

async fn save_api_key(api_key: &str) -> Result<(), ExtensionError> {
	sync_storage()?.set(settings::API_KEY, &api_key.trim()).await
}

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(Level::DEBUG).expect("dioxus logger");
	dioxus::launch(App);
}

#[component]
fn App() -> Element {
	let mut api_key = use_signal(String::new);
	let mut status_message = use_signal(String::new);

	use_effect(move || {
		spawn(async move {
			match load_api_key().await {
				Ok(Some(key)) => api_key.set(key),
				Ok(None) => {},
				Err(e) => error!("[options] Could not load the API key: {}", e),
			}
		});
	});

	let on_save = move |_| async move {
		let key = api_key();
		if key.trim().is_empty() {
			status_message.set("Please enter an API key.".to_string());
			return;
		}
		match save_api_key(&key).await {
			Ok(()) => {
				status_message.set("API key saved.".to_string());
				TimeoutFuture::new(3_000).await;
				status_message.set(String::new());
			},
			Err(e) => status_message.set(format!("Error saving settings: {e}")),
		}
	};

	rsx! {
		div { class: "max-w-md mx-auto mt-10 p-6 bg-white rounded-lg shadow-md",
			h1 { class: "text-2xl font-bold text-gray-800 mb-6", "Summarizer Options" }
			div { class: "mb-6",
				label {
					class: "block text-sm font-medium text-gray-700 mb-1",
					r#for: "api_key",
					"Gemini API Key"
				}
				input {
					class: "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
					id: "api_key",
					r#type: "password",
					placeholder: "Paste your Gemini API key",
					value: "{api_key}",
					oninput: move |evt| api_key.set(evt.value()),
				}
			}
			button {
				class: "w-full px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700",
				onclick: on_save,
				"Save"
			}
			if !status_message().is_empty() {
				p { class: "mt-4 text-sm text-center text-green-600", "{status_message}" }
			}
		}
	}
}
