mod bridge;

use bridge::{ActiveTabReader, SyncSettings, gemini_client, open_options_page};
use common::{AppError, InteractionController, Outcome, SummaryMode, Theme};
use dioxus::{
	logger::tracing::{Level, warn},
	prelude::*,
	web::{Config, launch::launch_cfg},
};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

type Controller = InteractionController<ActiveTabReader, SyncSettings, common::GeminiClient>;

#[derive(Clone, PartialEq)]
enum AppState {
	Idle,
	Loading,
	Success(String),
	Error(AppError),
}

impl From<Outcome> for AppState {
	fn from(outcome: Outcome) -> Self {
		match outcome {
			Outcome::Failed(error) => Self::Error(error),
			answer => Self::Success(answer.display_text()),
		}
	}
}

fn theme_classes(theme: Theme) -> &'static str {
	match theme {
		Theme::Dark => "bg-gray-900 text-gray-100",
		Theme::Light => "bg-white text-gray-800",
	}
}

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

#[component]
fn App() -> Element {
	let mut app_state = use_signal(|| AppState::Idle);
	let mut mode = use_signal(SummaryMode::default);
	let mut question = use_signal(String::new);
	let mut ask_visible = use_signal(|| false);
	let mut theme = use_signal(Theme::default);
	let controller: Rc<Controller> = use_hook(|| Rc::new(InteractionController::new(ActiveTabReader, SyncSettings, gemini_client())));

	use_effect(move || {
		spawn(async move {
			theme.set(SyncSettings::theme().await);
		});
	});

	let on_theme_toggle = move |_| async move {
		let next = theme().toggled();
		theme.set(next);
		if let Err(e) = SyncSettings::set_theme(next).await {
			warn!("[popup] Could not save the theme: {}", e);
		}
	};

	let summarize_controller = controller.clone();
	let on_summarize_click = move |_| {
		let controller = summarize_controller.clone();
		async move {
			ask_visible.set(false);
			app_state.set(AppState::Loading);
			let outcome = controller.summarize(mode()).await;
			if outcome.is_success() {
				ask_visible.set(true);
			}
			app_state.set(outcome.into());
		}
	};

	let on_ask_click = move |_| {
		let controller = controller.clone();
		async move {
			app_state.set(AppState::Loading);
			let outcome = controller.ask(&question()).await;
			app_state.set(outcome.into());
		}
	};

	let is_loading = matches!(app_state(), AppState::Loading);
	let root_class = format!("w-[360px] min-h-[250px] p-4 {}", theme_classes(theme()));
	let mode_options = SummaryMode::iter().map(|m| (m.to_string(), m.label())).collect::<Vec<_>>();

	rsx! {
		div { class: "{root_class}",
			div { class: "flex items-center justify-between mb-4",
				h1 { class: "text-lg font-bold", "AI Page Summarizer" }
				label { class: "flex items-center gap-1 text-xs cursor-pointer",
					input {
						r#type: "checkbox",
						checked: theme() == Theme::Dark,
						onchange: on_theme_toggle,
					}
					"Dark"
				}
			}
			div { class: "flex gap-2",
				select {
					class: "flex-1 px-2 py-2 border border-gray-300 rounded-md text-sm text-gray-800",
					value: "{mode}",
					onchange: move |evt| mode.set(SummaryMode::from_name(&evt.value())),
					for (value, label) in mode_options {
						option { value: "{value}", "{label}" }
					}
				}
				button {
					class: "px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
					disabled: is_loading,
					onclick: on_summarize_click,
					if is_loading {
						"Working..."
					} else {
						"Summarize"
					}
				}
			}
			div { class: "relative mt-4 p-3 border border-gray-200 rounded-md min-h-[120px] text-sm leading-relaxed",
				match app_state() {
						AppState::Idle => rsx! {
							p { class: "text-gray-500", "Select a summary type and click Summarize." }
						},
						AppState::Loading => rsx! {
							div { class: "absolute inset-0 flex items-center justify-center",
								div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
							}
						},
						AppState::Success(text) => rsx! {
							ResultView { text }
						},
						AppState::Error(error) => {
							let message = error.display_text();
							rsx! {
								p { class: "text-red-600 font-medium", "{message}" }
								if error == AppError::MissingApiKey {
									p { class: "mt-2 text-sm",
										"You can set it in the "
										button {
											class: "text-blue-600 hover:underline font-semibold bg-transparent border-none p-0 cursor-pointer",
											onclick: move |_| {
													spawn(open_options_page());
											},
											"extension options."
										}
									}
								}
							}
						},
				}
			}
			if ask_visible() {
				div { class: "mt-4 flex gap-2",
					input {
						class: "flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm text-gray-800",
						r#type: "text",
						placeholder: "Ask a question about this article",
						value: "{question}",
						oninput: move |evt| question.set(evt.value()),
					}
					button {
						class: "px-4 py-2 text-white font-semibold rounded-md shadow-sm bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 disabled:cursor-not-allowed",
						disabled: is_loading,
						onclick: on_ask_click,
						"Ask"
					}
				}
			}
		}
	}
}

#[component]
fn ResultView(text: String) -> Element {
	let mut copy_text = use_signal(|| "Copy".to_string());
	rsx! {
		pre { class: "whitespace-pre-wrap font-sans pr-12", "{text}" }
		button {
			class: "absolute top-2 right-2 px-2 py-1 text-xs font-medium text-gray-600 bg-gray-200 hover:bg-gray-300 rounded-md transition-all",
			onclick: move |_| {
					to_owned![text];
					async move {
							let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) else {
									return;
							};
							if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
									copy_text.set("Copied!".to_owned());
							} else {
									copy_text.set("Failed!".to_owned());
							}
							TimeoutFuture::new(1_500).await;
							copy_text.set("Copy".to_owned());
					}
			},
			"{copy_text}"
		}
	}
}
