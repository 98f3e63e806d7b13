use thiserror::Error;
use wasm_bindgen::{JsCast, prelude::*};

/// Chrome and Firefox both reject `tabs.sendMessage` with this text when no listener is installed.
const NO_RECEIVER: &str = "Receiving end does not exist";

#[derive(Error, Debug)]
pub enum ExtensionError {
	#[error("The `{0}` API is not available in this context.")]
	ApiNotFound(String),

	#[error("There is no active tab.")]
	TabNotFound,

	#[error("This browser is not supported or no extension API was found.")]
	UnsupportedBrowser,

	#[error("Nothing in the target context is listening for messages.")]
	NoReceiver,

	#[error("Failed to serialize or deserialize data: {0}")]
	SerializationError(#[from] serde_wasm_bindgen::Error),

	#[error("The browser API returned an error: {0}")]
	ApiError(String),

	#[error("An unexpected JavaScript value was thrown: {0:?}")]
	JsValue(JsValue),
}

impl From<JsValue> for ExtensionError {
	fn from(js_val: JsValue) -> Self {
		let message = js_val
			.dyn_ref::<js_sys::Object>()
			.and_then(|obj| js_sys::Reflect::get(obj, &"message".into()).ok())
			.and_then(|message_val| message_val.as_string())
			.or_else(|| js_val.as_string());

		match message {
			Some(message) if message.contains(NO_RECEIVER) => Self::NoReceiver,
			Some(message) => Self::ApiError(message),
			None => Self::JsValue(js_val),
		}
	}
}
