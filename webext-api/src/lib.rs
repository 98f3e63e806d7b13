pub mod api;
pub mod error;
mod js;
pub mod types;

use api::{Runtime, Storage, Tabs};
use error::ExtensionError;
use js_sys::Object;
pub use types::*;
use wasm_bindgen::prelude::*;

/// Entry point to the extension APIs of whichever browser the code runs in.
#[derive(Clone)]
pub struct Browser {
	api_root: Object,
	browser_type: BrowserType,
}

impl Browser {
	pub fn browser_type(&self) -> BrowserType {
		self.browser_type
	}

	pub fn runtime(&self) -> Result<Runtime, ExtensionError> {
		Runtime::new(&self.api_root)
	}

	pub fn storage(&self) -> Result<Storage, ExtensionError> {
		Storage::new(&self.api_root)
	}

	pub fn tabs(&self) -> Result<Tabs, ExtensionError> {
		Tabs::new(&self.api_root)
	}
}

pub fn init() -> Result<Browser, ExtensionError> {
	let window = web_sys::window().ok_or_else(|| ExtensionError::ApiNotFound("window".into()))?;

	if let Ok(api_root) = js_sys::Reflect::get(&window, &"chrome".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { api_root, browser_type: BrowserType::Chrome })
	} else if let Ok(api_root) = js_sys::Reflect::get(&window, &"browser".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { api_root, browser_type: BrowserType::Firefox })
	} else {
		Err(ExtensionError::UnsupportedBrowser)
	}
}
