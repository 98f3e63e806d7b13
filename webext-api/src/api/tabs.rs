use crate::{
	error::ExtensionError,
	js::{call_async_fn, from_optional, get_api_namespace},
	types::TabInfo,
};
use js_sys::{Array, Object, Reflect};
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct Tabs {
	api: Object,
}

impl Tabs {
	pub(crate) fn new(api_root: &Object) -> Result<Self, ExtensionError> {
		Ok(Self { api: get_api_namespace(api_root, "tabs")? })
	}

	/// The active tab of the current window.
	pub async fn get_active(&self) -> Result<TabInfo, ExtensionError> {
		let query = Object::new();
		Reflect::set(&query, &"active".into(), &true.into())?;
		Reflect::set(&query, &"currentWindow".into(), &true.into())?;
		let tabs: Array = call_async_fn(&self.api, "query", &[query.into()]).await?.dyn_into()?;
		match tabs.iter().next() {
			Some(tab) => serde_wasm_bindgen::from_value(tab).map_err(Into::into),
			None => Err(ExtensionError::TabNotFound),
		}
	}

	/// Sends `message` to the content scripts of `tab_id`. A reply of `undefined` is `Ok(None)`;
	/// a tab without a listener fails with [`ExtensionError::NoReceiver`].
	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, tab_id: u32, message: &M) -> Result<Option<R>, ExtensionError> {
		let reply = call_async_fn(&self.api, "sendMessage", &[tab_id.into(), to_value(message)?]).await?;
		from_optional(reply)
	}
}
