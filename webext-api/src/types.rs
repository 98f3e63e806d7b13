use crate::error::ExtensionError;
use js_sys::{Function, Object};
use serde::Deserialize;
use wasm_bindgen::{JsCast, prelude::*};

/// Keeps a listener registered; dropping it calls `removeListener`.
pub struct ListenerHandle<T: ?Sized> {
	target: Object,
	closure: Closure<T>,
}

impl<T: ?Sized> ListenerHandle<T> {
	/// Keeps the listener registered for the lifetime of the page.
	pub fn persist(self) {
		let _ = Box::leak(Box::new(self));
	}
}

impl<T: ?Sized> Drop for ListenerHandle<T> {
	fn drop(&mut self) {
		if let Ok(remove_listener_fn) = js_sys::Reflect::get(&self.target, &"removeListener".into()).and_then(|v| v.dyn_into::<Function>()) {
			let _ = remove_listener_fn.call1(&self.target, self.closure.as_ref());
		}
	}
}

pub(crate) fn attach_listener<T: ?Sized + 'static>(target: &Object, closure: Closure<T>) -> Result<ListenerHandle<T>, ExtensionError> {
	let add_listener_fn: Function =
		js_sys::Reflect::get(target, &"addListener".into())?.dyn_into().map_err(|_| ExtensionError::ApiNotFound("addListener".to_owned()))?;
	add_listener_fn.call1(target, closure.as_ref())?;
	Ok(ListenerHandle { target: target.clone(), closure })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserType {
	Chrome,
	Firefox,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
	pub id: Option<i32>,
	pub title: Option<String>,
	pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
	pub id: Option<String>,
	pub url: Option<String>,
	pub tab: Option<TabInfo>,
}
