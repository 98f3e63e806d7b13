use crate::error::ExtensionError;
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

pub(crate) fn get_api_namespace(root: &JsValue, name: &str) -> Result<Object, ExtensionError> {
	Reflect::get(root, &name.into())
		.ok()
		.filter(|value| !value.is_undefined() && !value.is_null())
		.and_then(|value| value.dyn_into().ok())
		.ok_or_else(|| ExtensionError::ApiNotFound(name.to_owned()))
}

/// Calls a promise-returning API method and waits for it to settle.
pub(crate) async fn call_async_fn(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, ExtensionError> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into().map_err(|_| ExtensionError::ApiNotFound(method.to_owned()))?;
	let promise: Promise = func.apply(api, &args.iter().cloned().collect::<Array>())?.dyn_into()?;
	JsFuture::from(promise).await.map_err(Into::into)
}

/// `undefined` and `null` come back as `None`.
pub(crate) fn from_optional<T: DeserializeOwned>(value: JsValue) -> Result<Option<T>, ExtensionError> {
	if value.is_undefined() || value.is_null() { Ok(None) } else { serde_wasm_bindgen::from_value(value).map(Some).map_err(Into::into) }
}
