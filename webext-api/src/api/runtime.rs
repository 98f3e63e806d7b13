use crate::{
	error::ExtensionError,
	js::{call_async_fn, get_api_namespace},
	types::{ListenerHandle, MessageSender, attach_listener},
};
use js_sys::{Function, Object};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use wasm_bindgen::{JsValue, prelude::*};

#[derive(Clone)]
pub struct Runtime {
	api: Object,
}

impl Runtime {
	pub(crate) fn new(api_root: &Object) -> Result<Self, ExtensionError> {
		Ok(Self { api: get_api_namespace(api_root, "runtime")? })
	}

	pub fn on_message<T: DeserializeOwned + 'static>(&self) -> Result<OnMessage<T>, ExtensionError> {
		Ok(OnMessage { api: get_api_namespace(&self.api, "onMessage")?, _phantom: PhantomData })
	}

	pub async fn open_options_page(&self) -> Result<(), ExtensionError> {
		call_async_fn(&self.api, "openOptionsPage", &[]).await?;
		Ok(())
	}
}

/// The `sendResponse` callback handed to a message listener. Consumed by the one reply it sends.
pub struct Responder {
	send_response: Function,
}

impl Responder {
	pub fn respond<R: Serialize>(self, reply: &R) -> Result<(), ExtensionError> {
		let value = serde_wasm_bindgen::to_value(reply)?;
		self.send_response.call1(&JsValue::UNDEFINED, &value)?;
		Ok(())
	}
}

pub struct OnMessage<T: DeserializeOwned + 'static> {
	api: Object,
	_phantom: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> OnMessage<T> {
	/// Registers a listener that answers through a [`Responder`].
	///
	/// The callback returns `true` when it has taken the responder and will reply, which tells
	/// the browser to keep the reply channel open. Messages that do not deserialize into `T`
	/// are left for other listeners.
	pub fn add_deferred_listener(
		&self,
		mut callback: impl FnMut(T, MessageSender, Responder) -> bool + 'static,
	) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue, JsValue) -> bool>, ExtensionError> {
		attach_listener(
			&self.api,
			Closure::wrap(Box::new(move |message: JsValue, sender: JsValue, send_response: JsValue| {
				let (Ok(msg), Ok(sender), Ok(send_response)) =
					(serde_wasm_bindgen::from_value(message), serde_wasm_bindgen::from_value(sender), send_response.dyn_into::<Function>())
				else {
					return false;
				};
				callback(msg, sender, Responder { send_response })
			}) as Box<dyn FnMut(JsValue, JsValue, JsValue) -> bool>),
		)
	}
}
