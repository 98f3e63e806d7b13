use crate::{
	error::ExtensionError,
	js::{call_async_fn, from_optional, get_api_namespace},
};
use js_sys::{Object, Reflect};
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;

#[derive(Clone)]
pub struct Storage {
	api: Object,
}

impl Storage {
	pub(crate) fn new(api_root: &Object) -> Result<Self, ExtensionError> {
		Ok(Self { api: get_api_namespace(api_root, "storage")? })
	}

	/// Storage that follows the user's browser profile across devices.
	pub fn sync(&self) -> Result<StorageArea, ExtensionError> {
		Ok(StorageArea { api: get_api_namespace(&self.api, "sync")? })
	}
}

#[derive(Clone)]
pub struct StorageArea {
	api: Object,
}

impl StorageArea {
	pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ExtensionError> {
		let items = call_async_fn(&self.api, "get", &[key.into()]).await?;
		from_optional(Reflect::get(&items, &key.into())?)
	}

	pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ExtensionError> {
		let items = Object::new();
		Reflect::set(&items, &key.into(), &to_value(value)?)?;
		call_async_fn(&self.api, "set", &[items.into()]).await?;
		Ok(())
	}
}
