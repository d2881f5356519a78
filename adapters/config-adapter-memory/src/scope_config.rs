use std::collections::HashMap;

use parking_lot::RwLock;

use salesfire::prelude::*;
use salesfire::scope_config::ScopeConfig;

#[derive(Debug, Default)]
pub struct MemoryScopeConfig {
	values: RwLock<HashMap<(Scope, String), String>>,
}

impl MemoryScopeConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a raw value. Returns the previous value at that exact scope.
	pub fn set_value(
		&self,
		path: impl Into<String>,
		scope: Scope,
		value: impl Into<String>,
	) -> Option<String> {
		let path = path.into();
		debug!("Setting '{}' at {} scope", path, scope);
		self.values.write().insert((scope, path), value.into())
	}

	/// Removes a value, so lookups fall back to the next level
	pub fn remove_value(&self, path: &str, scope: Scope) -> Option<String> {
		self.values.write().remove(&(scope, path.to_string()))
	}

	pub fn len(&self) -> usize {
		self.values.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.read().is_empty()
	}
}

impl ScopeConfig for MemoryScopeConfig {
	fn get_value(&self, path: &str, scope: Scope) -> SfResult<Option<String>> {
		let values = self.values.read();

		if let Scope::Store(_) = scope {
			if let Some(value) = values.get(&(scope, path.to_string())) {
				return Ok(Some(value.clone()));
			}
		}

		Ok(values.get(&(Scope::Default, path.to_string())).cloned())
	}
}


// vim: ts=4
