//! JSON snapshots of the platform configuration
//!
//! ```json
//! {
//!   "single_store_mode": false,
//!   "stores": [{ "id": 1, "code": "default" }],
//!   "default": { "general.isEnabled": true, "general.siteId": "abc" },
//!   "store": { "1": { "feed.isEnabled": "1" } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use salesfire::prelude::*;
use salesfire::types::Store;

use crate::{MemoryScopeConfig, MemoryStoreManager};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Snapshot {
	single_store_mode: bool,
	stores: Vec<Store>,
	default: HashMap<String, Value>,
	store: HashMap<String, HashMap<String, Value>>,
}

/// Converts a JSON value to the raw string form the platform stores
fn raw_value(path: &str, value: Value) -> SfResult<Option<String>> {
	match value {
		Value::Null => Ok(None),
		Value::Bool(b) => Ok(Some(if b { "1" } else { "0" }.to_string())),
		Value::Number(n) => Ok(Some(n.to_string())),
		Value::String(s) => Ok(Some(s)),
		Value::Array(_) | Value::Object(_) => {
			Err(Error::ConfigError(format!("Setting '{}' must be a scalar value", path)))
		}
	}
}

fn insert_values(
	config: &MemoryScopeConfig,
	scope: Scope,
	values: HashMap<String, Value>,
) -> SfResult<()> {
	for (path, value) in values {
		if let Some(raw) = raw_value(&path, value)? {
			config.set_value(path, scope, raw);
		}
	}
	Ok(())
}

/// Builds both collaborators from a JSON document
pub fn load_snapshot(json: &str) -> SfResult<(MemoryScopeConfig, MemoryStoreManager)> {
	let snapshot: Snapshot = serde_json::from_str(json)?;

	let config = MemoryScopeConfig::new();
	insert_values(&config, Scope::Default, snapshot.default)?;

	for (key, values) in snapshot.store {
		let store_id = key
			.parse::<u32>()
			.map(StoreId)
			.map_err(|_| Error::Parse(format!("Invalid store id: '{}'", key)))?;
		if store_id.is_admin() {
			return Err(Error::ConfigError(
				"Overrides for the admin store belong in \"default\"".into(),
			));
		}
		if !snapshot.stores.is_empty()
			&& !snapshot.stores.iter().any(|s| s.id == store_id)
		{
			return Err(Error::ConfigError(format!(
				"Overrides given for unknown store {}",
				store_id
			)));
		}
		insert_values(&config, Scope::Store(store_id), values)?;
	}

	info!(
		"Loaded configuration snapshot: {} values, {} stores",
		config.len(),
		snapshot.stores.len()
	);
	Ok((config, MemoryStoreManager::new(snapshot.stores, snapshot.single_store_mode)))
}

/// Reads a snapshot file, see [`load_snapshot`]
pub fn load_snapshot_file(
	path: impl AsRef<Path>,
) -> SfResult<(MemoryScopeConfig, MemoryStoreManager)> {
	let path = path.as_ref();
	debug!("Reading configuration snapshot from {:?}", path);
	let json = std::fs::read_to_string(path)?;
	load_snapshot(&json)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_raw_value() {
		assert_eq!(raw_value("a.b", Value::Bool(true)).ok().flatten().as_deref(), Some("1"));
		assert_eq!(raw_value("a.b", Value::Bool(false)).ok().flatten().as_deref(), Some("0"));
		assert_eq!(raw_value("a.b", serde_json::json!(42)).ok().flatten().as_deref(), Some("42"));
		assert!(matches!(raw_value("a.b", Value::Null), Ok(None)));
		assert!(matches!(
			raw_value("a.b", serde_json::json!(["x"])),
			Err(Error::ConfigError(_))
		));
	}
}

// vim: ts=4
