//! Scoped configuration store adapter
//!
//! The host platform keeps configuration values per scope. Implementations
//! are expected to resolve store-scope lookups the way the platform does,
//! i.e. fall back to the default scope when a store has no override.

use std::fmt::Debug;

use crate::prelude::*;

pub trait ScopeConfig: Debug + Send + Sync {
	/// Reads the raw value of a setting path at the given scope
	///
	/// Returns `Ok(None)` when the setting is not configured.
	fn get_value(&self, path: &str, scope: Scope) -> SfResult<Option<String>>;
}

// vim: ts=4
