//! Store enumeration service adapter

use std::fmt::Debug;

use crate::prelude::*;
use crate::types::Store;

pub trait StoreManager: Debug + Send + Sync {
	/// Whether the platform runs a single store only
	fn is_single_store_mode(&self) -> bool;

	/// Lists all stores (the admin store excluded)
	fn list_stores(&self) -> SfResult<Vec<Store>>;
}

// vim: ts=4
