use parking_lot::RwLock;

use salesfire::prelude::*;
use salesfire::store_manager::StoreManager;
use salesfire::types::Store;

#[derive(Debug, Default)]
pub struct MemoryStoreManager {
	stores: RwLock<Vec<Store>>,
	single_store_mode: bool,
}

impl MemoryStoreManager {
	pub fn new(stores: Vec<Store>, single_store_mode: bool) -> Self {
		Self { stores: RwLock::new(stores), single_store_mode }
	}

	/// Registers a store, replacing one with the same id
	pub fn add_store(&self, store: Store) {
		let mut stores = self.stores.write();
		match stores.iter().position(|s| s.id == store.id) {
			Some(idx) => stores[idx] = store,
			None => stores.push(store),
		}
	}
}

impl StoreManager for MemoryStoreManager {
	/// Single-store mode needs the flag and at most one store
	fn is_single_store_mode(&self) -> bool {
		self.single_store_mode && self.stores.read().len() <= 1
	}

	fn list_stores(&self) -> SfResult<Vec<Store>> {
		Ok(self.stores.read().clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store(id: u32, code: &str) -> Store {
		Store { id: StoreId(id), code: code.into() }
	}

	#[test]
	fn test_single_store_mode_needs_single_store() {
		let manager = MemoryStoreManager::new(vec![store(1, "default")], true);
		assert!(manager.is_single_store_mode());

		manager.add_store(store(2, "fr"));
		assert!(!manager.is_single_store_mode());
	}

	#[test]
	fn test_single_store_mode_flag_off() {
		let manager = MemoryStoreManager::new(vec![store(1, "default")], false);
		assert!(!manager.is_single_store_mode());
	}

	#[test]
	fn test_add_store_replaces_same_id() {
		let manager = MemoryStoreManager::default();
		manager.add_store(store(1, "default"));
		manager.add_store(store(1, "main"));
		let stores = manager.list_stores().unwrap_or_default();
		assert_eq!(stores, vec![store(1, "main")]);
	}
}

// vim: ts=4
