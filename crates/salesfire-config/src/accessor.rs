//! Typed access to the Salesfire settings

use std::sync::Arc;

use salesfire_types::prelude::*;
use salesfire_types::scope_config::ScopeConfig;
use salesfire_types::store_manager::StoreManager;

use crate::code::{is_truthy, split_codes, strip_code};
use crate::feed::FeedSettings;
use crate::path::SettingPath;
use crate::store_view::StoreDescriptor;

/// Salesfire configuration accessor
///
/// Every getter takes an optional store id. `None` (or the admin store) reads
/// the default scope, anything else reads the store scope.
#[derive(Debug, Clone)]
pub struct SalesfireConfig {
	scope_config: Arc<dyn ScopeConfig>,
	store_manager: Arc<dyn StoreManager>,
	legacy_attribute_codes: bool,
}

impl SalesfireConfig {
	pub fn new(scope_config: Arc<dyn ScopeConfig>, store_manager: Arc<dyn StoreManager>) -> Self {
		Self { scope_config, store_manager, legacy_attribute_codes: false }
	}

	/// Read the additional attribute codes from the colour code setting.
	///
	/// Earlier releases of the extension did this instead of reading
	/// `feed.attributeCodes`. Off by default.
	pub fn with_legacy_attribute_codes(mut self, legacy: bool) -> Self {
		self.legacy_attribute_codes = legacy;
		self
	}

	/// Version of the extension
	pub fn version(&self) -> &'static str {
		crate::VERSION
	}

	pub fn is_single_store_mode(&self) -> bool {
		self.store_manager.is_single_store_mode()
	}

	/// Lists every store with its site id
	pub fn list_store_descriptors(&self) -> SfResult<Vec<StoreDescriptor>> {
		if self.store_manager.is_single_store_mode() {
			return Ok(vec![StoreDescriptor { store_id: None, site_id: self.site_id(None) }]);
		}

		let stores = self.store_manager.list_stores()?;
		debug!("Listing descriptors for {} stores", stores.len());
		Ok(stores
			.into_iter()
			.map(|store| StoreDescriptor {
				store_id: Some(store.id),
				site_id: self.site_id(Some(store.id)),
			})
			.collect())
	}

	/// Lists the stores Salesfire is ready to use on
	pub fn available_store_descriptors(&self) -> SfResult<Vec<StoreDescriptor>> {
		Ok(self
			.list_store_descriptors()?
			.into_iter()
			.filter(|desc| !desc.site_id.is_empty() && self.is_enabled(desc.store_id))
			.collect())
	}

	/// Whether Salesfire is ready to use: a site id is set and the
	/// integration is enabled
	pub fn is_available(&self, store_id: Option<StoreId>) -> bool {
		!self.site_id(store_id).is_empty() && self.is_enabled(store_id)
	}

	pub fn is_enabled(&self, store_id: Option<StoreId>) -> bool {
		is_truthy(&self.value(SettingPath::GeneralEnabled, store_id))
	}

	pub fn site_id(&self, store_id: Option<StoreId>) -> String {
		self.value(SettingPath::GeneralSiteId, store_id)
	}

	pub fn is_feed_enabled(&self, store_id: Option<StoreId>) -> bool {
		is_truthy(&self.value(SettingPath::FeedEnabled, store_id))
	}

	pub fn default_brand(&self, store_id: Option<StoreId>) -> String {
		self.value(SettingPath::FeedDefaultBrand, store_id)
	}

	pub fn brand_code(&self, store_id: Option<StoreId>) -> String {
		self.code(SettingPath::FeedBrandCode, store_id)
	}

	pub fn gender_code(&self, store_id: Option<StoreId>) -> String {
		self.code(SettingPath::FeedGenderCode, store_id)
	}

	pub fn age_group_code(&self, store_id: Option<StoreId>) -> String {
		self.code(SettingPath::FeedAgeGroupCode, store_id)
	}

	pub fn colour_code(&self, store_id: Option<StoreId>) -> String {
		self.code(SettingPath::FeedColourCode, store_id)
	}

	/// Additional attribute codes to include in the feed
	pub fn attribute_codes(&self, store_id: Option<StoreId>) -> Vec<String> {
		let path = if self.legacy_attribute_codes {
			SettingPath::FeedColourCode
		} else {
			SettingPath::FeedAttributeCodes
		};
		split_codes(&self.value(path, store_id))
	}

	/// Resolves all feed settings for a scope at once
	pub fn feed_settings(&self, store_id: Option<StoreId>) -> FeedSettings {
		FeedSettings {
			enabled: self.is_feed_enabled(store_id),
			default_brand: self.default_brand(store_id),
			brand_code: self.brand_code(store_id),
			gender_code: self.gender_code(store_id),
			age_group_code: self.age_group_code(store_id),
			colour_code: self.colour_code(store_id),
			attribute_codes: self.attribute_codes(store_id),
		}
	}

	fn code(&self, path: SettingPath, store_id: Option<StoreId>) -> String {
		strip_code(Some(&self.value(path, store_id)))
	}

	/// Reads a trimmed setting value, empty if unset
	///
	/// Store errors are logged and read as unset.
	fn value(&self, path: SettingPath, store_id: Option<StoreId>) -> String {
		let scope = Scope::resolve(store_id);
		match self.scope_config.get_value(path.as_str(), scope) {
			Ok(value) => value.as_deref().unwrap_or_default().trim().to_string(),
			Err(err) => {
				warn!("Failed to read setting '{}' at {} scope: {}", path, scope, err);
				String::new()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use salesfire_types::types::Store;

	#[derive(Debug)]
	struct FailingConfig;

	impl ScopeConfig for FailingConfig {
		fn get_value(&self, _path: &str, _scope: Scope) -> SfResult<Option<String>> {
			Err(Error::ServiceUnavailable("config store offline".into()))
		}
	}

	#[derive(Debug)]
	struct FailingStores;

	impl StoreManager for FailingStores {
		fn is_single_store_mode(&self) -> bool {
			false
		}

		fn list_stores(&self) -> SfResult<Vec<Store>> {
			Err(Error::ServiceUnavailable("store service offline".into()))
		}
	}

	#[test]
	fn test_store_errors_read_as_unset() {
		let config = SalesfireConfig::new(Arc::new(FailingConfig), Arc::new(FailingStores));
		assert_eq!(config.site_id(None), "");
		assert!(!config.is_enabled(Some(StoreId(3))));
		assert!(!config.is_available(None));
		assert_eq!(config.attribute_codes(None), vec![""]);
	}

	#[test]
	fn test_store_listing_error_propagates() {
		let config = SalesfireConfig::new(Arc::new(FailingConfig), Arc::new(FailingStores));
		assert!(matches!(config.list_store_descriptors(), Err(Error::ServiceUnavailable(_))));
	}

	#[test]
	fn test_version() {
		let config = SalesfireConfig::new(Arc::new(FailingConfig), Arc::new(FailingStores));
		assert_eq!(config.version(), "1.3.0");
	}
}

// vim: ts=4
