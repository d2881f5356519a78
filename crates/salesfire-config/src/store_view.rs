//! Store/site descriptors

use serde::Serialize;

use salesfire_types::types::StoreId;

/// A store paired with the Salesfire site it reports to
///
/// `store_id` is `None` when the platform runs in single-store mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDescriptor {
	pub store_id: Option<StoreId>,
	pub site_id: String,
}

// vim: ts=4
