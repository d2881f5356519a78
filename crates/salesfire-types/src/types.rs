//! Store identifiers and configuration scopes

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque store identifier as assigned by the host platform
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StoreId(pub u32);

impl StoreId {
	/// The admin store. It never carries store-level overrides.
	pub const ADMIN: StoreId = StoreId(0);

	pub fn is_admin(self) -> bool {
		self == Self::ADMIN
	}
}

impl std::fmt::Display for StoreId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u32> for StoreId {
	fn from(id: u32) -> Self {
		StoreId(id)
	}
}

impl Serialize for StoreId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_u32(self.0)
	}
}

impl<'de> Deserialize<'de> for StoreId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(StoreId(u32::deserialize(deserializer)?))
	}
}

/// Configuration resolution level
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Scope {
	/// Global values, used when no store is given
	Default,
	/// Per-store overrides
	Store(StoreId),
}

impl Scope {
	/// Pick the scope for an optional store id.
	///
	/// A missing store id and the admin store both resolve to the default scope.
	pub fn resolve(store_id: Option<StoreId>) -> Self {
		match store_id {
			Some(id) if !id.is_admin() => Scope::Store(id),
			_ => Scope::Default,
		}
	}

	pub fn store_id(self) -> Option<StoreId> {
		match self {
			Scope::Default => None,
			Scope::Store(id) => Some(id),
		}
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Scope::Default => write!(f, "default"),
			Scope::Store(id) => write!(f, "store:{}", id),
		}
	}
}

/// Store as reported by the store enumeration service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
	pub id: StoreId,
	#[serde(default)]
	pub code: String,
}


// vim: ts=4
