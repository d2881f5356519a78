//! Store-scoped configuration accessor for the Salesfire extension
//!
//! # Architecture
//!
//! - **Paths** (`path.rs`): The fixed table of setting paths
//! - **Code** (`code.rs`): Attribute code normalization and flag parsing
//! - **Accessor** (`accessor.rs`): `SalesfireConfig`, typed getters over the
//!   injected collaborators
//! - **Store views** (`store_view.rs`): Store/site descriptors
//! - **Feed** (`feed.rs`): Per-scope snapshot of the feed settings
//!
//! The accessor never caches. Every getter is a read from the scoped
//! configuration store followed by trimming or normalization.

pub mod accessor;
pub mod code;
pub mod feed;
pub mod path;
pub mod store_view;

pub use accessor::SalesfireConfig;
pub use code::strip_code;
pub use feed::FeedSettings;
pub use path::SettingPath;
pub use store_view::StoreDescriptor;

/// Version of the extension this accessor belongs to
pub const VERSION: &str = "1.3.0";

// vim: ts=4
