//! In-memory collaborators for the Salesfire configuration accessor
//!
//! `MemoryScopeConfig` keeps raw values per scope and resolves store lookups
//! with a fallback to the default scope. `MemoryStoreManager` holds a fixed
//! store list. Both can be built from a JSON snapshot (see [`snapshot`]).

mod scope_config;
mod snapshot;
mod store_manager;

pub use scope_config::MemoryScopeConfig;
pub use snapshot::{load_snapshot, load_snapshot_file};
pub use store_manager::MemoryStoreManager;

// vim: ts=4
