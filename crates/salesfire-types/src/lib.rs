//! Shared types, collaborator traits, and core utilities for the Salesfire
//! store configuration accessor.
//!
//! This crate contains the types shared between the accessor crate and the
//! collaborator adapters. Adapters implement [`scope_config::ScopeConfig`] and
//! [`store_manager::StoreManager`]; the accessor only ever sees those traits.

pub mod error;
pub mod prelude;
pub mod scope_config;
pub mod store_manager;
pub mod types;

// vim: ts=4
