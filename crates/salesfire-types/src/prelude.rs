pub use crate::error::{Error, SfResult};
pub use crate::types::{Scope, StoreId};
pub use tracing::{debug, error, info, warn};

// vim: ts=4
