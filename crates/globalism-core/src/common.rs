// crates/globalism-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CountryLookup::stats`](crate::CountryLookup::stats), these
/// counts reflect the materialized in-memory database after any filtering
/// that might have been applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub languages: usize,
    pub groups: usize,
}
