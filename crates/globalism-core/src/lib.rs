// crates/globalism-core/src/lib.rs

//! Country reference data with address templating, phone masks and plain
//! currency formatting.
//!
//! ```
//! use globalism_core::{AddressComponents, AddressField, CountryDb, CountryLookup};
//!
//! let db = CountryDb::load()?;
//! let us = db.find_country_by_code("US").expect("US is in the dataset");
//!
//! assert_eq!(us.format_phone("5551234567", false), "(555) 123-4567");
//!
//! let parts = AddressComponents::new()
//!     .with(AddressField::HouseNumber, "1600")
//!     .with(AddressField::Road, "Pennsylvania Ave NW")
//!     .with(AddressField::City, "Washington")
//!     .with(AddressField::StateCode, "DC")
//!     .with(AddressField::Postcode, "20500");
//! assert!(us.format_address(&parts).is_some());
//! # Ok::<(), globalism_core::GlobalismError>(())
//! ```

pub mod address;
pub mod common;
pub mod currency;
pub mod error;
pub mod loader; // Embedded + on-disk datasets
pub mod model;
pub mod phone;
pub mod postal;
pub mod prelude;
pub mod search; // CountryLookup impl
pub mod text;
pub mod traits;
// Serde shape of the dataset file
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GlobalismError, Result};
pub use model::{Country, CountryDb, CountryGroup, GroupingType, Language};
pub use crate::common::DbStats;
pub use crate::traits::{AddressConventions, CountryLookup, NameMatch, PhoneConventions};
pub use crate::address::{AddressComponents, AddressField};
pub use crate::phone::{PhoneNumberState, PhoneStatus};
