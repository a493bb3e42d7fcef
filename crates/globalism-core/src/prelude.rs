// crates/globalism-core/src/prelude.rs
//! Common types and traits in one import: `use globalism_core::prelude::*;`

pub use crate::address::{AddressComponents, AddressField};
pub use crate::currency::{format_currency, CurrencyFormat};
pub use crate::error::{GlobalismError, Result};
pub use crate::model::{Country, CountryDb, CountryGroup, GroupingType, Language};
pub use crate::phone::{PhoneNumberState, PhoneStatus};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{AddressConventions, CountryLookup, NameMatch, PhoneConventions};
