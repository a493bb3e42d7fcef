// crates/globalism-core/src/model/mod.rs
pub mod convert;
pub mod domain;

pub use domain::{Country, CountryDb, CountryGroup, GroupingType, Language};
