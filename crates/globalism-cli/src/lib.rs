//! globalism-cli
//! =============
//!
//! Command-line interface for the `globalism-core` country reference data.
//!
//! This crate primarily provides a binary (`globalism`). The library target
//! only exists so that the overview below is rendered with the docs.
//!
//! Basic usage:
//!
//! ```text
//! globalism --help
//! globalism stats
//! globalism country US
//! globalism phone GB 2079460958
//! globalism address DE -c road="Unter den Linden" -c house_number=77 -c postcode=10117 -c city=Berlin
//! globalism --json currency JP 1500
//! ```
//!
//! For programmatic access use the [`globalism-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
