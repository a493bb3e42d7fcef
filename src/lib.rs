// src/lib.rs
pub use globalism_core::*;
