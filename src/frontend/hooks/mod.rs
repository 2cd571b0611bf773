//! Reusable hooks for common UI patterns

mod use_variant_search;

pub use use_variant_search::*;
