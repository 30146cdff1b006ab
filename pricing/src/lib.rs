//! Static pricing data for the quote estimator: material, quality, and
//! finish tables plus the global shop constants. Immutable after load.

pub mod addons;
pub mod catalog;
pub mod entries;
