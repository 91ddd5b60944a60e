#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Naming helpers shared by the genopts compiler and its backends.
//!
//! Every identifier that ends up in generated source goes through this crate,
//! so all backends agree on field names derived from command-line tokens.

pub mod utils;
