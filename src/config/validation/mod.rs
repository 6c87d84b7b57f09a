//! Configuration validation
//!
//! - `trait_def`: core Validate trait definition
//! - `config_validators`: whole-gateway validator
//! - `tests`: test suite for the validators

mod config_validators;
mod trait_def;

pub use trait_def::Validate;
