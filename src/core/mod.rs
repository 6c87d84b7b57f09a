//! Core functionality for the Gateway
//!
//! Provider clients, the traits they implement, and the clinical pipeline
//! built on top of them.

pub mod pipeline;
pub mod providers;
pub mod traits;
