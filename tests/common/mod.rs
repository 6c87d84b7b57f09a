//! Common test utilities for medtalk-gateway
//!
//! - Request fixtures
//! - wiremock provider doubles
//! - A gateway factory with isolated storage

pub mod fixtures;
pub mod gateway;
pub mod providers;

pub use gateway::TestGateway;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
