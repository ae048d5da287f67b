//! Integration test suite.
//!
//! Exercises schemas the way the layers around them use them:
//! 1. Record layout (serialization layer)
//! 2. Join planning (query layer)
//! 3. Shared read-only access across threads

pub mod record_layout_tests;
pub mod shared_access_tests;
