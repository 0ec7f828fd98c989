//! Integration test utilities for the classroom core
//!
//! Provides fixtures for driving a shared [`classroom_session::SessionStore`]
//! through multi-session classroom scenarios.

pub mod fixtures;

pub use fixtures::*;
