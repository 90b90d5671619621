//! Shared wire types for the café / employee console.
//!
//! Everything here mirrors the JSON the backend speaks and carries no
//! browser dependencies, so the rules and envelopes are testable on the host.

pub mod domain;
pub mod enums;
pub mod shared;
