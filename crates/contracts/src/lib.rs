//! Shared contracts between the partner console and the insurance backend.
//!
//! Everything here is plain Rust so it can be unit-tested natively and
//! compiled into the wasm frontend unchanged.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
