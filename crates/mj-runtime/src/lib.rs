//! Runtime support for programs emitted by the MiniJava code generator.
//!
//! Generated code links against the C symbols exported by `mj-runtime-native`;
//! this crate holds the behavior behind them so it can be tested without a
//! generated program:
//! - `entry`: the process entry dispatcher that calls `mjMain`
//! - `alloc`: the zero-initializing allocation gateway
//! - `io`: the integer console primitives
//!
//! Everything here assumes the single-threaded execution model of generated
//! programs.

pub mod alloc;
pub mod entry;
pub mod io;
pub mod variant;

pub use variant::{AllocVariant, ALLOC_VARIANT};
