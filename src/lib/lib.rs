//! The toolchain settings layer of `benchforge`. Holds the read-only
//! configuration records that an external build orchestrator reads to
//! generate and invoke a benchmark project build against a target runtime.

pub mod toolchain;
pub mod utils;
