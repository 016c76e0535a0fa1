//! Build-target configuration for the supported runtime toolchains.
//!
//! Everything in here is pure data. The settings records are constructed
//! once (directly, through the builder, or by picking a preset), optionally
//! specialized via the derivation operations, and then handed read-only to
//! the build orchestrator.

pub mod aot;
pub mod settings;
