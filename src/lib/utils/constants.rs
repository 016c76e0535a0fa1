//! Constant value definitions to use across the whole crate

use std::time::Duration;

/// Upper bound for building a benchmark project before the orchestrator
/// gives up. Builds normally finish in seconds, but the package restore can
/// take far longer on a slow connection.
pub const DEFAULT_BUILD_TIMEOUT: Duration = Duration::from_secs(120);

/// The target framework monikers of the supported runtime generations,
/// not their display names
pub mod monikers {
    pub const NET_CORE_APP_2_0: &str = "netcoreapp2.0";
    pub const NET_CORE_APP_2_1: &str = "netcoreapp2.1";
    pub const NET_CORE_APP_2_2: &str = "netcoreapp2.2";
    pub const NET_CORE_APP_3_0: &str = "netcoreapp3.0";
    pub const NET_CORE_APP_3_1: &str = "netcoreapp3.1";
    pub const NET_5_0: &str = "net5.0";
    pub const NET_6_0: &str = "net6.0";
    pub const NET_7_0: &str = "net7.0";
}
