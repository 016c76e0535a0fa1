use core::fmt;
use std::{borrow::Cow, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::toolchain::aot::AotCompilerMode;
use crate::utils::constants::{self, monikers};

/// The build-target configuration record for one target runtime. The build
/// orchestrator reads it to parametrize the generated project file and the
/// toolchain invocation.
///
/// There is no setter anywhere: a record is fully populated at construction
/// and "modified" only by deriving a new instance, so a base configuration
/// can be shared across build variants without aliasing hazards.
///
/// ```rust
/// use std::time::Duration;
/// use benchforge::toolchain::aot::AotCompilerMode;
/// use benchforge::toolchain::settings::TargetRuntimeSettings;
///
/// let base = TargetRuntimeSettings::NET_60;
/// assert_eq!(base.target_framework_moniker(), "net6.0");
/// assert_eq!(base.timeout(), Duration::from_secs(120));
/// assert_eq!(base.aot_compiler_mode(), AotCompilerMode::Mini);
/// assert!(base.custom_dotnet_cli_path().is_none());
///
/// let patched = base.with_timeout(Some(Duration::from_secs(30)));
/// assert_eq!(patched.timeout(), Duration::from_secs(30));
/// assert_eq!(patched.name(), base.name());
/// assert_eq!(base.timeout(), Duration::from_secs(120));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct TargetRuntimeSettings<'a> {
    target_framework_moniker: Cow<'a, str>,
    runtime_framework_version: Option<Cow<'a, str>>,
    name: Cow<'a, str>,
    custom_dotnet_cli_path: Option<Cow<'a, Path>>,
    packages_path: Option<Cow<'a, Path>>,
    #[serde(default = "default_build_timeout")]
    timeout: Duration,
    custom_runtime_pack: Option<Cow<'a, Path>>,
    aot_compiler_path: Option<Cow<'a, Path>>,
    #[serde(default)]
    aot_compiler_mode: AotCompilerMode,
}

/// The preset catalog: one ready-made configuration per supported runtime
/// generation, with the default version for its moniker and constructor
/// defaults everywhere else. Presets are process-wide constants; a
/// customized variant always comes out of a derivation, never out of an
/// in-place edit
impl TargetRuntimeSettings<'static> {
    pub const NET_CORE_APP_20: Self = Self::preset(monikers::NET_CORE_APP_2_0, ".NET Core 2.0");
    pub const NET_CORE_APP_21: Self = Self::preset(monikers::NET_CORE_APP_2_1, ".NET Core 2.1");
    pub const NET_CORE_APP_22: Self = Self::preset(monikers::NET_CORE_APP_2_2, ".NET Core 2.2");
    pub const NET_CORE_APP_30: Self = Self::preset(monikers::NET_CORE_APP_3_0, ".NET Core 3.0");
    pub const NET_CORE_APP_31: Self = Self::preset(monikers::NET_CORE_APP_3_1, ".NET Core 3.1");
    pub const NET_50: Self = Self::preset(monikers::NET_5_0, ".NET 5.0");
    pub const NET_60: Self = Self::preset(monikers::NET_6_0, ".NET 6.0");
    pub const NET_70: Self = Self::preset(monikers::NET_7_0, ".NET 7.0");

    /// The whole catalog, in generation order
    pub const PRESETS: [Self; 8] = [
        Self::NET_CORE_APP_20,
        Self::NET_CORE_APP_21,
        Self::NET_CORE_APP_22,
        Self::NET_CORE_APP_30,
        Self::NET_CORE_APP_31,
        Self::NET_50,
        Self::NET_60,
        Self::NET_70,
    ];

    const fn preset(target_framework_moniker: &'static str, name: &'static str) -> Self {
        Self {
            target_framework_moniker: Cow::Borrowed(target_framework_moniker),
            runtime_framework_version: None,
            name: Cow::Borrowed(name),
            custom_dotnet_cli_path: None,
            packages_path: None,
            timeout: constants::DEFAULT_BUILD_TIMEOUT,
            custom_runtime_pack: None,
            aot_compiler_path: None,
            aot_compiler_mode: AotCompilerMode::Mini,
        }
    }
}

impl<'a> TargetRuntimeSettings<'a> {
    /// Creates a settings record from the identifying trio, with every other
    /// field at its constructor default. Nothing is validated: the moniker
    /// is opaque data here, and a `None` or empty version means "use the
    /// default version for the moniker"
    pub fn new(
        target_framework_moniker: impl Into<Cow<'a, str>>,
        runtime_framework_version: Option<Cow<'a, str>>,
        name: impl Into<Cow<'a, str>>,
    ) -> Self {
        Self::builder(target_framework_moniker, runtime_framework_version, name).build()
    }

    /// Full construction path for the optional fields that
    /// [`TargetRuntimeSettings::new`] defaults
    pub fn builder(
        target_framework_moniker: impl Into<Cow<'a, str>>,
        runtime_framework_version: Option<Cow<'a, str>>,
        name: impl Into<Cow<'a, str>>,
    ) -> TargetRuntimeSettingsBuilder<'a> {
        TargetRuntimeSettingsBuilder {
            target_framework_moniker: target_framework_moniker.into(),
            runtime_framework_version,
            name: name.into(),
            custom_dotnet_cli_path: None,
            packages_path: None,
            timeout: None,
            custom_runtime_pack: None,
            aot_compiler_path: None,
            aot_compiler_mode: AotCompilerMode::default(),
        }
    }

    /// Sample values: `netcoreapp3.1`, `net6.0`
    pub fn target_framework_moniker(&self) -> &str {
        self.target_framework_moniker.as_ref()
    }

    /// Exact runtime framework version to pin in the generated project file.
    /// `None` or empty leaves the choice to the moniker's default
    pub fn runtime_framework_version(&self) -> Option<&str> {
        self.runtime_framework_version.as_deref()
    }

    /// Display name used for showing the results. Not part of the record's
    /// identity
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Where the `dotnet` CLI lives when the one on the execution path is
    /// not the desired one
    pub fn custom_dotnet_cli_path(&self) -> Option<&Path> {
        self.custom_dotnet_cli_path.as_deref()
    }

    /// The directory to restore packages to
    pub fn packages_path(&self) -> Option<&Path> {
        self.packages_path.as_deref()
    }

    /// Timeout for building the benchmark project
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Path to a custom runtime pack
    pub fn custom_runtime_pack(&self) -> Option<&Path> {
        self.custom_runtime_pack.as_deref()
    }

    /// Path to the AOT compiler
    pub fn aot_compiler_path(&self) -> Option<&Path> {
        self.aot_compiler_path.as_deref()
    }

    pub fn aot_compiler_mode(&self) -> AotCompilerMode {
        self.aot_compiler_mode
    }

    /// Derives a copy that builds with the `dotnet` CLI found at
    /// `custom_dotnet_cli_path`, renamed to `display_name` when one is
    /// given. The receiver's runtime pack and AOT compiler overrides are not
    /// carried over: the derived copy goes back through the constructor
    /// defaults for every field this operation does not forward
    pub fn with_custom_dotnet_cli_path(
        &self,
        custom_dotnet_cli_path: impl Into<Cow<'a, Path>>,
        display_name: Option<Cow<'a, str>>,
    ) -> Self {
        self.rebuild(
            display_name,
            Some(custom_dotnet_cli_path.into()),
            self.packages_path.clone(),
            self.timeout,
        )
    }

    /// Derives a copy that restores packages into `packages_path`, renamed
    /// to `display_name` when one is given. Same forwarding rules as
    /// [`TargetRuntimeSettings::with_custom_dotnet_cli_path`]
    pub fn with_custom_packages_restore_path(
        &self,
        packages_path: impl Into<Cow<'a, Path>>,
        display_name: Option<Cow<'a, str>>,
    ) -> Self {
        self.rebuild(
            display_name,
            self.custom_dotnet_cli_path.clone(),
            Some(packages_path.into()),
            self.timeout,
        )
    }

    /// Derives a copy with the given build timeout, keeping the receiver's
    /// one when `None`. Same forwarding rules as
    /// [`TargetRuntimeSettings::with_custom_dotnet_cli_path`]
    pub fn with_timeout(&self, timeout: Option<Duration>) -> Self {
        self.rebuild(
            None,
            self.custom_dotnet_cli_path.clone(),
            self.packages_path.clone(),
            timeout.unwrap_or(self.timeout),
        )
    }

    /// Shared tail of the derivation operations. Only the explicitly
    /// forwarded fields survive; the rest take their constructor defaults on
    /// the new instance
    fn rebuild(
        &self,
        display_name: Option<Cow<'a, str>>,
        custom_dotnet_cli_path: Option<Cow<'a, Path>>,
        packages_path: Option<Cow<'a, Path>>,
        timeout: Duration,
    ) -> Self {
        if self.custom_runtime_pack.is_some() || self.aot_compiler_path.is_some() {
            log::debug!(
                "'{}': the runtime pack and AOT compiler overrides are not forwarded to derived settings",
                self.name
            );
        }

        Self {
            target_framework_moniker: self.target_framework_moniker.clone(),
            runtime_framework_version: self.runtime_framework_version.clone(),
            name: display_name.unwrap_or_else(|| self.name.clone()),
            custom_dotnet_cli_path,
            packages_path,
            timeout,
            custom_runtime_pack: None,
            aot_compiler_path: None,
            aot_compiler_mode: AotCompilerMode::default(),
        }
    }
}

impl fmt::Display for TargetRuntimeSettings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Chainable construction of a [`TargetRuntimeSettings`] when the optional
/// fields matter. An unset timeout resolves to the default build timeout
/// the moment the record is built, never later
#[derive(Debug)]
pub struct TargetRuntimeSettingsBuilder<'a> {
    target_framework_moniker: Cow<'a, str>,
    runtime_framework_version: Option<Cow<'a, str>>,
    name: Cow<'a, str>,
    custom_dotnet_cli_path: Option<Cow<'a, Path>>,
    packages_path: Option<Cow<'a, Path>>,
    timeout: Option<Duration>,
    custom_runtime_pack: Option<Cow<'a, Path>>,
    aot_compiler_path: Option<Cow<'a, Path>>,
    aot_compiler_mode: AotCompilerMode,
}

impl<'a> TargetRuntimeSettingsBuilder<'a> {
    pub fn custom_dotnet_cli_path(
        mut self,
        custom_dotnet_cli_path: impl Into<Cow<'a, Path>>,
    ) -> Self {
        self.custom_dotnet_cli_path = Some(custom_dotnet_cli_path.into());
        self
    }

    pub fn packages_path(mut self, packages_path: impl Into<Cow<'a, Path>>) -> Self {
        self.packages_path = Some(packages_path.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn custom_runtime_pack(mut self, custom_runtime_pack: impl Into<Cow<'a, Path>>) -> Self {
        self.custom_runtime_pack = Some(custom_runtime_pack.into());
        self
    }

    pub fn aot_compiler_path(mut self, aot_compiler_path: impl Into<Cow<'a, Path>>) -> Self {
        self.aot_compiler_path = Some(aot_compiler_path.into());
        self
    }

    pub fn aot_compiler_mode(mut self, aot_compiler_mode: AotCompilerMode) -> Self {
        self.aot_compiler_mode = aot_compiler_mode;
        self
    }

    pub fn build(self) -> TargetRuntimeSettings<'a> {
        TargetRuntimeSettings {
            target_framework_moniker: self.target_framework_moniker,
            runtime_framework_version: self.runtime_framework_version,
            name: self.name,
            custom_dotnet_cli_path: self.custom_dotnet_cli_path,
            packages_path: self.packages_path,
            timeout: self.timeout.unwrap_or(constants::DEFAULT_BUILD_TIMEOUT),
            custom_runtime_pack: self.custom_runtime_pack,
            aot_compiler_path: self.aot_compiler_path,
            aot_compiler_mode: self.aot_compiler_mode,
        }
    }
}

fn default_build_timeout() -> Duration {
    constants::DEFAULT_BUILD_TIMEOUT
}
