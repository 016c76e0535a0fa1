use core::fmt;

use serde::{Deserialize, Serialize};

/// The strategy used by the ahead-of-time compiler when one is configured
/// on the target runtime settings
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, Default)]
pub enum AotCompilerMode {
    #[default]
    #[serde(alias = "mini")]
    Mini,
    #[serde(alias = "llvm", alias = "LLVM")]
    Llvm,
}

impl fmt::Display for AotCompilerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for AotCompilerMode {
    fn as_ref(&self) -> &str {
        match *self {
            AotCompilerMode::Mini => "mini",
            AotCompilerMode::Llvm => "llvm",
        }
    }
}
