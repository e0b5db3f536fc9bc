//! Version and provenance stamped in at compile time by `build.rs`.

use std::fmt;

/// Where this binary came from. Fields read `unknown` when the build script
/// could not determine them, e.g. outside a git checkout.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        git_hash: option_env!("POCKETBOOK_BUILD_HASH").unwrap_or(UNKNOWN),
        git_status: option_env!("POCKETBOOK_BUILD_STATUS").unwrap_or(UNKNOWN),
        timestamp: option_env!("POCKETBOOK_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("POCKETBOOK_BUILD_TARGET").unwrap_or(UNKNOWN),
        profile: option_env!("POCKETBOOK_BUILD_PROFILE").unwrap_or(UNKNOWN),
        rustc: option_env!("POCKETBOOK_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pocketbook {} ({} {}, {} {}, built {} with {})",
            self.version,
            self.git_hash,
            self.git_status,
            self.target,
            self.profile,
            self.timestamp,
            self.rustc
        )
    }
}
