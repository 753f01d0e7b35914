//! Build-time metadata printed alongside usage output.

use std::fmt::{self, Display};

/// Metadata describing the running build, populated at process start and
/// passed explicitly to whatever prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// The semantic version of the crate.
    pub version: &'static str,
    /// The source revision the binary was built from, embedded by CI.
    pub revision: &'static str,
    /// Whether this is a release build. Non-release versions carry a `-dev` suffix.
    pub release: bool,
    /// The canonical repository URL, used to derive commit and tag links.
    pub repository: &'static str,
}

impl BuildInfo {
    /// Collects the metadata embedded at compile time.
    ///
    /// `BUILD_REVISION` and `BUILD_RELEASE` are expected from the build
    /// environment; absent values fall back to `unknown` and non-release.
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            revision: option_env!("BUILD_REVISION").unwrap_or("unknown"),
            release: option_env!("BUILD_RELEASE").is_some(),
            repository: env!("CARGO_PKG_REPOSITORY"),
        }
    }
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== build information ====")?;
        if self.release {
            writeln!(f, "version: {}", self.version)?;
        } else {
            writeln!(f, "version: {}-dev", self.version)?;
        }
        writeln!(f, "revision: {}", self.revision)?;
        writeln!(f, "url (revision): {}/commit/{}", self.repository, self.revision)?;
        if self.release {
            writeln!(
                f,
                "url (tag): {}/releases/tag/v{}",
                self.repository, self.version
            )?;
        }
        Ok(())
    }
}
