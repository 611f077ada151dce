//! Lenient numeric version parsing
//!
//! Artifact version strings on a classpath are messy ("3.2.0", "4.0.1.RC1",
//! "6"). Threshold comparison only cares about major.minor, so parsing
//! truncates to the first two components and degrades to `0.0` on anything
//! unparseable rather than erroring.

/// A major.minor version extracted from an artifact version string.
///
/// Ordered lexicographically, so `6.10 > 6.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleVersion {
    pub major: u32,
    pub minor: u32,
}

impl ModuleVersion {
    pub const ZERO: ModuleVersion = ModuleVersion { major: 0, minor: 0 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the leading major.minor out of a version string.
    ///
    /// Components beyond the second are ignored ("3.2.0" -> 3.2). A missing
    /// minor defaults to 0 ("6" -> 6.0). Any failure to parse the kept
    /// components yields [`ModuleVersion::ZERO`]; this never fails.
    pub fn parse(version: &str) -> ModuleVersion {
        let mut parts = version.split('.');

        let Some(major) = parts.next().and_then(|p| p.parse::<u32>().ok()) else {
            return ModuleVersion::ZERO;
        };

        match parts.next() {
            None => ModuleVersion { major, minor: 0 },
            Some(part) => match part.parse::<u32>() {
                Ok(minor) => ModuleVersion { major, minor },
                Err(_) => ModuleVersion::ZERO,
            },
        }
    }
}
