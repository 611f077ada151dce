//! Classpath scanning and platform tier detection
//!
//! Walks a project's dependency entries, parses `name-version.jar` filenames,
//! and reduces per-entry tier candidates to a single platform tier.
//!
//! Two candidate sources are consulted per entry:
//! 1. platform aggregate bundles (`jakartaee-api` and friends), mapped by the
//!    major component of their own version, and
//! 2. individual specification modules via [`module_tier`].
//!
//! The final result is the maximum candidate observed across the whole scan,
//! so scanning is order-independent and adding entries never lowers the tier.

#[cfg(test)]
use mockall::automock;

use regex::Regex;
use tracing::{debug, info};

use crate::version::modules::module_tier;
use crate::version::tier::VersionTier;

/// Artifact name identifiers for the umbrella platform bundles (matched by
/// substring, like the module families).
const PLATFORM_AGGREGATES: &[&str] = &["jakartaee-api", "jakartaee-web-api", "jakartaee-core-api"];

/// Name and version parsed out of a `name-version.jar` classpath entry.
///
/// Borrowed from the entry string; lives only for one detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedArtifact<'a> {
    pub name: &'a str,
    pub version: &'a str,
}

/// Observer for detection events.
///
/// The detector itself is a pure function of its input; everything worth
/// logging is routed through this seam so callers can capture structured
/// events instead of console output.
#[cfg_attr(test, automock)]
pub trait DetectionObserver: Send + Sync {
    /// Called once per classpath entry, before any filtering.
    fn entry_scanned(&self, entry: &str);

    /// Called when an entry yields a tier candidate above `UNKNOWN`.
    fn candidate_found(&self, artifact_name: &str, candidate: VersionTier);

    /// Called once with the final tier, after any fallback substitution.
    fn tier_detected(&self, tier: VersionTier);
}

/// Default observer emitting `tracing` events.
pub struct TracingObserver;

impl DetectionObserver for TracingObserver {
    fn entry_scanned(&self, entry: &str) {
        debug!(entry, "scanning classpath entry");
    }

    fn candidate_found(&self, artifact_name: &str, candidate: VersionTier) {
        debug!(artifact_name, %candidate, "tier candidate");
    }

    fn tier_detected(&self, tier: VersionTier) {
        info!(%tier, level = tier.level(), "platform tier detected");
    }
}

/// Detects the Jakarta EE platform tier from classpath entries.
pub struct ClasspathDetector {
    /// Regex for the trailing `name-version.jar` of a path segment.
    artifact_re: Regex,
    /// Tier substituted when the whole scan resolves to `UNKNOWN`.
    fallback: Option<VersionTier>,
}

impl ClasspathDetector {
    /// Detector without a fallback: an unrecognizable classpath yields
    /// [`VersionTier::UNKNOWN`] and the caller decides what that means.
    pub fn new() -> Self {
        Self {
            // Match: name-1.2.3[qualifier].jar at the end of a path
            artifact_re: Regex::new(r"([^/\\]+)-([0-9.]+[^/\\]*)\.jar$").unwrap(),
            fallback: None,
        }
    }

    /// Detector that substitutes `fallback` for an `UNKNOWN` result.
    ///
    /// This is caller policy (e.g. "assume the lowest supported platform"),
    /// not part of the detection contract itself.
    pub fn with_fallback(fallback: VersionTier) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::new()
        }
    }

    pub fn fallback(&self) -> Option<VersionTier> {
        self.fallback
    }

    /// Detect the platform tier, logging through [`TracingObserver`].
    pub fn detect(&self, entries: &[String]) -> VersionTier {
        self.detect_with_observer(entries, &TracingObserver)
    }

    /// Detect the platform tier, reporting scan events to `observer`.
    pub fn detect_with_observer(
        &self,
        entries: &[String],
        observer: &dyn DetectionObserver,
    ) -> VersionTier {
        let mut detected = VersionTier::UNKNOWN;

        for entry in entries {
            observer.entry_scanned(entry);

            // Non-jar entries (class dirs, resources) are expected; skip quietly.
            if entry.is_empty() || !entry.ends_with(".jar") {
                continue;
            }

            let Some(artifact) = self.parse_artifact(entry) else {
                continue;
            };

            // Priority 1: the umbrella platform bundle names its tier directly.
            if is_platform_aggregate(artifact.name) {
                let candidate = aggregate_tier(artifact.version);
                if !candidate.is_unknown() {
                    observer.candidate_found(artifact.name, candidate);
                }
                detected = detected.max(candidate);
            }

            // Priority 2: individual module thresholds, always consulted.
            let candidate = module_tier(artifact.name, artifact.version);
            if !candidate.is_unknown() {
                observer.candidate_found(artifact.name, candidate);
            }
            detected = detected.max(candidate);
        }

        if detected.is_unknown() {
            if let Some(fallback) = self.fallback {
                debug!(%fallback, "no tier detected, substituting fallback");
                detected = fallback;
            }
        }

        observer.tier_detected(detected);
        detected
    }

    /// Parse the trailing `name-version.jar` from a classpath entry.
    ///
    /// Returns `None` for entries that don't carry a parseable version; that
    /// is common and not an error.
    pub fn parse_artifact<'a>(&self, entry: &'a str) -> Option<ParsedArtifact<'a>> {
        let caps = self.artifact_re.captures(entry)?;
        Some(ParsedArtifact {
            name: caps.get(1)?.as_str(),
            version: caps.get(2)?.as_str(),
        })
    }
}

impl Default for ClasspathDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn is_platform_aggregate(name: &str) -> bool {
    PLATFORM_AGGREGATES
        .iter()
        .any(|aggregate| name.contains(aggregate))
}

/// Map a platform aggregate version to a tier by its major prefix.
fn aggregate_tier(version: &str) -> VersionTier {
    if version.starts_with("11.") {
        VersionTier::EE_11
    } else if version.starts_with("10.") {
        VersionTier::EE_10
    } else if version.starts_with("9.") {
        VersionTier::EE_9
    } else {
        VersionTier::UNKNOWN
    }
}
