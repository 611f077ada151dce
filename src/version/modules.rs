//! Per-module version threshold tables
//!
//! Each Jakarta specification module advances its own version number per
//! platform release (servlet 6.0 shipped with EE 10, persistence 3.2 with
//! EE 11, ...), so each known dependency family carries its own threshold
//! table mapping a parsed major.minor to the platform tier that introduced it.

use crate::version::parse::ModuleVersion;
use crate::version::tier::VersionTier;

/// How an artifact name is matched against a dependency family.
#[derive(Debug, Clone, Copy)]
pub enum FamilyMatcher {
    /// Artifact name contains the pattern anywhere.
    Contains(&'static str),
    /// Artifact name equals the pattern exactly.
    Equals(&'static str),
}

impl FamilyMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            FamilyMatcher::Contains(pattern) => name.contains(pattern),
            FamilyMatcher::Equals(pattern) => name == *pattern,
        }
    }
}

/// Threshold table for one specification module.
///
/// Thresholds are strictly descending: the first entry whose version is <= the
/// parsed artifact version wins. Every threshold is > 0.0, so an unparseable
/// version (0.0) falls through to `UNKNOWN`.
struct FamilyRule {
    module: &'static str,
    matchers: &'static [FamilyMatcher],
    thresholds: &'static [(ModuleVersion, VersionTier)],
}

use FamilyMatcher::{Contains, Equals};

const EE_9: VersionTier = VersionTier::EE_9;
const EE_10: VersionTier = VersionTier::EE_10;
const EE_11: VersionTier = VersionTier::EE_11;

const fn v(major: u32, minor: u32) -> ModuleVersion {
    ModuleVersion::new(major, minor)
}

/// Known dependency families, evaluated in order; first match wins.
const FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        module: "servlet",
        matchers: &[Contains("servlet-api"), Equals("jakarta.servlet")],
        thresholds: &[(v(6, 1), EE_11), (v(6, 0), EE_10), (v(5, 0), EE_9)],
    },
    FamilyRule {
        module: "faces",
        matchers: &[Contains("faces-api"), Equals("jakarta.faces")],
        thresholds: &[(v(4, 1), EE_11), (v(4, 0), EE_10), (v(3, 0), EE_9)],
    },
    FamilyRule {
        module: "rest",
        matchers: &[Contains("ws.rs-api"), Equals("jakarta.ws.rs")],
        thresholds: &[(v(4, 0), EE_11), (v(3, 1), EE_10), (v(3, 0), EE_9)],
    },
    FamilyRule {
        module: "websocket",
        matchers: &[
            Contains("websocket-api"),
            Equals("websocket-client-api"),
            Equals("websocket-all"),
            Equals("jakarta.websocket"),
        ],
        thresholds: &[(v(2, 2), EE_11), (v(2, 1), EE_10), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "json",
        // JSON-P 2.1 is shared by EE 10 and EE 11; the higher tier wins.
        matchers: &[Contains("json-api"), Equals("jakarta.json")],
        thresholds: &[(v(2, 1), EE_11), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "json.bind",
        matchers: &[Contains("json.bind-api"), Equals("jakarta.json.bind")],
        thresholds: &[(v(3, 0), EE_11), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "annotation",
        matchers: &[Contains("annotation-api"), Equals("jakarta.annotation")],
        thresholds: &[(v(3, 0), EE_11), (v(2, 1), EE_10), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "ejb",
        // EJB froze at 4.0; it cannot distinguish tiers below the top one.
        matchers: &[Contains("ejb-api"), Equals("jakarta.ejb")],
        thresholds: &[(v(4, 0), EE_11)],
    },
    FamilyRule {
        module: "transaction",
        matchers: &[Contains("transaction-api"), Equals("jakarta.transaction")],
        thresholds: &[(v(2, 0), EE_11)],
    },
    FamilyRule {
        module: "persistence",
        matchers: &[Contains("persistence-api"), Contains("jakarta.persistence")],
        thresholds: &[(v(3, 2), EE_11), (v(3, 1), EE_10), (v(3, 0), EE_9)],
    },
    FamilyRule {
        module: "validation",
        matchers: &[Contains("validation-api"), Contains("jakarta.validation")],
        thresholds: &[(v(3, 1), EE_11), (v(3, 0), EE_10)],
    },
    FamilyRule {
        module: "interceptor",
        matchers: &[Contains("interceptor-api"), Contains("jakarta.interceptor")],
        thresholds: &[(v(2, 2), EE_11), (v(2, 1), EE_10), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "cdi",
        matchers: &[
            Contains("enterprise.cdi-api"),
            Contains("jakarta.enterprise"),
        ],
        thresholds: &[(v(4, 1), EE_11), (v(4, 0), EE_10), (v(3, 0), EE_9)],
    },
    FamilyRule {
        module: "inject",
        matchers: &[Contains("inject-api"), Contains("jakarta.inject")],
        thresholds: &[(v(2, 0), EE_11)],
    },
    FamilyRule {
        module: "security.enterprise",
        matchers: &[
            Contains("security.enterprise-api"),
            Contains("jakarta.security.enterprise"),
        ],
        thresholds: &[(v(4, 0), EE_11), (v(3, 0), EE_10), (v(2, 0), EE_9)],
    },
    FamilyRule {
        module: "data",
        // jakarta.data is new in EE 11.
        matchers: &[Contains("data-api"), Contains("jakarta.data")],
        thresholds: &[(v(1, 0), EE_11)],
    },
];

/// Resolve the platform tier implied by a single module artifact.
///
/// Returns `UNKNOWN` when no family matches the artifact name or the version
/// is below every threshold for the matched family.
pub fn module_tier(name: &str, version: &str) -> VersionTier {
    let Some(rule) = FAMILY_RULES
        .iter()
        .find(|rule| rule.matchers.iter().any(|matcher| matcher.matches(name)))
    else {
        return VersionTier::UNKNOWN;
    };

    let parsed = ModuleVersion::parse(version);
    let tier = rule
        .thresholds
        .iter()
        .find(|(threshold, _)| parsed >= *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(VersionTier::UNKNOWN);

    tracing::trace!(module = rule.module, name, version, %tier, "module tier resolved");
    tier
}
