//! Diagnostic rule definition and tier applicability

use serde::Deserialize;

use crate::version::tier::VersionTier;

/// A single tier-gated diagnostic rule.
///
/// The `code` is the stable identifier published to diagnostics consumers;
/// once shipped it must never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRule {
    pub code: String,
    /// Tier that introduced the rule.
    pub min_tier: VersionTier,
    /// Tier that last carried the rule, for rules relaxed or removed by a
    /// later platform revision. `None` means the rule is still current.
    pub max_tier: Option<VersionTier>,
}

impl DiagnosticRule {
    pub fn new(code: impl Into<String>, min_tier: VersionTier) -> Self {
        Self {
            code: code.into(),
            min_tier,
            max_tier: None,
        }
    }

    pub fn with_max(code: impl Into<String>, min_tier: VersionTier, max_tier: VersionTier) -> Self {
        Self {
            code: code.into(),
            min_tier,
            max_tier: Some(max_tier),
        }
    }

    /// Whether this rule applies to a project at `tier`.
    ///
    /// A project whose tier could not be determined gets no tier-gated
    /// diagnostics at all. Otherwise applicability is the closed interval
    /// `[min_tier, max_tier]`, unbounded above when no max is set.
    pub fn is_applicable(&self, tier: VersionTier) -> bool {
        if tier.is_unknown() {
            return false;
        }

        // Project predates the rule.
        if tier.level() < self.min_tier.level() {
            return false;
        }

        // Rule was superseded before the project's tier.
        if let Some(max_tier) = self.max_tier {
            if tier.level() > max_tier.level() {
                return false;
            }
        }

        true
    }
}

/// External rule definition, for catalogs supplied through configuration.
///
/// Levels are resolved through [`VersionTier::from_level`]; a level outside
/// the tier table resolves to `UNKNOWN` and the resulting rule never applies.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleDef {
    pub code: String,
    pub min_level: u32,
    #[serde(default)]
    pub max_level: Option<u32>,
}

impl From<RuleDef> for DiagnosticRule {
    fn from(def: RuleDef) -> Self {
        Self {
            code: def.code,
            min_tier: VersionTier::from_level(def.min_level),
            max_tier: def.max_level.map(VersionTier::from_level),
        }
    }
}
