use serde::Deserialize;

use crate::diagnostics::catalog::RuleCatalog;
use crate::diagnostics::rules::{DiagnosticRule, RuleDef};
use crate::version::detector::ClasspathDetector;
use crate::version::error::CatalogError;
use crate::version::tier::VersionTier;

/// Library configuration supplied by the hosting service.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionConfig {
    pub detector: DetectorConfig,
    /// External rule definitions. When present they replace the built-in
    /// catalog entirely, so overlapping catalogs can be reconciled outside
    /// the library.
    pub rules: Option<Vec<RuleDef>>,
}

/// Detector-related configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Tier level to substitute when detection resolves to unknown.
    ///
    /// Leaving this unset propagates `UNKNOWN` upward and suppresses all
    /// tier-gated diagnostics for the project; setting it (e.g. to 9) makes
    /// the "assume the lowest supported platform" policy explicit.
    pub fallback_level: Option<u32>,
}

impl VersionConfig {
    /// Build the detector this configuration describes.
    pub fn detector(&self) -> ClasspathDetector {
        match self.detector.fallback_level {
            Some(level) => ClasspathDetector::with_fallback(VersionTier::from_level(level)),
            None => ClasspathDetector::new(),
        }
    }

    /// Build the rule catalog this configuration describes.
    ///
    /// Duplicate codes in externally supplied rules surface as an error here
    /// rather than being silently dropped.
    pub fn catalog(&self) -> Result<RuleCatalog, CatalogError> {
        match &self.rules {
            Some(defs) => RuleCatalog::new(defs.iter().cloned().map(DiagnosticRule::from)),
            None => Ok(RuleCatalog::default_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<VersionConfig>(json!({
            "detector": {
                "fallbackLevel": 9
            }
        }))
        .unwrap();

        assert_eq!(result.detector.fallback_level, Some(9));
        assert_eq!(result.rules, None);
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<VersionConfig>(json!({
            "detector": {
                "fallbackLevel": 10
            },
            "rules": [
                { "code": "CustomRule", "minLevel": 9 },
                { "code": "RetiredRule", "minLevel": 9, "maxLevel": 10 }
            ]
        }))
        .unwrap();

        assert_eq!(result.detector.fallback_level, Some(10));
        let rules = result.rules.unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].max_level, Some(10));
    }

    #[test]
    fn default_config_has_no_fallback_and_builtin_catalog() {
        let config = VersionConfig::default();

        assert_eq!(config.detector().fallback(), None);
        let catalog = config.catalog().unwrap();
        assert!(catalog.get("InvalidOnOpenParams").is_some());
    }

    #[test]
    fn configured_fallback_level_reaches_the_detector() {
        let config: VersionConfig = serde_json::from_value(json!({
            "detector": { "fallbackLevel": 9 }
        }))
        .unwrap();

        let detector = config.detector();
        assert_eq!(detector.fallback(), Some(VersionTier::EE_9));

        let tier = detector.detect(&["lib/commons-lang3-3.12.0.jar".to_string()]);
        assert_eq!(tier, VersionTier::EE_9);
    }

    #[test]
    fn external_rules_replace_the_builtin_catalog() {
        let config: VersionConfig = serde_json::from_value(json!({
            "rules": [
                { "code": "OnlyRule", "minLevel": 10 }
            ]
        }))
        .unwrap();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("OnlyRule").is_some());
        assert!(catalog.get("InvalidOnOpenParams").is_none());
    }

    #[test]
    fn duplicate_external_rule_codes_fail_catalog_construction() {
        let config: VersionConfig = serde_json::from_value(json!({
            "rules": [
                { "code": "Dup", "minLevel": 9 },
                { "code": "Dup", "minLevel": 10 }
            ]
        }))
        .unwrap();

        assert!(matches!(
            config.catalog(),
            Err(CatalogError::DuplicateCode(code)) if code == "Dup"
        ));
    }
}
