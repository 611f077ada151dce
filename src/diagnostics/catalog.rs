//! The diagnostic rule catalog
//!
//! One deduplicated source of truth for every tier-gated rule. Catalogs are
//! data-driven: the built-in set ships as [`default_rules`], and external rule
//! definitions can be loaded through configuration to reconcile or extend it.
//! Code collisions are rejected at construction, never silently resolved.

use indexmap::IndexMap;

use crate::diagnostics::rules::DiagnosticRule;
use crate::version::error::CatalogError;
use crate::version::tier::VersionTier;

/// Ordered, code-unique collection of diagnostic rules.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: IndexMap<String, DiagnosticRule>,
}

impl RuleCatalog {
    /// Build a catalog, rejecting duplicate rule codes.
    pub fn new(rules: impl IntoIterator<Item = DiagnosticRule>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for rule in rules {
            let code = rule.code.clone();
            if map.insert(code.clone(), rule).is_some() {
                return Err(CatalogError::DuplicateCode(code));
            }
        }
        Ok(Self { rules: map })
    }

    /// The built-in rule set.
    pub fn default_catalog() -> Self {
        Self::new(default_rules()).expect("default rule codes are unique")
    }

    /// Look up a rule by its published code.
    ///
    /// `None` is an expected outcome: clients may reference retired codes.
    pub fn get(&self, code: &str) -> Option<&DiagnosticRule> {
        self.rules.get(code)
    }

    /// Rules whose minimum tier is exactly `tier` (reporting/tests helper,
    /// not the applicability filter).
    pub fn rules_introduced_at(&self, tier: VersionTier) -> Vec<&DiagnosticRule> {
        self.rules
            .values()
            .filter(|rule| rule.min_tier == tier)
            .collect()
    }

    /// Rules applicable to a project at `tier`. Empty for `UNKNOWN`.
    pub fn applicable_rules(&self, tier: VersionTier) -> Vec<&DiagnosticRule> {
        self.rules
            .values()
            .filter(|rule| rule.is_applicable(tier))
            .collect()
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Built-in rule codes with the tier that introduced each.
const DEFAULT_RULES: &[(&str, VersionTier)] = &[
    // Bean validation
    ("InvalidConstrainAnnotationOnStaticMethodOrField", VersionTier::EE_9),
    ("InvalidAnnotationOnNonBooleanMethodOrField", VersionTier::EE_9),
    (
        "InvalidAnnotationOnNonBigDecimalCharByteShortIntLongMethodOrField",
        VersionTier::EE_9,
    ),
    ("InvalidAnnotationOnNonDateTimeMethodOrField", VersionTier::EE_9),
    ("InvalidAnnotationOnNonMinMaxMethodOrField", VersionTier::EE_9),
    ("InvalidAnnotationOnNonPositiveMethodOrField", VersionTier::EE_9),
    ("InvalidAnnotationOnNonSizeMethodOrField", VersionTier::EE_9),
    ("InvalidAnnotationOnNonStringMethodOrField", VersionTier::EE_9),
    // Servlet
    ("ClassWebFilterAnnotatedNoFilterInterfaceImpl", VersionTier::EE_9),
    ("WebFilterAnnotationMissingAttributes", VersionTier::EE_9),
    ("WebFilterAnnotationAttributeConflict", VersionTier::EE_9),
    ("WebFilterAnnotatedClassReqIfaceNoImpl", VersionTier::EE_9),
    ("WebServletAnnotatedClassDoesNotExtendHttpServlet", VersionTier::EE_9),
    (
        "WebServletAnnotatedClassUnknownSuperTypeDoesNotExtendHttpServlet",
        VersionTier::EE_9,
    ),
    ("WebServletAnnotationMissingAttributes", VersionTier::EE_9),
    ("WebServletAnnotationAttributeConflict", VersionTier::EE_9),
    // Persistence
    ("InvalidFinalMethodInEntityAnnotatedClass", VersionTier::EE_9),
    ("InvalidPersistentFieldInEntityAnnotatedClass", VersionTier::EE_9),
    ("InvalidConstructorInEntityAnnotatedClass", VersionTier::EE_9),
    ("InvalidFinalModifierOnEntityAnnotatedClass", VersionTier::EE_9),
    ("InvalidMapKeyAnnotationsOnSameMethod", VersionTier::EE_9),
    ("InvalidMapKeyAnnotationsOnSameField", VersionTier::EE_9),
    ("InvalidMethodWithMultipleMPJCAnnotations", VersionTier::EE_9),
    ("InvalidFieldWithMultipleMPJCAnnotations", VersionTier::EE_9),
    ("InvalidTypeOfField", VersionTier::EE_9),
    ("InvalidMethodName", VersionTier::EE_9),
    ("InvalidMethodAccessSpecifier", VersionTier::EE_9),
    ("InvalidReturnTypeOfMethod", VersionTier::EE_9),
    ("InvalidMapKeyAnnotationsFieldNotFound", VersionTier::EE_9),
    // WebSocket
    ("InvalidOnOpenParams", VersionTier::EE_9),
    ("InvalidOnCloseParams", VersionTier::EE_9),
    ("PathParamsMissingFromParam", VersionTier::EE_9),
    // EE 10
    ("InvalidDateFormat", VersionTier::EE_10),
    // EE 11
    ("InvalidInjectFinalField", VersionTier::EE_11),
];

/// The built-in rules, in declaration order.
pub fn default_rules() -> Vec<DiagnosticRule> {
    DEFAULT_RULES
        .iter()
        .map(|(code, min_tier)| DiagnosticRule::new(*code, *min_tier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_duplicate_codes() {
        let result = RuleCatalog::new([
            DiagnosticRule::new("SameCode", VersionTier::EE_9),
            DiagnosticRule::new("SameCode", VersionTier::EE_10),
        ]);

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateCode(code)) if code == "SameCode"
        ));
    }

    #[test]
    fn default_catalog_builds_without_collisions() {
        let catalog = RuleCatalog::default_catalog();
        assert_eq!(catalog.len(), DEFAULT_RULES.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn get_finds_rules_by_code() {
        let catalog = RuleCatalog::default_catalog();

        let rule = catalog.get("InvalidDateFormat").unwrap();
        assert_eq!(rule.min_tier, VersionTier::EE_10);
        assert_eq!(rule.max_tier, None);

        assert!(catalog.get("NoSuchCode").is_none());
    }

    #[test]
    fn rules_introduced_at_filters_by_exact_min_tier() {
        let catalog = RuleCatalog::default_catalog();

        let ee10 = catalog.rules_introduced_at(VersionTier::EE_10);
        assert_eq!(ee10.len(), 1);
        assert_eq!(ee10[0].code, "InvalidDateFormat");

        let ee11 = catalog.rules_introduced_at(VersionTier::EE_11);
        assert_eq!(ee11.len(), 1);
        assert_eq!(ee11[0].code, "InvalidInjectFinalField");

        assert!(catalog.rules_introduced_at(VersionTier::UNKNOWN).is_empty());
    }

    #[test]
    fn applicable_rules_grow_with_the_tier() {
        let catalog = RuleCatalog::default_catalog();

        let at_9 = catalog.applicable_rules(VersionTier::EE_9);
        let at_10 = catalog.applicable_rules(VersionTier::EE_10);
        let at_11 = catalog.applicable_rules(VersionTier::EE_11);

        // No max-tier rules in the default set, so each tier adds rules.
        assert_eq!(at_9.len() + 1, at_10.len());
        assert_eq!(at_10.len() + 1, at_11.len());
        assert_eq!(at_11.len(), catalog.len());

        assert!(at_9.iter().all(|rule| rule.min_tier == VersionTier::EE_9));
    }

    #[test]
    fn applicable_rules_is_empty_for_unknown() {
        let catalog = RuleCatalog::default_catalog();
        assert!(catalog.applicable_rules(VersionTier::UNKNOWN).is_empty());
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let catalog = RuleCatalog::new([
            DiagnosticRule::new("First", VersionTier::EE_10),
            DiagnosticRule::new("Second", VersionTier::EE_9),
            DiagnosticRule::new("Third", VersionTier::EE_11),
        ])
        .unwrap();

        let codes: Vec<_> = catalog.iter().map(|rule| rule.code.as_str()).collect();
        assert_eq!(codes, ["First", "Second", "Third"]);
    }

    #[test]
    fn retired_rule_in_a_custom_catalog_is_gated_both_ways() {
        let catalog = RuleCatalog::new([
            DiagnosticRule::new("Current", VersionTier::EE_9),
            DiagnosticRule::with_max("Retired", VersionTier::EE_9, VersionTier::EE_10),
        ])
        .unwrap();

        let at_11: Vec<_> = catalog
            .applicable_rules(VersionTier::EE_11)
            .iter()
            .map(|rule| rule.code.as_str())
            .collect();
        assert_eq!(at_11, ["Current"]);

        let at_10 = catalog.applicable_rules(VersionTier::EE_10);
        assert_eq!(at_10.len(), 2);
    }
}
