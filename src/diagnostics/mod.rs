//! Diagnostic rule layer
//! - rules.rs: DiagnosticRule definition and tier applicability predicate
//! - catalog.rs: deduplicated rule catalog and the built-in rule set

pub mod catalog;
pub mod rules;

pub use catalog::{RuleCatalog, default_rules};
pub use rules::{DiagnosticRule, RuleDef};
