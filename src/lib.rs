//! Jakarta EE platform version inference and diagnostic applicability
//!
//! Given a project's classpath entries, this library infers which Jakarta EE
//! platform tier the project targets, memoizes the result per project, and
//! gates a catalog of diagnostic rules by that tier. It is a pure, synchronous,
//! in-process library: the surrounding tooling (AST scanners, LSP transport,
//! classpath enumeration) supplies inputs and consumes the results.
//!
//! # Data flow
//!
//! ```text
//! classpath entries ──▶ ClasspathDetector ──▶ ProjectVersionCache
//!                              │                      │
//!                       module thresholds      tier per project
//!                              │                      ▼
//!                              └──────────▶ RuleCatalog::applicable_rules
//! ```
//!
//! # Example
//!
//! ```
//! use jakarta_version::config::VersionConfig;
//! use jakarta_version::version::cache::ProjectVersionCache;
//!
//! let config = VersionConfig::default();
//! let detector = config.detector();
//! let catalog = config.catalog()?;
//! let cache = ProjectVersionCache::new();
//!
//! let entries = vec!["lib/jakartaee-api-10.0.0.jar".to_string()];
//! let tier = cache.get_or_detect("my-app", &entries, &detector)?;
//!
//! assert_eq!(tier.label(), "Jakarta EE 10");
//! assert!(!catalog.applicable_rules(tier).is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod version;
