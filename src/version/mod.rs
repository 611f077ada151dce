//! Platform version inference layer
//!
//! This module infers which Jakarta EE tier a project targets from its
//! classpath and memoizes the result per project.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Detector   │────▶│    Cache    │◀────│  Consumers  │
//! │  (scan)     │     │ (per-proj)  │     │ (rule gate) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Modules   │────▶│    Tier     │
//! │ (thresholds)│     │ (closed set)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tier`]: closed, totally ordered set of platform tiers
//! - [`parse`]: lenient major.minor parsing of artifact versions
//! - [`modules`]: per-specification-module version threshold tables
//! - [`detector`]: classpath scanning and candidate reduction
//! - [`cache`]: per-project tier memoization
//! - [`error`]: error types for cache and catalog operations

pub mod cache;
pub mod detector;
pub mod error;
pub mod modules;
pub mod parse;
pub mod tier;
