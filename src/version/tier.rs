//! Jakarta EE platform version tiers
//!
//! The tier set is closed: every tier the crate knows about lives in the
//! [`VersionTier::ALL`] table and nothing is created at runtime. Ordering and
//! equality are defined by the numeric level, with `UNKNOWN` (level 0) sorting
//! below every real tier.

use std::cmp::Ordering;
use std::fmt;

/// A Jakarta EE specification version tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTier {
    level: u32,
    label: &'static str,
}

impl VersionTier {
    /// Unknown or pre-Jakarta EE 9 platform. Never applicable for tier-gated
    /// diagnostics.
    pub const UNKNOWN: VersionTier = VersionTier {
        level: 0,
        label: "Unknown / Pre-Jakarta EE 9",
    };

    pub const EE_9: VersionTier = VersionTier {
        level: 9,
        label: "Jakarta EE 9 / 9.1",
    };

    pub const EE_10: VersionTier = VersionTier {
        level: 10,
        label: "Jakarta EE 10",
    };

    pub const EE_11: VersionTier = VersionTier {
        level: 11,
        label: "Jakarta EE 11",
    };

    /// Every tier, lowest first.
    pub const ALL: &'static [VersionTier] = &[
        VersionTier::UNKNOWN,
        VersionTier::EE_9,
        VersionTier::EE_10,
        VersionTier::EE_11,
    ];

    /// Look up a tier by its exact numeric level.
    ///
    /// Levels not in the table resolve to [`VersionTier::UNKNOWN`]; this is a
    /// total lookup and never fails.
    pub fn from_level(level: u32) -> VersionTier {
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.level == level)
            .unwrap_or(VersionTier::UNKNOWN)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_unknown(&self) -> bool {
        self.level == 0
    }
}

// Tiers order by level alone; labels are display metadata.
impl PartialOrd for VersionTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
    }
}

impl fmt::Display for VersionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
