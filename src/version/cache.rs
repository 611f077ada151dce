//! Per-project memoization of detected platform tiers
//!
//! The cache is an explicitly constructed instance, owned by whatever service
//! hosts the diagnostics pipeline and handed to consumers by reference. It
//! never re-validates against classpath changes on its own; the classpath
//! subsystem must call [`ProjectVersionCache::remove`] (or `clear`) when a
//! project's dependencies change.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::version::detector::ClasspathDetector;
use crate::version::error::CacheError;
use crate::version::tier::VersionTier;

/// Thread-safe map of project key to detected platform tier.
#[derive(Debug, Default)]
pub struct ProjectVersionCache {
    map: Mutex<HashMap<String, VersionTier>>,
}

impl ProjectVersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the map lock with proper error handling
    fn lock_map(&self) -> Result<MutexGuard<'_, HashMap<String, VersionTier>>, CacheError> {
        self.map.lock().map_err(|_| CacheError::LockPoisoned)
    }

    /// Return the cached tier for `project`, detecting and storing it on the
    /// first call.
    ///
    /// Detection runs under the map lock, so racing callers for the same
    /// project compute it exactly once. The cached value is returned on every
    /// later call, even with different `entries`, until the project is
    /// removed or the cache cleared.
    pub fn get_or_detect(
        &self,
        project: &str,
        entries: &[String],
        detector: &ClasspathDetector,
    ) -> Result<VersionTier, CacheError> {
        let mut map = self.lock_map()?;

        if let Some(tier) = map.get(project) {
            return Ok(*tier);
        }

        let tier = detector.detect(entries);
        debug!(project, %tier, "caching detected tier");
        map.insert(project.to_string(), tier);
        Ok(tier)
    }

    /// Cached tier for `project`, if any. Never triggers detection.
    pub fn get(&self, project: &str) -> Result<Option<VersionTier>, CacheError> {
        Ok(self.lock_map()?.get(project).copied())
    }

    /// Store or overwrite the tier for `project`.
    pub fn set(&self, project: &str, tier: VersionTier) -> Result<(), CacheError> {
        self.lock_map()?.insert(project.to_string(), tier);
        Ok(())
    }

    pub fn contains(&self, project: &str) -> Result<bool, CacheError> {
        Ok(self.lock_map()?.contains_key(project))
    }

    /// Drop the entry for `project`, returning the tier it held.
    pub fn remove(&self, project: &str) -> Result<Option<VersionTier>, CacheError> {
        Ok(self.lock_map()?.remove(project))
    }

    pub fn clear(&self) -> Result<(), CacheError> {
        self.lock_map()?.clear();
        Ok(())
    }

    pub fn count(&self) -> Result<usize, CacheError> {
        Ok(self.lock_map()?.len())
    }

    /// Defensive copy of the full project-to-tier map.
    pub fn snapshot(&self) -> Result<HashMap<String, VersionTier>, CacheError> {
        Ok(self.lock_map()?.clone())
    }
}
