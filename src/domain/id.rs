//! Identifiers for venues and unified items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Venue a listing came from, e.g. `polymarket` or `kalshi`.
///
/// Compared verbatim: `Kalshi` and `kalshi` are different venues.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SiteId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of one unified product, a random UUID v4 per run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnifiedId(String);

/// Length of the display form returned by [`UnifiedId::short`].
const SHORT_LEN: usize = 8;

impl UnifiedId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for tables and logs.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..SHORT_LEN).unwrap_or(&self.0)
    }
}

impl Default for UnifiedId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UnifiedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UnifiedId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UnifiedId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_id_new_and_as_str() {
        let id = SiteId::new("kalshi");
        assert_eq!(id.as_str(), "kalshi");
    }

    #[test]
    fn site_id_display() {
        let id = SiteId::from("polymarket");
        assert_eq!(format!("{}", id), "polymarket");
    }

    #[test]
    fn unified_id_generates_unique_ids() {
        let id1 = UnifiedId::new();
        let id2 = UnifiedId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn unified_id_short_is_uuid_prefix() {
        let id = UnifiedId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }

    #[test]
    fn unified_id_short_tolerates_short_values() {
        let id = UnifiedId::from("abc");
        assert_eq!(id.short(), "abc");
    }
}
