//! Search configuration for the fare planner.

use std::time::Duration;

/// Limits applied to a single cheapest-fare search.
///
/// Limits are checked between iterations of the search loop, so a search
/// that exceeds one stops cleanly without touching any shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of cities to settle before giving up.
    /// `None` means no cap.
    pub max_settled: Option<usize>,

    /// Maximum wall-clock time for one search.
    /// `None` means no deadline.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_settled: Option<usize>, timeout: Option<Duration>) -> Self {
        Self {
            max_settled,
            timeout,
        }
    }

    /// A configuration with no limits at all.
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Returns true if neither limit is set.
    pub fn is_unbounded(&self) -> bool {
        self.max_settled.is_none() && self.timeout.is_none()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_settled: None,
            timeout: Some(Duration::from_secs(2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_settled, None);
        assert_eq!(config.timeout, Some(Duration::from_secs(2)));
        assert!(!config.is_unbounded());
    }

    #[test]
    fn unbounded_config() {
        let config = SearchConfig::unbounded();

        assert_eq!(config.max_settled, None);
        assert_eq!(config.timeout, None);
        assert!(config.is_unbounded());
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Some(500), Some(Duration::from_millis(50)));

        assert_eq!(config.max_settled, Some(500));
        assert_eq!(config.timeout, Some(Duration::from_millis(50)));
    }
}
