use serde::{Deserialize, Serialize};

/// Largest amount, in tokens, a single HTLC may carry (2^32 - 1 mtokens).
pub const MAX_SINGLE_HOP_TOKENS: u64 = 4_294_967;

/// Default number of disjoint paths the multi-path search may collect.
pub const DEFAULT_MAX_PATHS: usize = 7;

/// Default search ceiling as a percentage of [`MAX_SINGLE_HOP_TOKENS`].
pub const DEFAULT_SEARCH_CEILING_PERCENT: u8 = 99;

/// Tunables for the route finder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Path-count budget applied when a request does not set its own.
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
    /// Share of the single-hop maximum the multi-path prober searches up to.
    #[serde(default = "default_search_ceiling_percent")]
    pub search_ceiling_percent: u8,
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}
fn default_search_ceiling_percent() -> u8 {
    DEFAULT_SEARCH_CEILING_PERCENT
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_paths: default_max_paths(),
            search_ceiling_percent: default_search_ceiling_percent(),
        }
    }
}

impl RouterConfig {
    /// Largest amount, in tokens, requested from the multi-path prober.
    pub fn search_ceiling(&self) -> u64 {
        let percent = u64::from(self.search_ceiling_percent.min(100));
        MAX_SINGLE_HOP_TOKENS * percent / 100
    }
}
