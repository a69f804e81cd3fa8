//! Index configuration.
//!
//! `IndexConfig` holds the settings that do not depend on the coordinate type,
//! so it can be loaded from JSON (or TOML with the `toml` feature) and handed
//! to [`QuadtreeBuilder`](crate::builder::QuadtreeBuilder).
use serde::de::Error;

/// Depth beyond which subdivision stops paying off for any practical dataset.
pub(crate) const DEEP_TREE_WARNING: u32 = 32;

/// Largest accepted max depth. After 64 halvings a region is below the
/// resolution of every supported coordinate type (`f64` and 64-bit integers).
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Index configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Maximum quadrant subdivision depth (and axis tree depth). The root is depth 1.
    #[serde(default = "IndexConfig::default_max_depth")]
    pub max_depth: u32,

    /// Number of elements to reserve storage for up front
    #[serde(default)]
    pub element_capacity: usize,
}

impl IndexConfig {
    const fn default_max_depth() -> u32 {
        10
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        assert!(max_depth > 0, "Max depth must be greater than zero");

        if max_depth > DEEP_TREE_WARNING {
            log::warn!(
                "Max depth of {} is very deep; regions stop shrinking meaningfully long before that",
                max_depth
            );
        }

        self.max_depth = max_depth;
        self
    }

    pub fn with_element_capacity(mut self, capacity: usize) -> Self {
        self.element_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("Max depth must be greater than zero".to_string());
        }

        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(format!(
                "Max depth {} exceeds the limit of {}",
                self.max_depth, MAX_DEPTH_LIMIT
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: IndexConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: IndexConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::default_max_depth(),
            element_capacity: 0,
        }
    }
}
