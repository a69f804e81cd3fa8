//! Index builder for validated construction
//!
//! `Quadtree::new` trusts its arguments. The builder checks the indexed area
//! and the configuration first and reports problems as errors instead.

use crate::config::IndexConfig;
use crate::error::{QuadaxisError, Result};
use crate::index::Quadtree;
#[cfg(feature = "sync")]
use crate::sync::SyncQuadtree;
use crate::validation::{validate_max_depth, validate_rect};
use geo::CoordNum;
use quadaxis_types::rect::{Rectangle, Rectangular};

/// Builder for an index over a fixed area.
///
/// # Examples
///
/// ```rust
/// use quadaxis::{IndexConfig, QuadtreeBuilder, Quadtree, Rectangle};
///
/// let config = IndexConfig::from_json(r#"{ "max_depth": 6 }"#)?;
/// let index: Quadtree<Rectangle<f64>> = QuadtreeBuilder::new(Rectangle::of(0.0, 100.0, 100.0, 100.0))
///     .config(config)
///     .element_capacity(1_000)
///     .build()?;
/// assert_eq!(index.max_depth(), 6);
/// # Ok::<(), quadaxis::QuadaxisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadtreeBuilder<N> {
    area: Rectangle<N>,
    config: IndexConfig,
}

impl<N: CoordNum> QuadtreeBuilder<N> {
    /// Create a builder over `area` with the default configuration.
    pub fn new(area: Rectangle<N>) -> Self {
        Self {
            area,
            config: IndexConfig::default(),
        }
    }

    /// Set the subdivision bound. Checked in [`build`](Self::build).
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Reserve room for this many elements.
    pub fn element_capacity(mut self, capacity: usize) -> Self {
        self.config.element_capacity = capacity;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: IndexConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the area and configuration, then create the index.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if the area is not a finite box with non-negative half
    /// extents, `InvalidDepth` for a zero depth bound, `InvalidConfig` for a
    /// depth bound above [`MAX_DEPTH_LIMIT`](crate::config::MAX_DEPTH_LIMIT).
    pub fn build<R>(self) -> Result<Quadtree<R>>
    where
        R: Rectangular<Num = N>,
    {
        validate_rect(&self.area)?;
        validate_max_depth(self.config.max_depth)?;
        self.config.validate().map_err(QuadaxisError::InvalidConfig)?;

        Ok(Quadtree::with_config(self.area, &self.config))
    }

    /// Like [`build`](Self::build), wrapped for shared access across threads.
    #[cfg(feature = "sync")]
    pub fn build_sync<R>(self) -> Result<SyncQuadtree<R>>
    where
        R: Rectangular<Num = N>,
    {
        Ok(SyncQuadtree::from_tree(self.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let index: Quadtree<Rectangle<f64>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, 0.0, 10.0, 10.0))
                .build()
                .unwrap();
        assert_eq!(index.max_depth(), IndexConfig::default().max_depth);
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_rejects_zero_depth() {
        let result: Result<Quadtree<Rectangle<f64>>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, 0.0, 10.0, 10.0))
                .max_depth(0)
                .build();
        assert!(matches!(result, Err(QuadaxisError::InvalidDepth(0))));
    }

    #[test]
    fn test_build_rejects_depth_above_limit() {
        let result: Result<Quadtree<Rectangle<f64>>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, 0.0, 10.0, 10.0))
                .max_depth(65)
                .build();
        assert!(matches!(result, Err(QuadaxisError::InvalidConfig(_))));

        let result: Result<Quadtree<Rectangle<f64>>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, 0.0, 10.0, 10.0))
                .max_depth(64)
                .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_rejects_bad_area() {
        let result: Result<Quadtree<Rectangle<f64>>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, 0.0, -10.0, 10.0)).build();
        assert!(matches!(result, Err(QuadaxisError::InvalidGeometry(_))));

        let result: Result<Quadtree<Rectangle<f64>>> =
            QuadtreeBuilder::new(Rectangle::new(0.0, f64::INFINITY, 10.0, 10.0)).build();
        assert!(matches!(result, Err(QuadaxisError::InvalidGeometry(_))));
    }

    #[test]
    fn test_build_from_json_config() {
        let config = IndexConfig::from_json(r#"{"max_depth": 3, "element_capacity": 16}"#).unwrap();
        let mut index: Quadtree<Rectangle<i64>> = QuadtreeBuilder::new(Rectangle::of(0, 64, 64, 64))
            .config(config)
            .build()
            .unwrap();
        index.insert(Rectangle::new(8_i64, 8, 1, 1));
        assert_eq!(index.max_depth(), 3);
        assert_eq!(index.stats().deepest_level, 3);
    }
}
