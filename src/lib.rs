//! 2D spatial index: a region quadtree whose nodes sort boundary-straddling
//! rectangles into per-axis bucket trees.
//!
//! ```rust
//! use quadaxis::{Quadtree, Rectangle};
//!
//! let mut index = Quadtree::new(Rectangle::of(0.0, 16.0, 16.0, 16.0), 4);
//! index.insert(Rectangle::of(4.5, 6.5, 0.1, 0.1));
//! index.insert(Rectangle::of(7.0, 9.0, 2.0, 2.0));
//!
//! let hits = index.query(&Rectangle::of(3.0, 7.0, 2.0, 2.0));
//! assert_eq!(hits.len(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod validation;

#[cfg(feature = "sync")]
pub mod sync;

pub use builder::QuadtreeBuilder;
pub use config::IndexConfig;
pub use error::{QuadaxisError, Result};

pub use index::{
    Axis, AxisPosition, IndexStats, Quadrant, QueryResult, QueryStats, Quadtree, classify,
};

#[cfg(feature = "sync")]
pub use sync::SyncQuadtree;

pub use quadaxis_types::{Entry, Rectangle, Rectangular, intersects};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{QuadaxisError, Quadtree, QuadtreeBuilder, Result};

    pub use crate::{Entry, IndexConfig, Rectangle, Rectangular};

    pub use crate::{QueryResult, QueryStats};

    #[cfg(feature = "sync")]
    pub use crate::SyncQuadtree;

    pub use geo::{Point, Rect};
}
