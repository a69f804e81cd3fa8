//! # Quadtree with Axis Bucket Trees
//!
//! A region quadtree in which elements that cannot be pushed into a single
//! quadrant are not dumped into the node that stops them. Instead each node
//! keeps two small binary trees, one per axis, that keep localizing those
//! elements along the axis they do *not* straddle.
//!
//! ## Why
//!
//! In a plain region quadtree any element crossing the root's center lines
//! stays at the root, and so does everything touching a split line deeper
//! down. Queries then have to test all of those elements every time. The axis
//! trees bound that cost: an element straddling the vertical split is sorted
//! by its Y position, one straddling the horizontal split by its X position.
//!
//! ## Insertion Flow
//! ```text
//! 1. Classify the element against the current region on X and Y
//! 2. Neither axis straddled and depth < max_depth:
//!    - pick the quadrant holding the element's center
//!    - create the child if missing, descend with the child region
//! 3. Otherwise stop at this node:
//!    - straddles X  -> this node's Y axis tree
//!    - anything else -> this node's X axis tree
//! 4. In the axis tree, descend left/right until the element straddles the
//!    node's center line or the depth bound is hit, then append to its bucket
//! ```
//!
//! ## Query Flow
//! ```text
//! 1. Indexed area misses the window -> empty result
//! 2. Scan both axis trees: test every bucketed element exactly, descend
//!    only into the sides the window reaches
//! 3. Classify the window against the node's split lines and push the
//!    existing children on the sides it reaches, with their derived regions
//! ```
//!
//! Pruning never compares the window with a derived child region. Halving
//! may round (integer coordinates truncate), so derived regions can be
//! slightly smaller than the space their elements were routed into. The
//! split lines themselves are shared by insertion and query, which keeps
//! results exact for every coordinate type.
//!
//! ## Memory Layout
//!
//! ```text
//! Quadtree
//! ├─ quads: Vec<QuadNode>          (index 0 is the root)
//! │  └─ children: [Option<QuadId>; 4], x_axis, y_axis: Option<AxisId>
//! ├─ axes: Vec<AxisNode>
//! │  └─ left, right: Option<AxisId>, bucket: [ElementId]
//! └─ elements: Vec<R>              (insertion order)
//! ```
//!
//! Node regions are never stored; they are recomputed while walking down from
//! the indexed area.

mod axis;
mod bucket;
mod node;
mod query;


pub use axis::{Axis, AxisPosition, classify};
pub use node::Quadrant;
pub use query::{QueryResult, QueryStats};

use crate::config::{DEEP_TREE_WARNING, IndexConfig};
use crate::error::Result;
use crate::validation::{validate_rect, validate_within};
use bucket::AxisTrees;
use node::QuadNode;
use quadaxis_types::rect::{Rectangle, Rectangular};

pub(crate) type QuadId = usize;
pub(crate) type AxisId = usize;
pub(crate) type ElementId = usize;

const ROOT: QuadId = 0;

/// Shape and size of an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of stored elements
    pub element_count: usize,
    /// Quadtree nodes, root included
    pub quad_node_count: usize,
    /// Axis tree nodes across all quadtree nodes
    pub axis_node_count: usize,
    /// Deepest quadtree level holding an element (the root is level 1)
    pub deepest_level: u32,
    /// Size of the fullest axis bucket
    pub largest_bucket: usize,
}

/// Spatial index over a fixed region for anything [`Rectangular`].
///
/// # Thread Safety
///
/// `insert` takes `&mut self` and `query` takes `&self`, so the borrow checker
/// already enforces build-then-query or a single owner. For shared access
/// across threads wrap it in a lock, or use `SyncQuadtree` (feature `sync`).
///
/// # Examples
///
/// ```rust
/// use quadaxis::{Quadtree, Rectangle};
///
/// let area = Rectangle::of(0.0, 16.0, 16.0, 16.0);
/// let mut index = Quadtree::new(area, 4);
///
/// let marker = Rectangle::of(4.5, 6.5, 0.1, 0.1);
/// index.insert(marker);
///
/// let hits = index.query(&Rectangle::of(3.0, 7.0, 2.0, 2.0));
/// assert_eq!(hits, vec![&marker]);
/// ```
#[derive(Debug, Clone)]
pub struct Quadtree<R: Rectangular> {
    area: Rectangle<R::Num>,
    max_depth: u32,
    quads: Vec<QuadNode>,
    axes: AxisTrees,
    elements: Vec<R>,
    deepest: u32,
}

impl<R: Rectangular> Quadtree<R> {
    /// Create an empty index over `area`.
    ///
    /// # Arguments
    ///
    /// * `area` - Region covered by the index; elements are expected to lie inside it
    /// * `max_depth` - Subdivision bound. The root is depth 1, so `1` means no
    ///   quadrant below the root is ever created. Axis trees use the same bound.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` is zero. Use [`QuadtreeBuilder`](crate::QuadtreeBuilder)
    /// for a fallible constructor.
    pub fn new(area: Rectangle<R::Num>, max_depth: u32) -> Self {
        assert!(max_depth > 0, "Max depth must be greater than zero");
        Self::with_config(
            area,
            &IndexConfig {
                max_depth,
                ..IndexConfig::default()
            },
        )
    }

    /// Create an empty index from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.max_depth` is zero.
    pub fn with_config(area: Rectangle<R::Num>, config: &IndexConfig) -> Self {
        assert!(config.max_depth > 0, "Max depth must be greater than zero");

        if config.max_depth > DEEP_TREE_WARNING {
            log::warn!(
                "Quadtree max depth {} exceeds {}; deep levels will be mostly empty",
                config.max_depth,
                DEEP_TREE_WARNING
            );
        }
        log::debug!(
            "creating quadtree over {:?} with max depth {}",
            area,
            config.max_depth
        );

        Self {
            area,
            max_depth: config.max_depth,
            quads: vec![QuadNode::default()],
            axes: AxisTrees::default(),
            elements: Vec::with_capacity(config.element_capacity),
            deepest: 0,
        }
    }

    /// The region covered by the index.
    pub fn indexed_area(&self) -> &Rectangle<R::Num> {
        &self.area
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over all stored elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.elements.iter()
    }

    /// Store an element.
    ///
    /// The element is moved into the index. Its geometry must be finite, have
    /// non-negative half extents and lie inside the indexed area; none of this
    /// is checked (see [`try_insert`](Self::try_insert)). Cost is bounded by
    /// the max depth and independent of how many elements are stored.
    pub fn insert(&mut self, element: R) {
        let id = self.elements.len();

        let mut node = ROOT;
        let mut region = self.area;
        let mut depth = 1;
        loop {
            let x = classify(&region, &element, Axis::X);
            let y = classify(&region, &element, Axis::Y);

            if depth < self.max_depth && x != AxisPosition::Center && y != AxisPosition::Center {
                let quadrant = Quadrant::containing(&region, &element);
                node = self.child_or_insert(node, quadrant, depth);
                region = quadrant.child_region(&region);
                depth += 1;
                continue;
            }

            // Bucket by the axis the element does not straddle.
            let axis = if x == AxisPosition::Center {
                Axis::Y
            } else {
                Axis::X
            };
            let root = self.axes.insert(
                self.quads[node].axis_root(axis),
                region,
                &element,
                id,
                axis,
                self.max_depth,
            );
            self.quads[node].set_axis_root(axis, root);
            break;
        }

        self.deepest = self.deepest.max(depth);
        self.elements.push(element);
    }

    /// Validate an element's geometry and bounds, then insert it.
    ///
    /// # Errors
    ///
    /// [`QuadaxisError::InvalidGeometry`](crate::QuadaxisError::InvalidGeometry)
    /// for non-finite coordinates or negative half extents, and
    /// [`QuadaxisError::OutOfBounds`](crate::QuadaxisError::OutOfBounds) when
    /// the element is not inside the indexed area. Nothing is stored on error.
    pub fn try_insert(&mut self, element: R) -> Result<()> {
        validate_rect(&element)?;
        validate_within(&self.area, &element)?;
        self.insert(element);
        Ok(())
    }

    /// Collect statistics about the index shape.
    pub fn stats(&self) -> IndexStats {
        let largest_bucket = self
            .axes
            .nodes()
            .iter()
            .map(|node| node.bucket().len())
            .max()
            .unwrap_or(0);

        IndexStats {
            element_count: self.elements.len(),
            quad_node_count: self.quads.len(),
            axis_node_count: self.axes.len(),
            deepest_level: self.deepest,
            largest_bucket,
        }
    }

    fn child_or_insert(&mut self, node: QuadId, quadrant: Quadrant, depth: u32) -> QuadId {
        if let Some(child) = self.quads[node].child(quadrant) {
            return child;
        }

        self.quads.push(QuadNode::default());
        let child = self.quads.len() - 1;
        self.quads[node].set_child(quadrant, child);
        log::trace!(
            "materialized {:?} quadrant node {} at depth {}",
            quadrant,
            child,
            depth + 1
        );
        child
    }
}

impl<R: Rectangular> Extend<R> for Quadtree<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, R: Rectangular> IntoIterator for &'a Quadtree<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
