//! Window queries.
//!
//! Every query walks the quadtree with an explicit stack, scanning both axis
//! trees of every node it reaches. A quadrant is skipped when the window lies
//! strictly on the other side of one of its parent's split lines. Because each element is stored exactly once, results never
//! contain duplicates. Result order is unspecified.

use super::axis::{Axis, classify};
use super::node::Quadrant;
use super::{QuadId, Quadtree, ROOT};
use quadaxis_types::rect::{Rectangle, Rectangular};
use smallvec::{SmallVec, smallvec};
use std::ops::ControlFlow;

/// Counters describing how much of the tree a query touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Quadtree nodes whose region overlapped the window
    pub quad_nodes_visited: usize,

    /// Quadtree nodes skipped because their region missed the window
    pub quad_nodes_pruned: usize,

    /// Axis tree nodes whose bucket was scanned
    pub axis_nodes_visited: usize,

    /// Stored elements given the exact intersection test
    pub candidates_tested: usize,

    /// Elements that passed the test
    pub results_returned: usize,
}

/// Matches of a query together with its [`QueryStats`].
#[derive(Debug, Clone)]
pub struct QueryResult<'a, R> {
    pub items: Vec<&'a R>,
    pub stats: QueryStats,
}

impl<'a, R> QueryResult<'a, R> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<R: Rectangular> Quadtree<R> {
    /// Find every stored element whose rectangle intersects `window`.
    ///
    /// Edges are inclusive: an element that only touches the window is
    /// returned. The returned references point into the index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadaxis::{Quadtree, Rectangle};
    ///
    /// let mut index = Quadtree::new(Rectangle::of(0.0, 100.0, 100.0, 100.0), 4);
    /// index.insert(Rectangle::new(10.0, 10.0, 5.0, 5.0));
    /// index.insert(Rectangle::new(20.0, 20.0, 5.0, 5.0));
    /// index.insert(Rectangle::new(80.0, 80.0, 5.0, 5.0));
    ///
    /// assert_eq!(index.query(&Rectangle::new(15.0, 15.0, 15.0, 15.0)).len(), 2);
    /// assert_eq!(index.query(index.indexed_area()).len(), 3);
    /// ```
    pub fn query<W>(&self, window: &W) -> Vec<&R>
    where
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        let mut items = Vec::new();
        let mut stats = QueryStats::default();
        let _ = self.visit_matches(window, &mut stats, |item| {
            items.push(item);
            ControlFlow::Continue(())
        });
        items
    }

    /// Like [`query`](Self::query), additionally reporting traversal counters.
    pub fn query_with_stats<W>(&self, window: &W) -> QueryResult<'_, R>
    where
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        let mut items = Vec::new();
        let mut stats = QueryStats::default();
        let _ = self.visit_matches(window, &mut stats, |item| {
            items.push(item);
            ControlFlow::Continue(())
        });
        QueryResult { items, stats }
    }

    /// Return at most `limit` intersecting elements.
    ///
    /// Traversal stops as soon as the limit is reached, so which elements make
    /// the cut is unspecified.
    pub fn query_with_limit<W>(&self, window: &W, limit: usize) -> Vec<&R>
    where
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        let mut items = Vec::new();
        if limit == 0 {
            return items;
        }

        let mut stats = QueryStats::default();
        let _ = self.visit_matches(window, &mut stats, |item| {
            items.push(item);
            if items.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        items
    }

    /// Call `visit` for each intersecting element without collecting them.
    ///
    /// Returning `ControlFlow::Break` from the visitor ends the query; the
    /// break is passed back to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadaxis::{Quadtree, Rectangle};
    /// use std::ops::ControlFlow;
    ///
    /// let mut index = Quadtree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 6);
    /// index.extend((0..5).map(|i| Rectangle::new(i as f64, 0.0, 0.25, 0.25)));
    ///
    /// let mut widest: f64 = 0.0;
    /// let _ = index.query_for_each(&Rectangle::new(0.0, 0.0, 10.0, 1.0), |r| {
    ///     widest = widest.max(r.center_x());
    ///     ControlFlow::Continue(())
    /// });
    /// assert_eq!(widest, 4.0);
    /// ```
    pub fn query_for_each<'a, W, F>(&'a self, window: &W, visit: F) -> ControlFlow<()>
    where
        W: Rectangular<Num = R::Num> + ?Sized,
        F: FnMut(&'a R) -> ControlFlow<()>,
    {
        let mut stats = QueryStats::default();
        self.visit_matches(window, &mut stats, visit)
    }

    /// Number of stored elements intersecting `window`.
    pub fn count<W>(&self, window: &W) -> usize
    where
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        let mut stats = QueryStats::default();
        let _ = self.visit_matches(window, &mut stats, |_| ControlFlow::Continue(()));
        stats.results_returned
    }

    fn visit_matches<'a, W, F>(
        &'a self,
        window: &W,
        stats: &mut QueryStats,
        mut visit: F,
    ) -> ControlFlow<()>
    where
        W: Rectangular<Num = R::Num> + ?Sized,
        F: FnMut(&'a R) -> ControlFlow<()>,
    {
        if !self.area.intersects(window) {
            stats.quad_nodes_pruned += 1;
            return ControlFlow::Continue(());
        }

        let mut stack: SmallVec<[(QuadId, Rectangle<R::Num>); 32]> = smallvec![(ROOT, self.area)];

        while let Some((id, region)) = stack.pop() {
            stats.quad_nodes_visited += 1;

            let node = &self.quads[id];
            for axis in [Axis::X, Axis::Y] {
                self.axes.visit(
                    node.axis_root(axis),
                    region,
                    window,
                    axis,
                    &self.elements,
                    stats,
                    &mut visit,
                )?;
            }

            // Descend by the same split lines insertion used, never by the
            // derived child regions: those can shrink when halving rounds.
            let x = classify(&region, window, Axis::X);
            let y = classify(&region, window, Axis::Y);
            for quadrant in Quadrant::ALL {
                let Some(child) = node.child(quadrant) else {
                    continue;
                };
                if quadrant.reachable(x, y) {
                    stack.push((child, quadrant.child_region(&region)));
                } else {
                    stats.quad_nodes_pruned += 1;
                }
            }
        }

        ControlFlow::Continue(())
    }
}
