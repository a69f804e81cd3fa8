//! Axis bucket trees.
//!
//! Every quadtree node owns up to two binary trees, one keyed along X and one
//! along Y. They hold the elements that cannot move further down the quadtree
//! because they straddle a split line (or the depth bound was reached). Each
//! tree node splits its region in half along its axis only; an element is
//! kept in the bucket of the first node whose center line it straddles.
//!
//! All axis nodes of an index live in one arena, addressed by [`AxisId`].

use super::axis::{Axis, AxisPosition, classify, split};
use super::query::QueryStats;
use super::{AxisId, ElementId};
use quadaxis_types::rect::{Rectangle, Rectangular};
use smallvec::{SmallVec, smallvec};
use std::ops::ControlFlow;

#[derive(Debug, Clone, Default)]
pub(crate) struct AxisNode {
    left: Option<AxisId>,
    right: Option<AxisId>,
    /// Elements terminal at this node, in insertion order
    bucket: SmallVec<[ElementId; 4]>,
}

impl AxisNode {
    fn child(&self, side: AxisPosition) -> Option<AxisId> {
        match side {
            AxisPosition::Left => self.left,
            _ => self.right,
        }
    }

    pub(crate) fn bucket(&self) -> &[ElementId] {
        &self.bucket
    }
}

/// Arena of axis bucket tree nodes shared by all quadtree nodes of one index.
#[derive(Debug, Clone, Default)]
pub(crate) struct AxisTrees {
    nodes: Vec<AxisNode>,
}

impl AxisTrees {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn nodes(&self) -> &[AxisNode] {
        &self.nodes
    }

    fn alloc(&mut self) -> AxisId {
        self.nodes.push(AxisNode::default());
        self.nodes.len() - 1
    }

    fn child_or_insert(&mut self, node: AxisId, side: AxisPosition) -> AxisId {
        let existing = self.nodes[node].child(side);
        if let Some(child) = existing {
            return child;
        }

        let child = self.alloc();
        let slot = match side {
            AxisPosition::Left => &mut self.nodes[node].left,
            _ => &mut self.nodes[node].right,
        };
        *slot = Some(child);
        log::trace!("materialized axis node {} ({:?} of {})", child, side, node);
        child
    }

    /// Store `element` (whose geometry is `rect`) in the tree rooted at `root`,
    /// creating the root if the tree does not exist yet.
    ///
    /// Returns the root id. Depth counting starts at 0 for every tree,
    /// independent of how deep the owning quadtree node is.
    pub(crate) fn insert<R>(
        &mut self,
        root: Option<AxisId>,
        mut region: Rectangle<R::Num>,
        rect: &R,
        element: ElementId,
        axis: Axis,
        max_depth: u32,
    ) -> AxisId
    where
        R: Rectangular + ?Sized,
    {
        let root = match root {
            Some(root) => root,
            None => self.alloc(),
        };

        let mut node = root;
        let mut depth = 0;
        loop {
            let position = classify(&region, rect, axis);
            if position == AxisPosition::Center || depth >= max_depth {
                self.nodes[node].bucket.push(element);
                return root;
            }

            node = self.child_or_insert(node, position);
            region = split(&region, axis, position);
            depth += 1;
        }
    }

    /// Feed every element of the tree rooted at `root` that intersects
    /// `window` to `visit`.
    ///
    /// Bucket membership only says where an element cannot be, so each
    /// candidate gets an exact intersection test before it is reported.
    pub(crate) fn visit<'a, R, W, F>(
        &self,
        root: Option<AxisId>,
        region: Rectangle<R::Num>,
        window: &W,
        axis: Axis,
        elements: &'a [R],
        stats: &mut QueryStats,
        visit: &mut F,
    ) -> ControlFlow<()>
    where
        R: Rectangular,
        W: Rectangular<Num = R::Num> + ?Sized,
        F: FnMut(&'a R) -> ControlFlow<()>,
    {
        let Some(root) = root else {
            return ControlFlow::Continue(());
        };

        let mut stack: SmallVec<[(AxisId, Rectangle<R::Num>); 16]> = smallvec![(root, region)];
        while let Some((id, region)) = stack.pop() {
            let node = &self.nodes[id];
            stats.axis_nodes_visited += 1;

            for &element in &node.bucket {
                let candidate = &elements[element];
                stats.candidates_tested += 1;
                if candidate.intersects(window) {
                    stats.results_returned += 1;
                    visit(candidate)?;
                }
            }

            match classify(&region, window, axis) {
                AxisPosition::Center => {
                    for side in [AxisPosition::Left, AxisPosition::Right] {
                        if let Some(child) = node.child(side) {
                            stack.push((child, split(&region, axis, side)));
                        }
                    }
                }
                side => {
                    if let Some(child) = node.child(side) {
                        stack.push((child, split(&region, axis, side)));
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(
        trees: &AxisTrees,
        root: AxisId,
        region: Rectangle<f64>,
        window: &Rectangle<f64>,
        axis: Axis,
        elements: &[Rectangle<f64>],
    ) -> Vec<usize> {
        let mut found = Vec::new();
        let mut stats = QueryStats::default();
        let _ = trees.visit(
            Some(root),
            region,
            window,
            axis,
            elements,
            &mut stats,
            &mut |r: &Rectangle<f64>| {
                found.push(elements.iter().position(|e| e == r).unwrap());
                ControlFlow::Continue(())
            },
        );
        found.sort_unstable();
        found
    }

    #[test]
    fn test_straddling_element_stays_at_root() {
        let region = Rectangle::new(0.0, 0.0, 8.0, 8.0);
        let mut trees = AxisTrees::default();
        let rect = Rectangle::new(0.5, 0.0, 1.0, 1.0);

        let root = trees.insert(None, region, &rect, 0, Axis::X, 10);
        assert_eq!(trees.len(), 1);
        assert_eq!(trees.nodes()[root].bucket(), &[0]);
    }

    #[test]
    fn test_element_descends_until_it_straddles() {
        let region = Rectangle::new(0.0, 0.0, 8.0, 8.0);
        let mut trees = AxisTrees::default();
        // x in [3.5, 4.5]: right of 0, straddles 4 (center of the right half)
        let rect = Rectangle::new(4.0, 0.0, 0.5, 0.5);

        let root = trees.insert(None, region, &rect, 0, Axis::X, 10);
        assert_eq!(trees.len(), 2);
        assert!(trees.nodes()[root].bucket().is_empty());
        assert_eq!(trees.nodes()[1].bucket(), &[0]);
    }

    #[test]
    fn test_depth_bound_stops_descent() {
        let region = Rectangle::new(0.0, 0.0, 8.0, 8.0);
        let mut trees = AxisTrees::default();
        let rect = Rectangle::new(7.9, 0.0, 0.01, 0.01);

        let root = trees.insert(None, region, &rect, 0, Axis::X, 2);
        assert_eq!(trees.len(), 3);
        assert!(trees.nodes()[root].bucket().is_empty());
        assert_eq!(trees.nodes()[2].bucket(), &[0]);

        let mut zero_depth = AxisTrees::default();
        let root = zero_depth.insert(None, region, &rect, 0, Axis::X, 0);
        assert_eq!(zero_depth.len(), 1);
        assert_eq!(zero_depth.nodes()[root].bucket(), &[0]);
    }

    #[test]
    fn test_visit_prunes_by_side_and_filters_exactly() {
        let region = Rectangle::new(0.0, 0.0, 8.0, 8.0);
        let elements = vec![
            Rectangle::new(-4.0, 0.0, 0.5, 0.5),
            Rectangle::new(4.0, 0.0, 0.5, 0.5),
            Rectangle::new(0.0, 6.0, 1.0, 1.0),
            Rectangle::new(0.0, -6.0, 1.0, 1.0),
        ];

        let mut trees = AxisTrees::default();
        let mut root = None;
        for (id, rect) in elements.iter().enumerate() {
            root = Some(trees.insert(root, region, rect, id, Axis::X, 10));
        }
        let root = root.unwrap();

        let left = Rectangle::new(-4.0, 0.0, 1.0, 1.0);
        assert_eq!(collect(&trees, root, region, &left, Axis::X, &elements), vec![0]);

        let spanning = Rectangle::new(0.0, 0.0, 5.0, 7.0);
        assert_eq!(
            collect(&trees, root, region, &spanning, Axis::X, &elements),
            vec![0, 1, 2, 3]
        );

        // Root bucket holds both straddlers; only one actually overlaps
        let top = Rectangle::new(0.0, 6.0, 0.5, 0.5);
        assert_eq!(collect(&trees, root, region, &top, Axis::X, &elements), vec![2]);
    }

    #[test]
    fn test_visit_stops_early() {
        let region = Rectangle::new(0.0, 0.0, 8.0, 8.0);
        let elements = vec![Rectangle::new(0.0, 1.0, 1.0, 1.0); 5];

        let mut trees = AxisTrees::default();
        let mut root = None;
        for (id, rect) in elements.iter().enumerate() {
            root = Some(trees.insert(root, region, rect, id, Axis::Y, 10));
        }

        let mut seen = 0;
        let mut stats = QueryStats::default();
        let flow = trees.visit(
            root,
            region,
            &region,
            Axis::Y,
            &elements,
            &mut stats,
            &mut |_: &Rectangle<f64>| {
                seen += 1;
                if seen == 2 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        );

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, 2);
    }
}
