//! Thread-safe wrapper for shared index access.
//!
//! This module provides `SyncQuadtree`, a wrapper around [`Quadtree`] that uses
//! `Arc<RwLock<Quadtree>>` internally. The whole tree sits behind one lock:
//! inserts take it exclusively, queries share it.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! quadaxis = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use quadaxis::{Rectangle, SyncQuadtree};
//! use std::thread;
//!
//! let index = SyncQuadtree::new(Rectangle::of(0.0, 100.0, 100.0, 100.0), 6);
//!
//! let writer = index.clone();
//! let handle = thread::spawn(move || {
//!     writer.insert(Rectangle::new(10.0, 10.0, 1.0, 1.0));
//! });
//! handle.join().unwrap();
//!
//! let hits = index.query(&Rectangle::new(10.0, 10.0, 2.0, 2.0));
//! assert_eq!(hits, vec![Rectangle::new(10.0, 10.0, 1.0, 1.0)]);
//! ```

use crate::error::Result;
use crate::index::{IndexStats, Quadtree};
use parking_lot::RwLock;
use quadaxis_types::rect::{Rectangle, Rectangular};
use std::sync::Arc;

/// Thread-safe handle to a [`Quadtree`].
///
/// Cloning the handle shares the same index.
///
/// # Thread Safety
///
/// - `insert` / `try_insert` / `extend` take the write lock
/// - queries take the read lock and may run concurrently
/// - results are returned as clones because references cannot outlive the
///   lock guard; use [`read`](Self::read) to work with borrowed results
pub struct SyncQuadtree<R: Rectangular> {
    inner: Arc<RwLock<Quadtree<R>>>,
}

impl<R: Rectangular> Clone for SyncQuadtree<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rectangular> SyncQuadtree<R> {
    /// Creates an empty shared index. See [`Quadtree::new`].
    ///
    /// # Panics
    ///
    /// Panics if `max_depth` is zero.
    pub fn new(area: Rectangle<R::Num>, max_depth: u32) -> Self {
        Self::from_tree(Quadtree::new(area, max_depth))
    }

    /// Wraps an existing index, for example one bulk-loaded on a single thread.
    pub fn from_tree(tree: Quadtree<R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    // ===== Writes =====

    pub fn insert(&self, element: R) {
        self.inner.write().insert(element);
    }

    pub fn try_insert(&self, element: R) -> Result<()> {
        self.inner.write().try_insert(element)
    }

    /// Inserts all elements under a single lock acquisition.
    pub fn extend<I: IntoIterator<Item = R>>(&self, elements: I) {
        self.inner.write().extend(elements);
    }

    // ===== Reads =====

    /// Clones of every element intersecting `window`.
    pub fn query<W>(&self, window: &W) -> Vec<R>
    where
        R: Clone,
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        self.inner
            .read()
            .query(window)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Clones of at most `limit` elements intersecting `window`.
    pub fn query_with_limit<W>(&self, window: &W, limit: usize) -> Vec<R>
    where
        R: Clone,
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        self.inner
            .read()
            .query_with_limit(window, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn count<W>(&self, window: &W) -> usize
    where
        W: Rectangular<Num = R::Num> + ?Sized,
    {
        self.inner.read().count(window)
    }

    /// Runs `f` with shared access to the index.
    pub fn read<T>(&self, f: impl FnOnce(&Quadtree<R>) -> T) -> T {
        f(&self.inner.read())
    }

    pub fn indexed_area(&self) -> Rectangle<R::Num> {
        *self.inner.read().indexed_area()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    /// Returns the index if this is the last handle to it.
    pub fn into_inner(self) -> Option<Quadtree<R>> {
        Arc::try_unwrap(self.inner).ok().map(RwLock::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_inserts_then_query() {
        let index: SyncQuadtree<Rectangle<f64>> =
            SyncQuadtree::new(Rectangle::of(0.0, 100.0, 100.0, 100.0), 6);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let index = index.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let x = 2.0 + i as f64 * 3.8;
                        let y = 10.0 + t as f64 * 20.0;
                        index.insert(Rectangle::new(x, y, 0.5, 0.5));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(index.len(), 100);
        let area = index.indexed_area();
        assert_eq!(index.count(&area), 100);
        assert_eq!(index.query(&Rectangle::new(50.0, 10.0, 50.0, 1.0)).len(), 25);
        assert_eq!(index.query_with_limit(&area, 7).len(), 7);
    }

    #[test]
    fn test_read_borrows_results() {
        let index: SyncQuadtree<Rectangle<f64>> =
            SyncQuadtree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 4);
        index.extend([
            Rectangle::new(1.0, 1.0, 0.5, 0.5),
            Rectangle::new(-5.0, 5.0, 0.5, 0.5),
        ]);

        let max_x = index.read(|tree| {
            tree.query(tree.indexed_area())
                .iter()
                .map(|r| r.center_x())
                .fold(f64::MIN, f64::max)
        });
        assert_eq!(max_x, 1.0);
        assert_eq!(index.stats().element_count, 2);
    }

    #[test]
    fn test_into_inner() {
        let index: SyncQuadtree<Rectangle<f64>> =
            SyncQuadtree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 4);
        let other = index.clone();
        assert!(index.try_insert(Rectangle::new(0.0, 0.0, 20.0, 1.0)).is_err());

        drop(other);
        let tree = index.into_inner().unwrap();
        assert!(tree.is_empty());
    }
}
