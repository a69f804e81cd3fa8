//! # quadaxis-types
//!
//! Geometry value types for the quadaxis spatial index.
//!
//! - **Rectangle**: center + half-extent box with `geo` conversions
//! - **Rectangular**: the capability trait the index requires from elements and
//!   query windows, implemented for `Rectangle`, `geo::Rect` and `geo::Point`
//! - **Entry**: a rectangle tagged with an opaque payload
//!
//! All types are serializable with Serde and generic over `geo::CoordNum`.
//!
//! ## Examples
//!
//! ```rust
//! use quadaxis_types::rect::{Rectangle, Rectangular};
//! use geo::Point;
//!
//! let map_area = Rectangle::of(-10.0, 10.0, 20.0, 20.0);
//! let marker = Point::new(2.5, -3.0);
//! assert!(map_area.intersects(&marker));
//! assert!(map_area.contains(&marker));
//! ```

pub mod entry;
pub mod rect;

pub use entry::Entry;
pub use rect::{Rectangle, Rectangular, intersects};
