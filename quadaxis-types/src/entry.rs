use crate::rect::{Rectangle, Rectangular};
use geo::CoordNum;
use serde::{Deserialize, Serialize};

/// A bounding box tagged with an opaque payload.
///
/// This is the usual element type for an index sitting behind a feature store:
/// the geometry drives placement and queries, the payload (an object id, a
/// kind tag, ...) is carried along untouched.
///
/// # Examples
///
/// ```
/// use quadaxis_types::entry::Entry;
/// use quadaxis_types::rect::{Rectangle, Rectangular};
///
/// let road = Entry::new(Rectangle::of(0.0, 10.0, 4.0, 2.0), 42_usize);
/// assert_eq!(*road.payload(), 42);
/// assert_eq!(road.center_x(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<P, N> {
    bounds: Rectangle<N>,
    payload: P,
}

impl<P, N: CoordNum> Entry<P, N> {
    pub fn new(bounds: Rectangle<N>, payload: P) -> Self {
        Self { bounds, payload }
    }

    /// Tag any geometry with a payload, copying its bounds.
    pub fn from_geometry<G>(geometry: &G, payload: P) -> Self
    where
        G: Rectangular<Num = N> + ?Sized,
    {
        Self::new(geometry.bounds(), payload)
    }

    pub fn rect(&self) -> &Rectangle<N> {
        &self.bounds
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Split into geometry and payload.
    pub fn into_parts(self) -> (Rectangle<N>, P) {
        (self.bounds, self.payload)
    }
}

impl<P, N: CoordNum> Rectangular for Entry<P, N> {
    type Num = N;

    fn center_x(&self) -> N {
        self.bounds.center_x()
    }

    fn center_y(&self) -> N {
        self.bounds.center_y()
    }

    fn half_width(&self) -> N {
        self.bounds.half_width()
    }

    fn half_height(&self) -> N {
        self.bounds.half_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    #[test]
    fn test_entry_delegates_geometry() {
        let entry = Entry::new(Rectangle::new(1.0, 2.0, 3.0, 4.0), "node");
        assert_eq!(entry.min_x(), -2.0);
        assert_eq!(entry.max_y(), 6.0);
        assert_eq!(entry.bounds(), *entry.rect());
        assert_eq!(entry.into_payload(), "node");
    }

    #[test]
    fn test_entry_from_point() {
        let entry = Entry::from_geometry(&Point::new(5.0, 6.0), 7_u64);
        let (rect, id) = entry.into_parts();
        assert_eq!(rect, Rectangle::new(5.0, 6.0, 0.0, 0.0));
        assert_eq!(id, 7);
    }
}
