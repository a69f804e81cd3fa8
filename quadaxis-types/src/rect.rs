use geo::{CoordNum, Point, Rect};
use serde::{Deserialize, Serialize};

#[inline]
fn two<N: CoordNum>() -> N {
    N::one() + N::one()
}

/// Anything that exposes an axis-aligned box as a center and half extents.
///
/// This is the capability the spatial index requires from stored elements and
/// from query windows. Only the four accessors are required; extents and the
/// intersection test are derived from them.
///
/// # Examples
///
/// ```
/// use quadaxis_types::rect::{Rectangle, Rectangular};
///
/// struct Tile {
///     col: i32,
///     row: i32,
/// }
///
/// impl Rectangular for Tile {
///     type Num = i32;
///
///     fn center_x(&self) -> i32 {
///         self.col * 2 + 1
///     }
///
///     fn center_y(&self) -> i32 {
///         self.row * 2 + 1
///     }
///
///     fn half_width(&self) -> i32 {
///         1
///     }
///
///     fn half_height(&self) -> i32 {
///         1
///     }
/// }
///
/// let tile = Tile { col: 0, row: 0 };
/// assert!(tile.intersects(&Rectangle::new(2, 2, 0, 0)));
/// assert_eq!(tile.bounds(), Rectangle::new(1, 1, 1, 1));
/// ```
pub trait Rectangular {
    /// Coordinate type of the box.
    type Num: CoordNum;

    /// X coordinate of the center.
    fn center_x(&self) -> Self::Num;

    /// Y coordinate of the center.
    fn center_y(&self) -> Self::Num;

    /// Half of the horizontal size.
    fn half_width(&self) -> Self::Num;

    /// Half of the vertical size.
    fn half_height(&self) -> Self::Num;

    /// Left edge.
    fn min_x(&self) -> Self::Num {
        self.center_x() - self.half_width()
    }

    /// Right edge.
    fn max_x(&self) -> Self::Num {
        self.center_x() + self.half_width()
    }

    /// Bottom edge.
    fn min_y(&self) -> Self::Num {
        self.center_y() - self.half_height()
    }

    /// Top edge.
    fn max_y(&self) -> Self::Num {
        self.center_y() + self.half_height()
    }

    /// Inclusive overlap test, see [`intersects`].
    fn intersects<O>(&self, other: &O) -> bool
    where
        O: Rectangular<Num = Self::Num> + ?Sized,
    {
        intersects(self, other)
    }

    /// Copy of the geometry as a plain [`Rectangle`].
    fn bounds(&self) -> Rectangle<Self::Num> {
        Rectangle::new(
            self.center_x(),
            self.center_y(),
            self.half_width(),
            self.half_height(),
        )
    }
}

/// Check whether two boxes overlap.
///
/// Bounds are inclusive: boxes that only share an edge or a corner intersect.
///
/// # Examples
///
/// ```
/// use quadaxis_types::rect::{Rectangle, intersects};
///
/// let a = Rectangle::new(15.0, 15.0, 5.0, 5.0); // [10,20] x [10,20]
/// let b = Rectangle::new(25.0, 25.0, 5.0, 5.0); // [20,30] x [20,30]
/// let c = Rectangle::new(25.1, 15.0, 5.0, 5.0);
///
/// assert!(intersects(&a, &b));
/// assert!(!intersects(&a, &c));
/// ```
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Rectangular + ?Sized,
    B: Rectangular<Num = A::Num> + ?Sized,
{
    a.min_y() <= b.max_y()
        && a.max_y() >= b.min_y()
        && a.min_x() <= b.max_x()
        && a.max_x() >= b.min_x()
}

/// An immutable axis-aligned rectangle stored as center and half extents.
///
/// The y axis points up: the "top-left" corner used by [`Rectangle::of`] is the
/// corner with the smallest x and the largest y.
///
/// # Examples
///
/// ```
/// use quadaxis_types::rect::Rectangle;
///
/// let r = Rectangle::of(-10.0, 10.0, 20.0, 20.0);
/// assert_eq!(r.center_x(), 0.0);
/// assert_eq!(r.center_y(), 0.0);
/// assert_eq!(r.half_width(), 10.0);
/// assert_eq!(r.area(), 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle<N> {
    center_x: N,
    center_y: N,
    half_width: N,
    half_height: N,
}

impl<N: CoordNum> Rectangle<N> {
    /// Create a rectangle from its center and half extents.
    ///
    /// Half extents must be non-negative; this is not checked here (see
    /// `quadaxis::validation::validate_rect`).
    pub const fn new(center_x: N, center_y: N, half_width: N, half_height: N) -> Self {
        Self {
            center_x,
            center_y,
            half_width,
            half_height,
        }
    }

    /// Create a rectangle from its top-left corner, width and height.
    ///
    /// # Arguments
    ///
    /// * `top_left_x` - Smallest x coordinate
    /// * `top_left_y` - Largest y coordinate
    /// * `width` - Horizontal size
    /// * `height` - Vertical size
    ///
    /// # Examples
    ///
    /// ```
    /// use quadaxis_types::rect::Rectangle;
    ///
    /// let r = Rectangle::of(10.0, 10.0, 1.0, 1.0);
    /// assert_eq!(r.center_x(), 10.5);
    /// assert_eq!(r.center_y(), 9.5);
    /// assert_eq!(r.half_width(), 0.5);
    /// assert_eq!(r.half_height(), 0.5);
    /// ```
    pub fn of(top_left_x: N, top_left_y: N, width: N, height: N) -> Self {
        let half_width = width / two();
        let half_height = height / two();
        Self::new(
            top_left_x + half_width,
            top_left_y - half_height,
            half_width,
            half_height,
        )
    }

    /// Create the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: (N, N), b: (N, N)) -> Self {
        let (min_x, max_x) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (min_y, max_y) = if a.1 <= b.1 { (a.1, b.1) } else { (b.1, a.1) };
        let half_width = (max_x - min_x) / two();
        let half_height = (max_y - min_y) / two();
        Self::new(min_x + half_width, min_y + half_height, half_width, half_height)
    }

    pub const fn center_x(&self) -> N {
        self.center_x
    }

    pub const fn center_y(&self) -> N {
        self.center_y
    }

    pub const fn half_width(&self) -> N {
        self.half_width
    }

    pub const fn half_height(&self) -> N {
        self.half_height
    }

    /// Full horizontal size.
    pub fn width(&self) -> N {
        self.half_width * two()
    }

    /// Full vertical size.
    pub fn height(&self) -> N {
        self.half_height * two()
    }

    /// Area of the rectangle, `4 * half_width * half_height`.
    pub fn area(&self) -> N {
        two::<N>() * two::<N>() * self.half_width * self.half_height
    }

    /// Center as a `geo::Point`.
    pub fn center(&self) -> Point<N> {
        Point::new(self.center_x, self.center_y)
    }

    /// Inclusive overlap test against any other box with the same coordinate type.
    pub fn intersects<O>(&self, other: &O) -> bool
    where
        O: Rectangular<Num = N> + ?Sized,
    {
        intersects(self, other)
    }

    /// Check whether `other` lies completely inside this rectangle (edges included).
    pub fn contains<O>(&self, other: &O) -> bool
    where
        O: Rectangular<Num = N> + ?Sized,
    {
        Rectangular::min_x(self) <= other.min_x()
            && Rectangular::max_x(self) >= other.max_x()
            && Rectangular::min_y(self) <= other.min_y()
            && Rectangular::max_y(self) >= other.max_y()
    }

    /// Check whether a point lies inside this rectangle (edges included).
    pub fn contains_point(&self, point: &Point<N>) -> bool {
        point.x() >= Rectangular::min_x(self)
            && point.x() <= Rectangular::max_x(self)
            && point.y() >= Rectangular::min_y(self)
            && point.y() <= Rectangular::max_y(self)
    }

    /// Convert into a `geo::Rect`.
    pub fn to_rect(&self) -> Rect<N> {
        Rect::new(
            geo::coord! { x: Rectangular::min_x(self), y: Rectangular::min_y(self) },
            geo::coord! { x: Rectangular::max_x(self), y: Rectangular::max_y(self) },
        )
    }
}

impl<N: CoordNum> Rectangular for Rectangle<N> {
    type Num = N;

    fn center_x(&self) -> N {
        self.center_x
    }

    fn center_y(&self) -> N {
        self.center_y
    }

    fn half_width(&self) -> N {
        self.half_width
    }

    fn half_height(&self) -> N {
        self.half_height
    }

    fn bounds(&self) -> Self {
        *self
    }
}

impl<N: CoordNum> From<Rect<N>> for Rectangle<N> {
    fn from(rect: Rect<N>) -> Self {
        Self::from_corners((rect.min().x, rect.min().y), (rect.max().x, rect.max().y))
    }
}

impl<N: CoordNum> From<Rectangle<N>> for Rect<N> {
    fn from(rect: Rectangle<N>) -> Self {
        rect.to_rect()
    }
}

impl<N: CoordNum> Rectangular for Rect<N> {
    type Num = N;

    fn center_x(&self) -> N {
        (self.min().x + self.max().x) / two()
    }

    fn center_y(&self) -> N {
        (self.min().y + self.max().y) / two()
    }

    fn half_width(&self) -> N {
        (self.max().x - self.min().x) / two()
    }

    fn half_height(&self) -> N {
        (self.max().y - self.min().y) / two()
    }

    fn min_x(&self) -> N {
        self.min().x
    }

    fn max_x(&self) -> N {
        self.max().x
    }

    fn min_y(&self) -> N {
        self.min().y
    }

    fn max_y(&self) -> N {
        self.max().y
    }
}

/// A point is a box with zero extents.
impl<N: CoordNum> Rectangular for Point<N> {
    type Num = N;

    fn center_x(&self) -> N {
        self.x()
    }

    fn center_y(&self) -> N {
        self.y()
    }

    fn half_width(&self) -> N {
        N::zero()
    }

    fn half_height(&self) -> N {
        N::zero()
    }
}

impl<T: Rectangular + ?Sized> Rectangular for &T {
    type Num = T::Num;

    fn center_x(&self) -> Self::Num {
        (**self).center_x()
    }

    fn center_y(&self) -> Self::Num {
        (**self).center_y()
    }

    fn half_width(&self) -> Self::Num {
        (**self).half_width()
    }

    fn half_height(&self) -> Self::Num {
        (**self).half_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_matches_center_constructor() {
        let r = Rectangle::of(4.0_f64, 8.0, 6.0, 2.0);
        assert_eq!(r, Rectangle::new(7.0, 7.0, 3.0, 1.0));
        assert_eq!(r.width(), 6.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_of_with_integers() {
        let r = Rectangle::of(0_i32, 100, 100, 100);
        assert_eq!(r, Rectangle::new(50, 50, 50, 50));
    }

    #[test]
    fn test_extents() {
        let r = Rectangle::new(0.0_f32, 16.0, 8.0, 8.0);
        assert_eq!(r.min_x(), -8.0);
        assert_eq!(r.max_x(), 8.0);
        assert_eq!(r.min_y(), 8.0);
        assert_eq!(r.max_y(), 24.0);
    }

    #[test]
    fn test_intersects_is_inclusive() {
        let a = Rectangle::new(15.0, 15.0, 5.0, 5.0);
        let corner = Rectangle::new(25.0, 25.0, 5.0, 5.0);
        let edge = Rectangle::new(25.0, 15.0, 5.0, 5.0);
        let apart = Rectangle::new(25.0, 15.0, 4.9, 5.0);

        assert!(a.intersects(&corner));
        assert!(corner.intersects(&a));
        assert!(a.intersects(&edge));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_intersects_needs_both_axes() {
        let a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
        let same_column = Rectangle::new(0.0, 5.0, 1.0, 1.0);
        let same_row = Rectangle::new(5.0, 0.0, 1.0, 1.0);
        assert!(!a.intersects(&same_column));
        assert!(!a.intersects(&same_row));
    }

    #[test]
    fn test_contains() {
        let outer = Rectangle::of(0.0, 100.0, 100.0, 100.0);
        assert!(outer.contains(&Rectangle::new(50.0, 50.0, 50.0, 50.0)));
        assert!(outer.contains(&Rectangle::new(10.0, 10.0, 5.0, 5.0)));
        assert!(!outer.contains(&Rectangle::new(99.0, 50.0, 5.0, 5.0)));
        assert!(outer.contains_point(&Point::new(100.0, 0.0)));
        assert!(!outer.contains_point(&Point::new(100.1, 0.0)));
    }

    #[test]
    fn test_geo_rect_round_trip() {
        let rect = Rect::new(
            geo::coord! { x: 2.0, y: 1.0 },
            geo::coord! { x: -2.0, y: 5.0 },
        );
        let r = Rectangle::from(rect);
        assert_eq!(r, Rectangle::new(0.0, 3.0, 2.0, 2.0));
        assert_eq!(Rect::from(r), rect);
        assert_eq!(rect.bounds(), r);
    }

    #[test]
    fn test_point_is_degenerate_box() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.bounds(), Rectangle::new(3.0, 4.0, 0.0, 0.0));
        assert!(p.intersects(&Rectangle::new(2.0, 4.0, 1.0, 0.0)));
    }

    #[test]
    fn test_from_corners_any_order() {
        let a = Rectangle::from_corners((10.0, 0.0), (0.0, 10.0));
        let b = Rectangle::from_corners((0.0, 0.0), (10.0, 10.0));
        assert_eq!(a, b);
        assert_eq!(a.center(), Point::new(5.0, 5.0));
    }
}
