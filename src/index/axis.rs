//! Classification of a box against the split lines of a region.
//!
//! The same test drives both insertion (where does an element go?) and query
//! pruning (which sides can a window reach?), so it is written against the
//! [`Rectangular`] capability rather than a concrete type.

use geo::CoordNum;
use quadaxis_types::rect::{Rectangle, Rectangular};

/// One of the two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Center coordinate of `rect` along this axis.
    #[inline]
    pub fn center_of<R: Rectangular + ?Sized>(self, rect: &R) -> R::Num {
        match self {
            Axis::X => rect.center_x(),
            Axis::Y => rect.center_y(),
        }
    }

    /// Half of the size of `rect` along this axis.
    #[inline]
    pub fn half_extent_of<R: Rectangular + ?Sized>(self, rect: &R) -> R::Num {
        match self {
            Axis::X => rect.half_width(),
            Axis::Y => rect.half_height(),
        }
    }
}

/// Where a box lies relative to a region's center line on one axis.
///
/// `Left` and `Right` mean lower and higher coordinates, so on the Y axis
/// `Left` is below the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisPosition {
    Left,
    Right,
    /// The box spans the center line. Touching it counts.
    Center,
}

/// Classify `rect` against the center line of `region` along `axis`.
///
/// # Examples
///
/// ```
/// use quadaxis::{Axis, AxisPosition, Rectangle, classify};
///
/// let region = Rectangle::new(50.0, 50.0, 50.0, 50.0);
///
/// let west = Rectangle::new(20.0, 80.0, 5.0, 5.0);
/// assert_eq!(classify(&region, &west, Axis::X), AxisPosition::Left);
/// assert_eq!(classify(&region, &west, Axis::Y), AxisPosition::Right);
///
/// // An edge exactly on the split line straddles it
/// let touching = Rectangle::new(45.0, 20.0, 5.0, 5.0);
/// assert_eq!(classify(&region, &touching, Axis::X), AxisPosition::Center);
/// ```
pub fn classify<N, R>(region: &Rectangle<N>, rect: &R, axis: Axis) -> AxisPosition
where
    N: CoordNum,
    R: Rectangular<Num = N> + ?Sized,
{
    let line = axis.center_of(region);
    let center = axis.center_of(rect);
    let half = axis.half_extent_of(rect);

    if center - half <= line && line <= center + half {
        AxisPosition::Center
    } else if line < center {
        AxisPosition::Right
    } else {
        AxisPosition::Left
    }
}

/// Halve `region` along `axis`, keeping the half on `side`.
///
/// `side` must be `Left` or `Right`; the other axis is left untouched.
pub(crate) fn split<N: CoordNum>(region: &Rectangle<N>, axis: Axis, side: AxisPosition) -> Rectangle<N> {
    debug_assert_ne!(side, AxisPosition::Center, "cannot split toward the center");

    let two = N::one() + N::one();
    let shift = |center: N, half: N| match side {
        AxisPosition::Left => center - half,
        _ => center + half,
    };

    match axis {
        Axis::X => {
            let half_width = region.half_width() / two;
            Rectangle::new(
                shift(region.center_x(), half_width),
                region.center_y(),
                half_width,
                region.half_height(),
            )
        }
        Axis::Y => {
            let half_height = region.half_height() / two;
            Rectangle::new(
                region.center_x(),
                shift(region.center_y(), half_height),
                region.half_width(),
                half_height,
            )
        }
    }
}
