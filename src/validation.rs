//! Validation for caller-supplied geometry and depth bounds.
//!
//! The index treats malformed geometry as a precondition violation and never
//! checks it on the hot path. These helpers are what the builder and
//! [`Quadtree::try_insert`](crate::Quadtree::try_insert) run first.

use crate::error::{QuadaxisError, Result};
use geo::CoordNum;
use quadaxis_types::rect::{Rectangle, Rectangular};

fn is_finite<N: CoordNum>(value: N) -> bool {
    value.to_f64().is_some_and(f64::is_finite)
}

/// Validates that a box has finite coordinates and non-negative half extents.
///
/// # Examples
///
/// ```
/// use quadaxis::validation::validate_rect;
/// use quadaxis::Rectangle;
///
/// assert!(validate_rect(&Rectangle::new(0.0, 0.0, 1.0, 1.0)).is_ok());
///
/// // Negative half width
/// assert!(validate_rect(&Rectangle::new(0.0, 0.0, -1.0, 1.0)).is_err());
///
/// // NaN center
/// assert!(validate_rect(&Rectangle::new(f64::NAN, 0.0, 1.0, 1.0)).is_err());
/// ```
pub fn validate_rect<N, R>(rect: &R) -> Result<()>
where
    N: CoordNum,
    R: Rectangular<Num = N> + ?Sized,
{
    let (x, y) = (rect.center_x(), rect.center_y());
    let (hw, hh) = (rect.half_width(), rect.half_height());

    if !is_finite(x) || !is_finite(y) {
        return Err(QuadaxisError::InvalidGeometry(format!(
            "Center must be finite, got: ({:?}, {:?})",
            x, y
        )));
    }

    if !is_finite(hw) || !is_finite(hh) {
        return Err(QuadaxisError::InvalidGeometry(format!(
            "Half extents must be finite, got: ({:?}, {:?})",
            hw, hh
        )));
    }

    if hw < N::zero() || hh < N::zero() {
        return Err(QuadaxisError::InvalidGeometry(format!(
            "Half extents must be non-negative, got: ({:?}, {:?})",
            hw, hh
        )));
    }

    Ok(())
}

/// Validates a subdivision depth bound.
pub fn validate_max_depth(max_depth: u32) -> Result<()> {
    if max_depth == 0 {
        return Err(QuadaxisError::InvalidDepth(max_depth));
    }
    Ok(())
}

/// Validates that `element` lies completely inside `area`, edges included.
///
/// Elements outside the indexed area are accepted by the unchecked insert but
/// may be missed by queries, because pruning assumes every stored element is
/// contained in the region of the node that holds it.
pub fn validate_within<N, R>(area: &Rectangle<N>, element: &R) -> Result<()>
where
    N: CoordNum,
    R: Rectangular<Num = N> + ?Sized,
{
    if !area.contains(element) {
        return Err(QuadaxisError::OutOfBounds(format!(
            "[{:?}, {:?}] x [{:?}, {:?}] is not inside [{:?}, {:?}] x [{:?}, {:?}]",
            element.min_x(),
            element.max_x(),
            element.min_y(),
            element.max_y(),
            area.min_x(),
            area.max_x(),
            area.min_y(),
            area.max_y(),
        )));
    }
    Ok(())
}
