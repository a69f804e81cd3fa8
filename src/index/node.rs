//! Quadrant nodes and quadrant geometry.

use super::axis::{Axis, AxisPosition};
use super::{AxisId, QuadId};
use geo::CoordNum;
use quadaxis_types::rect::{Rectangle, Rectangular};

/// One of the four equal sub-regions produced by splitting a region at its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }

    /// Quadrant of `region` that holds the center of `rect`.
    ///
    /// Only meaningful once `rect` is known not to straddle either split line,
    /// in which case the quadrant contains `rect` entirely.
    pub fn containing<N, R>(region: &Rectangle<N>, rect: &R) -> Self
    where
        N: CoordNum,
        R: Rectangular<Num = N> + ?Sized,
    {
        if rect.center_x() < region.center_x() {
            if rect.center_y() < region.center_y() {
                Quadrant::SouthWest
            } else {
                Quadrant::NorthWest
            }
        } else if rect.center_y() < region.center_y() {
            Quadrant::SouthEast
        } else {
            Quadrant::NorthEast
        }
    }

    /// Whether a window classified as `x` / `y` against the parent's split
    /// lines can overlap anything stored in this quadrant.
    ///
    /// Elements below a quadrant lie strictly on its side of both lines, so a
    /// window strictly on the other side of either line cannot reach them.
    pub(crate) fn reachable(self, x: AxisPosition, y: AxisPosition) -> bool {
        let east = matches!(self, Quadrant::NorthEast | Quadrant::SouthEast);
        let north = matches!(self, Quadrant::NorthEast | Quadrant::NorthWest);

        let on_side = |position: AxisPosition, high: bool| match position {
            AxisPosition::Center => true,
            AxisPosition::Right => high,
            AxisPosition::Left => !high,
        };
        on_side(x, east) && on_side(y, north)
    }

    /// Region covered by this quadrant of `region`: half the extents, with the
    /// center moved a quarter of the full size toward the quadrant.
    pub fn child_region<N: CoordNum>(self, region: &Rectangle<N>) -> Rectangle<N> {
        let two = N::one() + N::one();
        let half_width = region.half_width() / two;
        let half_height = region.half_height() / two;

        let center_x = match self {
            Quadrant::NorthEast | Quadrant::SouthEast => region.center_x() + half_width,
            Quadrant::NorthWest | Quadrant::SouthWest => region.center_x() - half_width,
        };
        let center_y = match self {
            Quadrant::NorthEast | Quadrant::NorthWest => region.center_y() + half_height,
            Quadrant::SouthWest | Quadrant::SouthEast => region.center_y() - half_height,
        };

        Rectangle::new(center_x, center_y, half_width, half_height)
    }
}

/// A quadtree node: four lazily created children plus one axis tree per axis
/// for elements that stop at this level.
///
/// The node's region is not stored; it is derived from the root region and
/// the path taken to reach the node.
#[derive(Debug, Clone, Default)]
pub(crate) struct QuadNode {
    children: [Option<QuadId>; 4],
    x_axis: Option<AxisId>,
    y_axis: Option<AxisId>,
}

impl QuadNode {
    #[inline]
    pub(crate) fn child(&self, quadrant: Quadrant) -> Option<QuadId> {
        self.children[quadrant.slot()]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, quadrant: Quadrant, id: QuadId) {
        self.children[quadrant.slot()] = Some(id);
    }

    #[inline]
    pub(crate) fn axis_root(&self, axis: Axis) -> Option<AxisId> {
        match axis {
            Axis::X => self.x_axis,
            Axis::Y => self.y_axis,
        }
    }

    #[inline]
    pub(crate) fn set_axis_root(&mut self, axis: Axis, id: AxisId) {
        match axis {
            Axis::X => self.x_axis = Some(id),
            Axis::Y => self.y_axis = Some(id),
        }
    }
}
