//! Single-element selection and resize handles.

use crate::element::{Element, ElementId};
use crate::geometry::Corner;
use kurbo::Point;

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 12.0;
/// Handle hit tolerance in screen pixels.
pub const HANDLE_HIT_TOLERANCE: f64 = 10.0;

/// Tracks which element, if any, is selected.
///
/// The id is not checked against any collection; selecting an id that does
/// not exist simply highlights nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}

/// A resize handle with its position in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Point,
    pub corner: Corner,
}

impl Handle {
    /// Check if a logical point hits this handle.
    /// `tolerance` is in logical units; divide screen tolerance by the scale.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy <= tolerance * tolerance
    }
}

/// The four corner handles of an element.
pub fn corner_handles(element: &Element) -> [Handle; 4] {
    Corner::ALL.map(|corner| Handle {
        position: corner.point_on(element.position, element.size),
        corner,
    })
}

/// Find which corner handle (if any) is hit at the given logical point.
pub fn hit_test_handles(element: &Element, point: Point, scale: f64) -> Option<Corner> {
    if scale <= 0.0 {
        return None;
    }
    let tolerance = HANDLE_HIT_TOLERANCE / scale;
    corner_handles(element)
        .into_iter()
        .find(|h| h.hit_test(point, tolerance))
        .map(|h| h.corner)
}
