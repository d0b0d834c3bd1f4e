//! Drag and resize gestures.
//!
//! A [`Gesture`] owns a copy of the element as it was when the pointer went
//! down. Every preview and the final commit are computed from that copy and
//! the total pointer offset, never from the previous preview, so deltas do
//! not compound.

use crate::element::{Element, ElementId};
use crate::geometry::{Corner, resize_from_corner, to_logical_delta};
use kurbo::Vec2;

/// What a gesture does to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Move the whole element.
    Drag,
    /// Resize from a corner handle.
    Resize(Corner),
}

/// An in-flight manipulation of one element.
#[derive(Debug, Clone)]
pub struct Gesture {
    kind: GestureKind,
    origin: Element,
}

impl Gesture {
    /// Start dragging `origin`.
    pub fn drag(origin: Element) -> Self {
        Self {
            kind: GestureKind::Drag,
            origin,
        }
    }

    /// Start resizing `origin` from `corner`.
    pub fn resize(origin: Element, corner: Corner) -> Self {
        Self {
            kind: GestureKind::Resize(corner),
            origin,
        }
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn element_id(&self) -> &ElementId {
        self.origin.id()
    }

    /// The element as captured at gesture start.
    pub fn origin(&self) -> &Element {
        &self.origin
    }

    /// The element after applying a logical offset to the captured state.
    pub fn apply(&self, delta: Vec2) -> Element {
        let mut element = self.origin.clone();
        match self.kind {
            GestureKind::Drag => {
                element.position += delta;
            }
            GestureKind::Resize(corner) => {
                let (position, size) = resize_from_corner(element.position, element.size, corner, delta);
                element.position = position;
                element.size = size;
            }
        }
        element
    }

    /// The element for a screen-space pointer offset at the given scale.
    pub fn preview(&self, screen_offset: Vec2, scale: f64) -> Element {
        self.apply(to_logical_delta(screen_offset, scale))
    }

    /// End the gesture, producing the element to commit.
    pub fn finish(self, screen_offset: Vec2, scale: f64) -> Element {
        self.preview(screen_offset, scale)
    }
}
