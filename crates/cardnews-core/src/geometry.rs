//! Viewport scaling and screen-to-canvas transforms.
//!
//! All element positions and sizes live in a fixed logical canvas of
//! [`CANVAS_WIDTH`] × [`CANVAS_HEIGHT`] units. The editor shows that canvas
//! uniformly scaled down to fit the viewport, so pointer offsets measured in
//! screen pixels must be divided by the scale before they touch an element.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Width of the logical canvas.
pub const CANVAS_WIDTH: f64 = 1080.0;
/// Height of the logical canvas (16:9 frame of [`CANVAS_WIDTH`]).
pub const CANVAS_HEIGHT: f64 = CANVAS_WIDTH / 16.0 * 9.0;
/// Logical canvas size.
pub const CANVAS_SIZE: Size = Size::new(CANVAS_WIDTH, CANVAS_HEIGHT);

/// Smallest width or height a resize gesture may produce.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Quiet period after the last viewport resize before the scale is recomputed.
pub const SCALE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Compute the fit scale for the default logical canvas.
pub fn compute_scale(viewport: Size) -> f64 {
    compute_scale_for(viewport, CANVAS_SIZE)
}

/// Compute the uniform scale that fits `logical` inside `viewport`.
///
/// The canvas is only ever shrunk to fit, never magnified past 1:1.
pub fn compute_scale_for(viewport: Size, logical: Size) -> f64 {
    let scale_x = viewport.width.max(0.0) / logical.width;
    let scale_y = viewport.height.max(0.0) / logical.height;
    scale_x.min(scale_y).min(1.0)
}

/// Convert a screen-space pointer offset into logical canvas units.
///
/// A collapsed viewport (scale of zero or less) yields no movement.
pub fn to_logical_delta(screen_delta: Vec2, scale: f64) -> Vec2 {
    if scale <= 0.0 || !scale.is_finite() {
        return Vec2::ZERO;
    }
    screen_delta / scale
}

/// Resize handle corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All four corners, clockwise from the top left.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Position of this corner on the rectangle at `position` with `size`.
    pub fn point_on(self, position: Point, size: Size) -> Point {
        let x = if self.is_left() { position.x } else { position.x + size.width };
        let y = if self.is_top() { position.y } else { position.y + size.height };
        Point::new(x, y)
    }
}

/// Apply a corner resize to a rectangle captured at gesture start.
///
/// `delta` is the logical offset from the gesture's starting pointer
/// position. Left and top edges move the origin by the full delta; the
/// resulting width and height never drop below [`MIN_ELEMENT_SIZE`].
pub fn resize_from_corner(position: Point, size: Size, corner: Corner, delta: Vec2) -> (Point, Size) {
    let mut new_position = position;
    let mut new_size = size;

    if corner.is_left() {
        new_size.width = (size.width - delta.x).max(MIN_ELEMENT_SIZE);
        new_position.x = position.x + delta.x;
    } else {
        new_size.width = (size.width + delta.x).max(MIN_ELEMENT_SIZE);
    }

    if corner.is_top() {
        new_size.height = (size.height - delta.y).max(MIN_ELEMENT_SIZE);
        new_position.y = position.y + delta.y;
    } else {
        new_size.height = (size.height + delta.y).max(MIN_ELEMENT_SIZE);
    }

    (new_position, new_size)
}

/// Tracks the viewport and the scale at which the canvas is displayed.
///
/// Resize notifications are coalesced: the scale is only recomputed once no
/// further resize has arrived for [`SCALE_DEBOUNCE`].
#[derive(Debug, Clone)]
pub struct ViewportFit {
    viewport: Size,
    scale: f64,
    pending: Option<(Size, Instant)>,
    debounce: Duration,
}

impl ViewportFit {
    /// Create a tracker for the given initial viewport. The first scale is
    /// computed immediately.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scale: compute_scale(viewport),
            pending: None,
            debounce: SCALE_DEBOUNCE,
        }
    }

    /// Override the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Current scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Viewport size the current scale was computed for.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Whether a resize is waiting for the debounce window to elapse.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a viewport resize observed at `now`.
    pub fn on_resize(&mut self, viewport: Size, now: Instant) {
        self.pending = Some((viewport, now));
    }

    /// Apply the pending resize if the debounce window has elapsed.
    /// Returns the new scale when one was applied.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let (viewport, at) = self.pending?;
        if now.saturating_duration_since(at) < self.debounce {
            return None;
        }
        self.pending = None;
        Some(self.apply(viewport))
    }

    /// Apply any pending resize immediately.
    pub fn flush(&mut self) -> f64 {
        if let Some((viewport, _)) = self.pending.take() {
            self.apply(viewport);
        }
        self.scale
    }

    fn apply(&mut self, viewport: Size) -> f64 {
        self.viewport = viewport;
        self.scale = compute_scale(viewport);
        log::debug!(
            "Viewport {}x{} -> canvas scale {:.4}",
            viewport.width,
            viewport.height,
            self.scale
        );
        self.scale
    }

    /// Screen position of the canvas origin; the scaled canvas is centred
    /// in the viewport.
    pub fn canvas_origin(&self) -> Point {
        Point::new(
            (self.viewport.width - CANVAS_WIDTH * self.scale) / 2.0,
            (self.viewport.height - CANVAS_HEIGHT * self.scale) / 2.0,
        )
    }

    /// Transform from logical canvas coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.canvas_origin().to_vec2()) * Affine::scale(self.scale)
    }

    /// Convert a screen point to logical canvas coordinates.
    pub fn screen_to_logical(&self, screen_point: Point) -> Point {
        to_logical_delta(screen_point - self.canvas_origin(), self.scale).to_point()
    }

    /// Convert a logical canvas point to screen coordinates.
    pub fn logical_to_screen(&self, logical_point: Point) -> Point {
        self.transform() * logical_point
    }
}
