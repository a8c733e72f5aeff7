//! Geometry for the full-size media viewer.
//!
//! The viewer shows one image centered in its container and lets the user
//! zoom, pan, and step through the rest of the gallery. [`MediaView`] holds
//! the transform (a uniform scale plus a translation from the centered
//! position); [`Gallery`] is the wrap-around cursor over the gallery items.

use crate::geometry::ContainerBox;

/// Fraction of the container a fitted image covers on its limiting axis.
pub const FIT_FRACTION: f64 = 0.9;
/// Smallest zoom the viewer allows.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest zoom the viewer allows.
pub const MAX_ZOOM: f64 = 3.0;
/// Zoom factor for one zoom-in step.
pub const ZOOM_IN_STEP: f64 = 1.2;
/// Zoom factor for one zoom-out step.
pub const ZOOM_OUT_STEP: f64 = 0.8;

const WHEEL_OUT: f64 = 0.9;
const WHEEL_IN: f64 = 1.1;

/// Zoom and pan state of the viewer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MediaView {
    /// Uniform scale applied to the image's natural size.
    pub scale: f64,
    /// Horizontal translation from the centered position, in pixels.
    pub offset_x: f64,
    /// Vertical translation from the centered position, in pixels.
    pub offset_y: f64,
    pan_anchor: Option<(f64, f64)>,
}

impl Default for MediaView {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaView {
    /// Natural size, centered.
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            pan_anchor: None,
        }
    }

    /// Scale the image so it covers [`FIT_FRACTION`] of the container on
    /// whichever axis limits it, and re-center.
    ///
    /// Unknown (zero) natural dimensions reset to natural size instead.
    /// The fitted scale may lie outside the zoom limits; those only bound
    /// interactive zooming.
    pub fn fit(&mut self, container: ContainerBox, natural_width: u32, natural_height: u32) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        if natural_width == 0 || natural_height == 0 {
            self.scale = 1.0;
            return;
        }
        let (w, h) = (natural_width as f64, natural_height as f64);
        self.scale = if w / h > container.aspect_ratio() {
            container.width * FIT_FRACTION / w
        } else {
            container.height * FIT_FRACTION / h
        };
    }

    /// Zoom by `factor`, keeping the point at the center of the container fixed.
    pub fn zoom(&mut self, factor: f64, container: ContainerBox) {
        let cx = container.width / 2.0;
        let cy = container.height / 2.0;
        let image_x = (cx - self.offset_x) / self.scale;
        let image_y = (cy - self.offset_y) / self.scale;
        let scale = clamp_zoom(self.scale * factor);
        self.offset_x = cx - image_x * scale;
        self.offset_y = cy - image_y * scale;
        self.scale = scale;
    }

    /// One zoom-in step around the container center.
    pub fn zoom_in(&mut self, container: ContainerBox) {
        self.zoom(ZOOM_IN_STEP, container);
    }

    /// One zoom-out step around the container center.
    pub fn zoom_out(&mut self, container: ContainerBox) {
        self.zoom(ZOOM_OUT_STEP, container);
    }

    /// Wheel zoom toward the cursor.
    ///
    /// `delta_y > 0` (scrolling down) zooms out. `cursor_dx`/`cursor_dy` are
    /// the cursor's offset from the image's current center.
    pub fn wheel(&mut self, delta_y: f64, cursor_dx: f64, cursor_dy: f64) {
        let factor = if delta_y > 0.0 { WHEEL_OUT } else { WHEEL_IN };
        self.offset_x += cursor_dx * (1.0 - factor);
        self.offset_y += cursor_dy * (1.0 - factor);
        self.scale = clamp_zoom(self.scale * factor);
    }

    /// Start dragging at pointer position `(x, y)`.
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        self.pan_anchor = Some((x - self.offset_x, y - self.offset_y));
    }

    /// Move the drag to `(x, y)`. Ignored when no drag is in progress.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if let Some((ax, ay)) = self.pan_anchor {
            self.offset_x = x - ax;
            self.offset_y = y - ay;
        }
    }

    /// Finish the drag.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Whether a drag is in progress.
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }
}

fn clamp_zoom(scale: f64) -> f64 {
    scale.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Wrap-around cursor over the items of one gallery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    /// Cursor at `index` in a gallery of `len` items. `None` if out of range.
    pub fn new(len: usize, index: usize) -> Option<Self> {
        (index < len).then_some(Self { len, index })
    }

    /// Current item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty gallery has no cursor.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether stepping moves the cursor.
    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    /// Step forward, wrapping to the first item.
    pub fn next_item(&mut self) -> usize {
        if self.can_navigate() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Step back, wrapping to the last item.
    pub fn prev_item(&mut self) -> usize {
        if self.can_navigate() {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }
}
