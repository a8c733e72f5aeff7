//! Value types shared by every layout: container boxes and placed rectangles.
//!
//! All coordinates are `f64` CSS pixels. Layouts are never rounded here;
//! the host decides how to snap when it applies them.

/// Smallest container dimension a layout will work with, per axis.
///
/// Zero, negative, and non-finite sizes are raised to this floor instead of
/// producing an error.
pub const MIN_CONTAINER_SIZE: f64 = 100.0;

/// Measured size of the element a layout is computed for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerBox {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ContainerBox {
    /// Create a container box. No clamping happens until [`clamped`](Self::clamped).
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Raise each axis to at least [`MIN_CONTAINER_SIZE`].
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
        }
    }

    /// Whether [`clamped`](Self::clamped) would change this box.
    pub fn needs_clamp(&self) -> bool {
        self.clamped() != *self
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Shrink by `inset` on every side.
    pub fn inset(self, inset: f64) -> Self {
        Self {
            width: self.width - inset * 2.0,
            height: self.height - inset * 2.0,
        }
    }
}

fn clamp_dimension(v: f64) -> f64 {
    // NaN fails the comparison and lands on the floor too.
    if v >= MIN_CONTAINER_SIZE && v.is_finite() {
        v
    } else {
        MIN_CONTAINER_SIZE
    }
}

/// Position and size of one laid-out element.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Create a placement.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether the interiors of `self` and `other` intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Fit an aspect ratio into a box: take the full width, and if that is too
/// tall, take the full height instead.
pub(crate) fn fit_ratio(ratio: f64, max_w: f64, max_h: f64) -> (f64, f64) {
    let mut width = max_w;
    let mut height = width / ratio;
    if height > max_h {
        height = max_h;
        width = height * ratio;
    }
    (width, height)
}

// `core` has no `sqrt`/`ceil` for floats; route through libm so `no_std`
// builds work.
pub(crate) fn sqrt(v: f64) -> f64 {
    num_traits::Float::sqrt(v)
}

pub(crate) fn ceil(v: f64) -> f64 {
    num_traits::Float::ceil(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raises_small_and_zero() {
        let b = ContainerBox::new(0.0, 50.0).clamped();
        assert_eq!(b, ContainerBox::new(100.0, 100.0));
    }

    #[test]
    fn clamp_handles_negative_and_nan() {
        let b = ContainerBox::new(-20.0, f64::NAN).clamped();
        assert_eq!(b, ContainerBox::new(100.0, 100.0));
        let b = ContainerBox::new(f64::INFINITY, 300.0).clamped();
        assert_eq!(b, ContainerBox::new(100.0, 300.0));
    }

    #[test]
    fn clamp_keeps_valid_sizes() {
        let b = ContainerBox::new(640.0, 480.0);
        assert!(!b.needs_clamp());
        assert_eq!(b.clamped(), b);
    }

    #[test]
    fn inset_both_axes() {
        let b = ContainerBox::new(400.0, 300.0).inset(4.0);
        assert_eq!(b, ContainerBox::new(392.0, 292.0));
    }

    #[test]
    fn fit_ratio_width_limited() {
        assert_eq!(fit_ratio(2.0, 400.0, 400.0), (400.0, 200.0));
    }

    #[test]
    fn fit_ratio_height_limited() {
        assert_eq!(fit_ratio(0.5, 400.0, 400.0), (200.0, 400.0));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Placement::new(0.0, 0.0, 10.0, 10.0);
        let b = Placement::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Placement::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn float_helpers() {
        assert_eq!(sqrt(16.0), 4.0);
        assert_eq!(ceil(2.1), 3.0);
        assert_eq!(ceil(3.0), 3.0);
    }
}
