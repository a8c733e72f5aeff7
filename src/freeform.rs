//! Freeform gallery packing.
//!
//! Places a handful of thumbnails of mixed aspect ratio inside a fixed
//! container without cropping them. One image is centered, two images sit
//! side by side or stacked depending on the container shape, and three or
//! more go into a near-square grid whose partial last row is re-packed as
//! a block.
//!
//! Pure geometry: the result is a list of [`Placement`]s index-aligned with
//! the input, and computing it twice with the same input gives bit-identical
//! output.
//!
//! # Example
//!
//! ```
//! use zengallery::{Freeform, ImageDescriptor};
//!
//! let images = [ImageDescriptor::new(1600, 900)];
//! let layout = Freeform::new(400.0, 400.0).padding(0.0).compute(&images);
//!
//! let p = layout.placements[0];
//! assert_eq!((p.width, p.height), (400.0, 225.0));
//! assert_eq!(p.y, 87.5);
//! assert!(layout.corrections.is_empty());
//! ```

use alloc::{vec, vec::Vec};

use crate::geometry::{ContainerBox, Placement, ceil, fit_ratio, sqrt};
use crate::image::ImageDescriptor;

/// Spacing between adjacent thumbnails when none is given.
pub const DEFAULT_GAP: f64 = 8.0;

/// Compute a freeform layout with padding of `gap / 2`.
///
/// Container dimensions below [`MIN_CONTAINER_SIZE`](crate::MIN_CONTAINER_SIZE)
/// are raised to it. An empty `images` slice gives an empty result.
pub fn compute_layout(
    images: &[ImageDescriptor],
    container_width: f64,
    container_height: f64,
    gap: f64,
) -> Vec<Placement> {
    Freeform::new(container_width, container_height)
        .gap(gap)
        .compute(images)
        .placements
}

/// A defensive adjustment made while computing a layout.
///
/// None of these are errors; they explain why a layout may look off.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Correction {
    /// The container was smaller than the minimum (or not finite) and was enlarged.
    ContainerClamped {
        requested: ContainerBox,
        used: ContainerBox,
    },
    /// The image at `index` had no usable dimensions and was laid out with
    /// [`FALLBACK_ASPECT_RATIO`](crate::FALLBACK_ASPECT_RATIO).
    AspectRatioFallback { index: usize },
    /// The gaps between thumbnails would have used up the content area, so
    /// they were narrowed to at most half of it on each axis.
    GapReduced { requested: f64, used: f64 },
}

/// Result of [`Freeform::compute`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryLayout {
    /// One placement per input image, in input order.
    pub placements: Vec<Placement>,
    /// Adjustments applied to the inputs, in the order they were detected.
    pub corrections: Vec<Correction>,
}

/// Freeform layout specification.
///
/// # Example
///
/// ```
/// use zengallery::{Freeform, ImageDescriptor};
///
/// let images = [ImageDescriptor::new(1000, 1000), ImageDescriptor::new(1000, 1000)];
/// let layout = Freeform::new(800.0, 300.0).compute(&images);
///
/// // Wide container: side by side, each 392 px wide after padding and gap.
/// assert_eq!(layout.placements[0].width, 392.0);
/// assert_eq!(layout.placements[1].x, 4.0 + 392.0 + 8.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Freeform {
    container: ContainerBox,
    gap: f64,
    padding: Option<f64>,
}

impl Freeform {
    /// Lay out into a container of the given size, with [`DEFAULT_GAP`].
    pub fn new(container_width: f64, container_height: f64) -> Self {
        Self {
            container: ContainerBox::new(container_width, container_height),
            gap: DEFAULT_GAP,
            padding: None,
        }
    }

    /// Set the spacing between thumbnails. Negative or non-finite values mean 0.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = non_negative(gap);
        self
    }

    /// Set the inset around the content. Defaults to half the gap.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Some(non_negative(padding));
        self
    }

    /// Compute placements for `images`.
    pub fn compute(&self, images: &[ImageDescriptor]) -> GalleryLayout {
        let mut corrections = Vec::new();
        if images.is_empty() {
            return GalleryLayout {
                placements: Vec::new(),
                corrections,
            };
        }

        let container = self.container.clamped();
        if container != self.container {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                requested_width = self.container.width,
                requested_height = self.container.height,
                "container below minimum size, clamping"
            );
            corrections.push(Correction::ContainerClamped {
                requested: self.container,
                used: container,
            });
        }
        for (index, img) in images.iter().enumerate() {
            if img.is_fallback() {
                #[cfg(feature = "tracing")]
                tracing::debug!(index, failed = img.is_failed(), "using fallback aspect ratio");
                corrections.push(Correction::AspectRatioFallback { index });
            }
        }

        // Keep at least one pixel of content area on each axis.
        let max_padding = (container.width.min(container.height) - 1.0) / 2.0;
        let padding = self.padding.unwrap_or(self.gap / 2.0).min(max_padding);
        let avail = container.inset(padding);
        let arrangement = Arrangement::choose(images, avail);

        let gap = arrangement.max_gap(avail).map_or(self.gap, |max| self.gap.min(max));
        if gap != self.gap {
            #[cfg(feature = "tracing")]
            tracing::debug!(requested = self.gap, used = gap, "gap leaves no room for images, narrowing");
            corrections.push(Correction::GapReduced {
                requested: self.gap,
                used: gap,
            });
        }

        let frame = Frame {
            padding,
            gap,
            avail,
        };
        let placements = match (arrangement, images) {
            (Arrangement::Single, [only]) => vec![frame.single(only)],
            (Arrangement::SideBySide, [first, second]) => frame.side_by_side(first, second),
            (Arrangement::Stacked, [first, second]) => frame.stacked(first, second),
            (Arrangement::Grid { cols, rows }, _) => frame.grid(images, cols, rows),
            // `choose` only picks a one- or two-image arrangement for that many images.
            _ => Vec::new(),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            images = images.len(),
            width = container.width,
            height = container.height,
            "computed freeform layout"
        );

        GalleryLayout {
            placements,
            corrections,
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// How the images are split across the content area.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Arrangement {
    Single,
    SideBySide,
    Stacked,
    Grid { cols: usize, rows: usize },
}

impl Arrangement {
    fn choose(images: &[ImageDescriptor], avail: ContainerBox) -> Self {
        match images {
            [_] => Self::Single,
            [a, b] => {
                let total_ratio = a.aspect_ratio() + b.aspect_ratio();
                if avail.aspect_ratio() > total_ratio / 2.0 {
                    Self::SideBySide
                } else {
                    Self::Stacked
                }
            }
            _ => {
                let (cols, rows) = grid_shape(images.len(), avail.aspect_ratio());
                Self::Grid { cols, rows }
            }
        }
    }

    /// Gap counts across and down.
    fn gaps(self) -> (usize, usize) {
        match self {
            Self::Single => (0, 0),
            Self::SideBySide => (1, 0),
            Self::Stacked => (0, 1),
            Self::Grid { cols, rows } => (cols - 1, rows - 1),
        }
    }

    /// Widest gap that leaves at least half of each axis to the images.
    /// `None` when there are no gaps.
    fn max_gap(self, avail: ContainerBox) -> Option<f64> {
        let (across, down) = self.gaps();
        let limit = |len: f64, count: usize| (count > 0).then(|| len / (2 * count) as f64);
        match (limit(avail.width, across), limit(avail.height, down)) {
            (Some(w), Some(h)) => Some(w.min(h)),
            (w, h) => w.or(h),
        }
    }
}

/// Content area after padding, shared by the per-count strategies.
struct Frame {
    padding: f64,
    gap: f64,
    avail: ContainerBox,
}

impl Frame {
    fn single(&self, img: &ImageDescriptor) -> Placement {
        let (width, height) = fit_ratio(img.aspect_ratio(), self.avail.width, self.avail.height);
        Placement {
            x: self.padding + (self.avail.width - width) / 2.0,
            y: self.padding + (self.avail.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Widths follow the aspect ratios so heights match.
    fn side_by_side(&self, a: &ImageDescriptor, b: &ImageDescriptor) -> Vec<Placement> {
        let (ra, rb) = (a.aspect_ratio(), b.aspect_ratio());
        let ah = self.avail.height;
        let total = self.avail.width - self.gap;
        let w0 = total * (ra / (ra + rb));
        let w1 = total - w0;
        let h0 = ah.min(w0 / ra);
        let h1 = ah.min(w1 / rb);
        let row_h = h0.max(h1);
        vec![
            Placement::new(self.padding, self.padding + (row_h - h0) / 2.0, w0, h0),
            Placement::new(
                self.padding + w0 + self.gap,
                self.padding + (row_h - h1) / 2.0,
                w1,
                h1,
            ),
        ]
    }

    /// Heights follow the natural heights.
    fn stacked(&self, a: &ImageDescriptor, b: &ImageDescriptor) -> Vec<Placement> {
        let (ra, rb) = (a.aspect_ratio(), b.aspect_ratio());
        let aw = self.avail.width;
        let total = self.avail.height - self.gap;
        let (na, nb) = (a.natural_height(), b.natural_height());
        let share = if na == 0 || nb == 0 {
            0.5
        } else {
            na as f64 / (na as f64 + nb as f64)
        };
        let h0 = total * share;
        let h1 = total - h0;
        let w0 = aw.min(h0 * ra);
        let w1 = aw.min(h1 * rb);
        vec![
            Placement::new(self.padding + (aw - w0) / 2.0, self.padding, w0, h0),
            Placement::new(
                self.padding + (aw - w1) / 2.0,
                self.padding + h0 + self.gap,
                w1,
                h1,
            ),
        ]
    }

    fn grid(&self, images: &[ImageDescriptor], cols: usize, rows: usize) -> Vec<Placement> {
        let n = images.len();
        let cell_w = (self.avail.width - self.gap * (cols - 1) as f64) / cols as f64;
        let cell_h = (self.avail.height - self.gap * (rows - 1) as f64) / rows as f64;
        let cell_top = |row: usize| self.padding + row as f64 * (cell_h + self.gap);

        let mut placements: Vec<Placement> = images
            .iter()
            .enumerate()
            .map(|(i, img)| {
                let (row, col) = (i / cols, i % cols);
                let (width, height) = fit_ratio(img.aspect_ratio(), cell_w, cell_h);
                Placement {
                    x: self.padding + col as f64 * (cell_w + self.gap) + (cell_w - width) / 2.0,
                    y: cell_top(row) + (cell_h - height) / 2.0,
                    width,
                    height,
                }
            })
            .collect();

        let last_row = (n - 1) / cols;
        let last_start = last_row * cols;
        let count = n - last_start;
        if count < cols {
            let row = &mut placements[last_start..];
            let widths = row.iter().map(|p| p.width).sum::<f64>();
            let gaps = self.gap * (count - 1) as f64;
            let total = widths + gaps;
            // Cells are at most `cell_w` wide and the row is short of `cols`,
            // so the row always fits; the scale-down covers the case where
            // that stops holding. Gaps keep their size; only the images shrink.
            let (scale, mut x) = if total > self.avail.width {
                ((self.avail.width - gaps) / widths, self.padding)
            } else {
                (1.0, self.padding + (self.avail.width - total) / 2.0)
            };
            for p in row {
                p.width *= scale;
                p.height *= scale;
                p.x = x;
                p.y = cell_top(last_row) + (cell_h - p.height) / 2.0;
                x += p.width + self.gap;
            }
        }

        placements
    }
}

/// Column and row count for `n ≥ 3` images in a content area of `ratio`.
fn grid_shape(n: usize, ratio: f64) -> (usize, usize) {
    let cols = if ratio > 1.0 {
        ceil(sqrt(n as f64 * ratio))
    } else {
        ceil(sqrt(n as f64))
    };
    let cols = (cols as usize).max(1);
    let rows = n.div_ceil(cols);
    (cols, rows)
}
