//! Image metadata consumed by the layouts.

/// Aspect ratio used for any image whose dimensions are unknown.
///
/// Applies to images that failed to load, images not yet measured (zero
/// natural size), and explicit ratios that are zero, negative, or not finite.
pub const FALLBACK_ASPECT_RATIO: f64 = 1.5;

/// Result of the host's image-loading facility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// Image decoded; natural dimensions in pixels.
    Loaded { width: u32, height: u32 },
    /// Image could not be loaded. Its placeholder is still laid out.
    Failed,
}

/// Intrinsic size information for one gallery image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageDescriptor {
    aspect_ratio: f64,
    natural_width: u32,
    natural_height: u32,
    failed: bool,
    fallback: bool,
}

impl ImageDescriptor {
    /// Describe an image by its natural pixel dimensions.
    ///
    /// A zero dimension means "not measured" and selects
    /// [`FALLBACK_ASPECT_RATIO`].
    pub fn new(natural_width: u32, natural_height: u32) -> Self {
        if natural_width == 0 || natural_height == 0 {
            return Self {
                aspect_ratio: FALLBACK_ASPECT_RATIO,
                natural_width,
                natural_height,
                failed: false,
                fallback: true,
            };
        }
        Self {
            aspect_ratio: natural_width as f64 / natural_height as f64,
            natural_width,
            natural_height,
            failed: false,
            fallback: false,
        }
    }

    /// Describe an image by aspect ratio alone. Natural dimensions are unknown.
    pub fn from_aspect_ratio(ratio: f64) -> Self {
        let valid = ratio > 0.0 && ratio.is_finite();
        Self {
            aspect_ratio: if valid { ratio } else { FALLBACK_ASPECT_RATIO },
            natural_width: 0,
            natural_height: 0,
            failed: false,
            fallback: !valid,
        }
    }

    /// Placeholder for an image that failed to load.
    pub fn failed() -> Self {
        Self {
            aspect_ratio: FALLBACK_ASPECT_RATIO,
            natural_width: 0,
            natural_height: 0,
            failed: true,
            fallback: true,
        }
    }

    /// Convert a load result.
    pub fn from_load(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Loaded { width, height } => Self::new(width, height),
            LoadOutcome::Failed => Self::failed(),
        }
    }

    /// Width divided by height. Always positive and finite.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Natural width in pixels, 0 if unknown.
    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    /// Natural height in pixels, 0 if unknown.
    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// Whether the image failed to load.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Whether [`FALLBACK_ASPECT_RATIO`] stands in for the real ratio.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl From<LoadOutcome> for ImageDescriptor {
    fn from(outcome: LoadOutcome) -> Self {
        Self::from_load(outcome)
    }
}
