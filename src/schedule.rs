//! Coalescing of layout recomputation requests.
//!
//! Resize events arrive faster than layouts need to be recomputed. The host
//! records each event with [`PendingLayout::request`] and, once per frame,
//! calls [`PendingLayout::take`] to get only the newest input. A result
//! computed for an older generation is stale and should be dropped rather
//! than applied.
//!
//! ```
//! use zengallery::{ContainerBox, PendingLayout};
//!
//! let mut pending = PendingLayout::new();
//! pending.request(ContainerBox::new(800.0, 600.0));
//! pending.request(ContainerBox::new(820.0, 600.0));
//!
//! let (generation, latest) = pending.take().unwrap();
//! assert_eq!(latest.width, 820.0);
//! assert!(pending.take().is_none());
//! assert!(pending.is_current(generation));
//! ```

/// A single slot holding the newest unprocessed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingLayout<T> {
    pending: Option<T>,
    generation: u64,
    superseded: u64,
}

impl<T> Default for PendingLayout<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PendingLayout<T> {
    /// Empty slot at generation 0.
    pub const fn new() -> Self {
        Self {
            pending: None,
            generation: 0,
            superseded: 0,
        }
    }

    /// Record a new input, replacing any unprocessed one. Returns its generation.
    pub fn request(&mut self, input: T) -> u64 {
        self.generation += 1;
        if self.pending.replace(input).is_some() {
            self.superseded += 1;
        }
        self.generation
    }

    /// Take the newest input and its generation, leaving the slot empty.
    pub fn take(&mut self) -> Option<(u64, T)> {
        self.pending.take().map(|input| (self.generation, input))
    }

    /// Whether an input is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a result computed for `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many requests were replaced before being taken.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Drop any waiting input without processing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }
}
