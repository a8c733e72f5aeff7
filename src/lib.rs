//! Gallery layout computation: freeform thumbnail packing, responsive tile
//! grids, and media viewer geometry.
//!
//! Pure geometry — no DOM, no pixel operations, no I/O, `no_std` compatible.
//! The host measures containers and images, calls into this crate, and
//! applies the resulting rectangles however it renders.
//!
//! # Modules
//!
//! - [`freeform`] — Packing 1..N thumbnails of mixed aspect ratio into a box
//! - [`grid`] — First-fit placement of project tiles in a responsive column grid
//! - [`viewer`] — Fit, zoom, pan, and navigation for the full-size viewer
//! - [`schedule`] — Last-write-wins coalescing of resize-driven recomputes
//! - [`geometry`], [`image`] — Shared value types
//! - `svg` — SVG rendering of layouts (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod freeform;
pub mod geometry;
#[cfg(feature = "alloc")]
pub mod grid;
pub mod image;
pub mod schedule;
#[cfg(feature = "svg")]
pub mod svg;
pub mod viewer;

// Re-exports: core types
#[cfg(feature = "alloc")]
pub use freeform::{Correction, DEFAULT_GAP, Freeform, GalleryLayout, compute_layout};
pub use geometry::{ContainerBox, MIN_CONTAINER_SIZE, Placement};
#[cfg(feature = "alloc")]
pub use grid::{
    Breakpoints, DEFAULT_MAX_ROWS, DEFAULT_TILE_GAP, GridCell, GridError, GridLayout, GridTile,
    ProjectGrid, TileSpan,
};
pub use image::{FALLBACK_ASPECT_RATIO, ImageDescriptor, LoadOutcome};
pub use schedule::PendingLayout;
pub use viewer::{Gallery, MediaView};
