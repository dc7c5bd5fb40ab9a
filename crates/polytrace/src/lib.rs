//! Umbrella crate for the `polytrace` workspace.
//!
//! Re-exports the geometry primitives (`pt-core`), the contour engine
//! (`pt-trace`), and the image-facing fill rules (`pt-raster`) as one
//! surface. Typical use:
//!
//! ```
//! use polytrace::{Bounds, CellMap, ContourTracer};
//!
//! // One filled pixel inside a 4x4 field.
//! let mut map = CellMap::from_fill_fn(Bounds::of_size(4, 4), |x, y| (x, y) == (1, 1));
//! let polygons = ContourTracer::new().trace(&mut map).unwrap();
//!
//! assert_eq!(polygons.len(), 1);
//! assert!(polygons[0].is_filled());
//! ```
//!
//! Images go through [`trace_image`] with one of the [`FillRule`]
//! variants, or [`trace_image_with`] and a custom pixel predicate.

pub use pt_core::*;
pub use pt_raster::*;
pub use pt_trace::*;
