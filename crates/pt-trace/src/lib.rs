//! Marching-squares contour extraction with wedge-based segment merging.
//!
//! The pipeline:
//! 1. [`CellMap::from_fill_fn`] slides a 2x2 window over a filled-pixel
//!    predicate and stores one [`BoundaryCell`] per window that straddles
//!    the filled/unfilled boundary. Fully filled and fully empty windows
//!    are omitted, so the map stays sparse.
//! 2. [`ContourTracer::trace`] repeatedly pulls the smallest remaining
//!    cell and walks the [`TransitionTable`] from neighbor to neighbor
//!    until the walk returns to its starting cell, emitting one closed
//!    [`Polygon`](pt_core::Polygon) per walk. Consecutive boundary steps
//!    are merged into the longest straight segment the constraint wedge
//!    allows, so a straight run costs one vertex instead of one per cell.
//! 3. Winding encodes topology: positive signed area outlines a filled
//!    region, negative area outlines a hole.
//!
//! Saddle cells (two diagonally opposite corners filled) carry two
//! disjoint paths. The first pass consumes only its half of the cell; the
//! cell survives in the map until the second pass claims the rest.
//!
//! Input fields must keep an unfilled margin: a shape touching the
//! sampled border produces an open boundary chain, which the tracer
//! reports as [`Error::MissingNeighbor`].

mod cell;
mod error;
mod map;
mod tracer;
mod transition;

pub use cell::{BoundaryCell, CornerMask};
pub use error::Error;
pub use map::{Bounds, CellMap};
pub use tracer::ContourTracer;
pub use transition::TransitionTable;
