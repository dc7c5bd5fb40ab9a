use pt_core::{Direction, GridPoint, Point2d, Polygon, Rotation2d, Vec2d};

use crate::cell::{BoundaryCell, CornerMask, exit_corners};
use crate::error::Error;
use crate::map::CellMap;
use crate::transition::TransitionTable;

/// Fraction by which exit-edge corners are pulled toward each other
/// before any wedge math, so polygons traced through adjacent cells never
/// share an exact point. The second corner squeezes toward the
/// already-squeezed first, which biases the squeezed midpoint 1/128 of
/// the edge toward the second corner; the first baseline of a trace
/// starts on the exit edge and needs that bias to be non-zero.
const SQUEEZE_FACTOR: f64 = 1.0 / 8.0;

/// Below this magnitude the closing ray counts as parallel to the final
/// edge and the edge midpoint is used instead of an intersection.
const PARALLEL_EPS: f64 = 1e-6;

fn squeeze_corners(a: Point2d, b: Point2d) -> (Point2d, Point2d) {
    let a = Point2d::new(
        a.x * (1.0 - SQUEEZE_FACTOR) + b.x * SQUEEZE_FACTOR,
        a.y * (1.0 - SQUEEZE_FACTOR) + b.y * SQUEEZE_FACTOR,
    );
    let b = Point2d::new(
        b.x * (1.0 - SQUEEZE_FACTOR) + a.x * SQUEEZE_FACTOR,
        b.y * (1.0 - SQUEEZE_FACTOR) + a.y * SQUEEZE_FACTOR,
    );
    (a, b)
}

/// Admissible angular range for the endpoint of the segment currently
/// being grown, tracked in a frame whose x-axis is the segment baseline.
/// A candidate stays inside as long as its rotated unit vector's y lands
/// within `[min_y, max_y]`.
struct Wedge {
    rotation: Rotation2d,
    min_y: f64,
    max_y: f64,
}

impl Wedge {
    /// Wedge admitting the (squeezed) exit edge of the cell at `point`
    /// for a path leaving in `dir`, seen from `segment_start`.
    fn for_exit(segment_start: Point2d, point: GridPoint, dir: Direction) -> Self {
        let (a, b) = exit_corners(point, dir);
        let (a, b) = squeeze_corners(a, b);
        let midpoint = Point2d::midpoint(a, b);
        let rotation = Rotation2d::to_x_axis(segment_start.unit_vector_to(midpoint));

        let ua = rotation.apply(segment_start.unit_vector_to(a));
        let ub = rotation.apply(segment_start.unit_vector_to(b));
        Self {
            rotation,
            min_y: ua.y.min(ub.y),
            max_y: ua.y.max(ub.y),
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.min_y && y <= self.max_y
    }

    /// Intersect with the angular range of another cell's squeezed exit
    /// edge; the segment may then extend through that cell as well.
    fn narrow(&mut self, segment_start: Point2d, a: Point2d, b: Point2d) {
        let (a, b) = squeeze_corners(a, b);
        let ua = self.rotation.apply(segment_start.unit_vector_to(a));
        let ub = self.rotation.apply(segment_start.unit_vector_to(b));
        self.min_y = self.min_y.max(ua.y.min(ub.y));
        self.max_y = self.max_y.min(ua.y.max(ub.y));
    }

    /// Endpoint for the segment: bisect the wedge, cast a ray from
    /// `segment_start` at that angle, and intersect it with the line
    /// through the final edge's corners. Falls back to the edge midpoint
    /// when the ray runs parallel to the edge.
    fn close_onto_edge(
        &self,
        segment_start: Point2d,
        point: GridPoint,
        dir: Direction,
    ) -> Point2d {
        let mid_y = (self.min_y + self.max_y) / 2.0;
        let angle = mid_y.asin();
        let ray = self.rotation.invert().apply(Vec2d {
            x: angle.cos(),
            y: angle.sin(),
        });

        let (a, b) = exit_corners(point, dir);
        if dir.is_vertical() {
            // Horizontal edge: solve for x along the edge's row.
            if ray.y.abs() < PARALLEL_EPS {
                return Point2d::midpoint(a, b);
            }
            let t = (a.y - segment_start.y) / ray.y;
            Point2d::new(segment_start.x + ray.x * t, a.y)
        } else {
            // Vertical edge: solve for y along the edge's column.
            if ray.x.abs() < PARALLEL_EPS {
                return Point2d::midpoint(a, b);
            }
            let t = (a.x - segment_start.x) / ray.x;
            Point2d::new(a.x, segment_start.y + ray.y * t)
        }
    }
}

/// Walks boundary cells into closed polygons.
///
/// Owns the immutable [`TransitionTable`]; all mutable state lives in the
/// [`CellMap`] being consumed.
pub struct ContourTracer {
    transitions: TransitionTable,
}

impl ContourTracer {
    pub fn new() -> Self {
        Self {
            transitions: TransitionTable::new(),
        }
    }

    /// Trace every remaining boundary in `map`. On success the map is
    /// empty and each connected boundary contributed one closed polygon.
    pub fn trace(&self, map: &mut CellMap) -> Result<Vec<Polygon>, Error> {
        let mut polygons = Vec::new();
        while let Some(polygon) = self.trace_next(map)? {
            polygons.push(polygon);
        }
        Ok(polygons)
    }

    /// Trace one polygon starting from the smallest remaining cell, or
    /// `None` when the map is exhausted.
    pub fn trace_next(&self, map: &mut CellMap) -> Result<Option<Polygon>, Error> {
        let Some(&start_cell) = map.first() else {
            return Ok(None);
        };
        self.trace_polygon(map, start_cell).map(Some)
    }

    fn trace_polygon(&self, map: &mut CellMap, start_cell: BoundaryCell) -> Result<Polygon, Error> {
        let start = start_cell.point;

        // Entry probe: the first direction the starting cell redirects.
        let mut current_direction = Direction::ALL
            .into_iter()
            .find_map(|dir| self.transitions.get(start_cell.corners, dir))
            .ok_or(Error::NoEntryDirection {
                point: start,
                corners: start_cell.corners,
            })?;

        // The first segment is anchored at the midpoint of the exit edge
        // for the direction chosen above.
        let (a, b) = exit_corners(start, current_direction);
        let mut segment_start = Point2d::midpoint(a, b);
        let polygon_start = segment_start;

        let mut wedge = Wedge::for_exit(segment_start, start, current_direction);

        // Orientation bookkeeping; masks are recorded as of the visit.
        let mut top_left_most = start_cell;
        let mut leftmost_non_saddle = (!start_cell.corners.is_saddle()).then_some(start_cell);

        let mut points = Vec::new();
        let mut last = start;
        let mut last_direction;

        loop {
            last_direction = current_direction;
            let next = last.step(current_direction);
            if next == start {
                break;
            }

            let cell = *map.get(next).ok_or(Error::MissingNeighbor {
                point: next,
                from: last,
            })?;

            if (cell.point.x, cell.point.y) < (top_left_most.point.x, top_left_most.point.y) {
                top_left_most = cell;
            }
            if !cell.corners.is_saddle()
                && leftmost_non_saddle.is_none_or(|best| {
                    (cell.point.x, cell.point.y) < (best.point.x, best.point.y)
                })
            {
                leftmost_non_saddle = Some(cell);
            }

            current_direction = self
                .transitions
                .get(cell.corners, current_direction)
                .ok_or(Error::NoExitDirection {
                    point: next,
                    corners: cell.corners,
                    entered: current_direction,
                })?;

            let (exit_a, exit_b) = exit_corners(next, current_direction);
            let proposed_exit = Point2d::midpoint(exit_a, exit_b);
            let to_exit = wedge
                .rotation
                .apply(segment_start.unit_vector_to(proposed_exit));

            if wedge.contains(to_exit.y) {
                wedge.narrow(segment_start, exit_a, exit_b);
            } else {
                // The segment cannot bend far enough to reach this cell's
                // exit; it ends at the entrance instead.
                let (ent_a, ent_b) = exit_corners(next, last_direction.reverse());
                let entrance = Point2d::midpoint(ent_a, ent_b);
                points.push(entrance);

                segment_start = entrance;
                wedge = Wedge::for_exit(segment_start, next, current_direction);
            }

            self.consume_path(map, last, last_direction);
            last = next;
        }

        self.consume_path(map, last, last_direction);

        // If the jump back to the trace's anchor point escapes the wedge,
        // one more vertex is needed to join up the polygon.
        let back = wedge
            .rotation
            .apply(segment_start.unit_vector_to(polygon_start));
        if !wedge.contains(back.y) {
            points.push(wedge.close_onto_edge(segment_start, last, last_direction));
        }

        let filled = match leftmost_non_saddle {
            // The leftmost non-saddle cell's top-left corner lies just
            // outside the contour; clear means the outside is unfilled.
            Some(cell) => !cell.corners.contains(CornerMask::TOP_LEFT),
            // Every visited cell was a saddle: a single-pixel contour,
            // classified by the pixel in the top-left-most cell.
            None => top_left_most.corners.contains(CornerMask::BOTTOM_RIGHT),
        };

        let mut polygon = Polygon { points };
        if filled != polygon.is_filled() {
            polygon.reverse();
        }
        Ok(polygon)
    }

    /// Clear the path just used through the cell at `point` and drop the
    /// cell once no boundary remains.
    fn consume_path(&self, map: &mut CellMap, point: GridPoint, outgoing: Direction) {
        if let Some(cell) = map.get_mut(point) {
            cell.remove_path(outgoing, &self.transitions);
        }
        map.garbage_collect(point);
    }
}

impl Default for ContourTracer {
    fn default() -> Self {
        Self::new()
    }
}
