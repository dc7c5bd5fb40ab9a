//! Example: trace an ASCII-art bitmap and print the resulting contours.
//!
//! Run from the workspace root:
//!   cargo run -p polytrace --example trace_ascii

use polytrace::{Bounds, CellMap, ContourTracer, Error};

const ART: &[&str] = &[
    "..........",
    ".########.",
    ".#......#.",
    ".#..##..#.",
    ".#..##..#.",
    ".#......#.",
    ".########.",
    "..........",
];

fn main() -> Result<(), Error> {
    let width = ART[0].len() as i32;
    let height = ART.len() as i32;
    let mut map = CellMap::from_fill_fn(Bounds::new(0, 0, width, height), |x, y| {
        ART[y as usize].as_bytes()[x as usize] == b'#'
    });

    let polygons = ContourTracer::new().trace(&mut map)?;

    println!("{} contours", polygons.len());
    for (i, polygon) in polygons.iter().enumerate() {
        let kind = if polygon.is_filled() { "fill" } else { "hole" };
        println!(
            "#{i}: {kind}, {} vertices, area {:+.3}",
            polygon.points.len(),
            polygon.signed_area()
        );
        for p in &polygon.points {
            println!("    ({:.3}, {:.3})", p.x, p.y);
        }
    }
    Ok(())
}
