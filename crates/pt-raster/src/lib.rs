//! Pixel classification and image tracing entry points.
//!
//! The contour engine in `pt-trace` only sees booleans; this crate turns
//! decoded images into those booleans. Three standard rules cover the
//! common cases (opaque regions, dark strokes, light strokes), and
//! [`trace_image_with`] accepts any custom predicate.
//!
//! Shapes that touch the image border cannot be traced (see the margin
//! note in `pt-trace`); pad such images with a transparent or background
//! pixel ring first.

use image::{DynamicImage, GenericImageView, Rgba};
use pt_core::Polygon;
use pt_trace::{Bounds, CellMap, ContourTracer, Error};

/// Built-in pixel classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Filled wherever alpha exceeds 50%.
    Opacity,
    /// Filled where the pixel is opaque and its luma is below 128.
    #[default]
    Dark,
    /// Filled where the pixel is opaque and its luma is above 128.
    Light,
}

impl FillRule {
    pub fn is_filled(self, px: Rgba<u8>) -> bool {
        match self {
            Self::Opacity => is_opaque(px),
            Self::Dark => is_opaque(px) && luma(px) < 0x80,
            Self::Light => is_opaque(px) && luma(px) > 0x80,
        }
    }
}

fn is_opaque(px: Rgba<u8>) -> bool {
    px.0[3] > u8::MAX / 2
}

/// JPEG luma, the same coefficients as the standard RGB-to-YCbCr
/// conversion.
fn luma(px: Rgba<u8>) -> u8 {
    let [r, g, b, _] = px.0;
    let y =
        (19_595 * u32::from(r) + 38_470 * u32::from(g) + 7_471 * u32::from(b) + (1 << 15)) >> 16;
    y as u8
}

/// Trace an image's contours with one of the built-in rules.
pub fn trace_image(img: &DynamicImage, rule: FillRule) -> Result<Vec<Polygon>, Error> {
    trace_image_with(img, |px| rule.is_filled(px))
}

/// Trace an image's contours with a caller-supplied pixel predicate.
pub fn trace_image_with<F>(img: &DynamicImage, mut is_filled: F) -> Result<Vec<Polygon>, Error>
where
    F: FnMut(Rgba<u8>) -> bool,
{
    let (width, height) = img.dimensions();
    let mut map = CellMap::from_fill_fn(Bounds::of_size(width, height), |x, y| {
        is_filled(img.get_pixel(x as u32, y as u32))
    });
    ContourTracer::new().trace(&mut map)
}
