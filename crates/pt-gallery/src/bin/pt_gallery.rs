use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use image::{GenericImageView, Rgb, RgbImage};
use pt_core::Polygon;
use pt_raster::{FillRule, trace_image};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "pt_gallery")]
#[command(about = "Trace a raster image into polygon contours")]
struct Cli {
    /// Input image (any format the image crate decodes)
    #[arg(long, required = true)]
    input: PathBuf,
    /// Output directory for polygons.json, meta.json and overlay.png
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Pixel classification rule
    #[arg(long, value_enum, default_value_t = RuleArg::Dark)]
    rule: RuleArg,
    /// Upscale factor for the overlay rendering
    #[arg(long, default_value_t = 4)]
    scale: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RuleArg {
    Opacity,
    Dark,
    Light,
}

impl RuleArg {
    fn fill_rule(self) -> FillRule {
        match self {
            Self::Opacity => FillRule::Opacity,
            Self::Dark => FillRule::Dark,
            Self::Light => FillRule::Light,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Serialize)]
struct PolygonDto {
    filled: bool,
    area: f64,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct MetaDto {
    input: String,
    rule: &'static str,
    width: u32,
    height: u32,
    scale: u32,
    polygon_count: usize,
    fill_count: usize,
    hole_count: usize,
    vertex_count: usize,
}

const FILL_COLOR: Rgb<u8> = Rgb([64, 64, 255]);
const HOLE_COLOR: Rgb<u8> = Rgb([255, 64, 64]);
const VERTEX_COLOR: Rgb<u8> = Rgb([64, 255, 64]);

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.scale == 0 {
        bail!("scale must be at least 1");
    }

    let img = image::open(&cli.input)
        .with_context(|| format!("opening input image {}", cli.input.display()))?;
    let (width, height) = img.dimensions();

    let polygons = trace_image(&img, cli.rule.fill_rule())
        .context("tracing input image; shapes touching the border cannot be traced")?;

    println!("{} polygons found", polygons.len());
    for polygon in &polygons {
        let kind = if polygon.is_filled() { "fill" } else { "hole" };
        println!("  {kind}: {} points", polygon.points.len());
    }

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("creating output directory {}", cli.out.display()))?;

    let dtos: Vec<PolygonDto> = polygons
        .iter()
        .map(|p| PolygonDto {
            filled: p.is_filled(),
            area: p.signed_area(),
            points: p.points.iter().map(|v| [v.x, v.y]).collect(),
        })
        .collect();
    write_json(cli.out.join("polygons.json"), &dtos)?;

    let fill_count = polygons.iter().filter(|p| p.is_filled()).count();
    write_json(
        cli.out.join("meta.json"),
        &MetaDto {
            input: cli.input.display().to_string(),
            rule: cli.rule.name(),
            width,
            height,
            scale: cli.scale,
            polygon_count: polygons.len(),
            fill_count,
            hole_count: polygons.len() - fill_count,
            vertex_count: polygons.iter().map(|p| p.points.len()).sum(),
        },
    )?;

    let overlay = render_overlay(width, height, cli.scale, &polygons);
    overlay
        .save(cli.out.join("overlay.png"))
        .context("writing overlay.png")?;

    Ok(())
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn render_overlay(width: u32, height: u32, scale: u32, polygons: &[Polygon]) -> RgbImage {
    let mut img = RgbImage::new(width.saturating_mul(scale), height.saturating_mul(scale));
    let s = f64::from(scale);

    for polygon in polygons {
        let color = if polygon.is_filled() {
            FILL_COLOR
        } else {
            HOLE_COLOR
        };

        let n = polygon.points.len();
        for i in 0..n {
            let a = polygon.points[i];
            let b = polygon.points[(i + 1) % n];
            draw_line(&mut img, (a.x * s, a.y * s), (b.x * s, b.y * s), color);
        }
        for p in &polygon.points {
            draw_dot(&mut img, p.x * s, p.y * s, VERTEX_COLOR);
        }
    }

    img
}

fn draw_line(img: &mut RgbImage, a: (f64, f64), b: (f64, f64), color: Rgb<u8>) {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;

    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        put_pixel_checked(img, a.0 + dx * t, a.1 + dy * t, color);
    }
}

fn draw_dot(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            put_pixel_checked(img, x + f64::from(dx), y + f64::from(dy), color);
        }
    }
}

fn put_pixel_checked(img: &mut RgbImage, x: f64, y: f64, color: Rgb<u8>) {
    let xi = x.round() as i64;
    let yi = y.round() as i64;
    if xi < 0 || yi < 0 {
        return;
    }

    let (ux, uy) = (xi as u32, yi as u32);
    if ux >= img.width() || uy >= img.height() {
        return;
    }
    img.put_pixel(ux, uy, color);
}
