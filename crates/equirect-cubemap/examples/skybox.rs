//! Example: render the six skybox faces of one panorama to PNG files.
//!
//! Loads an equirectangular image, renders each cube face with the chosen
//! filter, and writes `px.png` .. `nz.png` into the output directory.
//! Per-face timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p equirect-cubemap --example skybox -- --help
//!   cargo run -p equirect-cubemap --example skybox -- --input pano.png

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use equirect_cubemap::{
    FaceId, InterpolationMode, PixelBuffer, RenderRequest, render_face,
};
use image::{ImageReader, RgbaImage};

#[derive(Parser, Debug)]
#[command(about = "Render the six cube faces of an equirectangular panorama")]
struct Args {
    /// Path to the panorama image
    #[arg(long)]
    input: PathBuf,

    /// Horizontal rotation in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation: f64,

    /// Upper bound on the face edge length, in pixels
    #[arg(long, default_value_t = 1024)]
    max_edge: usize,

    /// Output directory for the face PNGs
    #[arg(long, default_value = "faces")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let img = ImageReader::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?
        .decode()
        .context("decode panorama")?
        .to_rgba8();
    let (w, h) = img.dimensions();
    let src = PixelBuffer::from_vec(w as usize, h as usize, img.into_raw())
        .context("panorama pixel layout")?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("create {}", args.out.display()))?;

    for face in FaceId::ALL {
        let started = Instant::now();
        let req = RenderRequest {
            rotation: args.rotation.to_radians(),
            max_edge: args.max_edge,
            ..RenderRequest::new(face, InterpolationMode::Lanczos)
        };
        let dst = render_face(&src, &req)?;

        let (fw, fh) = (dst.width() as u32, dst.height() as u32);
        let out = RgbaImage::from_raw(fw, fh, dst.into_vec())
            .context("face pixel layout")?;
        let path = args.out.join(format!("{}.png", face.name()));
        out.save(&path)
            .with_context(|| format!("write {}", path.display()))?;

        println!(
            "{}: {fw}x{fh} in {:.1?}",
            face.name(),
            started.elapsed()
        );
    }

    Ok(())
}
