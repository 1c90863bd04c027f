//! Converts equirectangular panoramas into cube-map faces packed in a ZIP.
//!
//! Each (panorama, face) pair is an independent unit of work over a shared
//! immutable source buffer, so the six faces render in parallel with no
//! coordination; packaging starts only once a panorama's batch is complete.
//! Faces are stored as `image<N>/<face>.<ext>` inside the archive.

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eqc_core::PixelBuffer;
use eqc_render::{FaceId, RenderRequest, render_face};
use eqc_sample::InterpolationMode;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use rayon::prelude::*;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

#[derive(Parser, Debug)]
#[command(name = "eqc_cli")]
#[command(about = "Convert equirectangular panoramas into zipped cube-map faces")]
struct Cli {
    /// Panorama image paths; each gets its own folder in the archive
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Horizontal rotation in degrees
    #[arg(long, default_value_t = 0.0)]
    rotation: f64,

    #[arg(long, value_enum, default_value_t = InterpolationArg::Lanczos)]
    interpolation: InterpolationArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Upper bound on the face edge length, in pixels
    #[arg(long, default_value_t = 1024)]
    max_edge: usize,

    /// Output archive path
    #[arg(long, default_value = "cubemap.zip")]
    out: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InterpolationArg {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos,
}

impl From<InterpolationArg> for InterpolationMode {
    fn from(arg: InterpolationArg) -> Self {
        match arg {
            InterpolationArg::Nearest => InterpolationMode::Nearest,
            InterpolationArg::Bilinear => InterpolationMode::Bilinear,
            InterpolationArg::Bicubic => InterpolationMode::Bicubic,
            InterpolationArg::Lanczos => InterpolationMode::Lanczos,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Png,
    Jpg,
}

impl FormatArg {
    fn extension(self) -> &'static str {
        match self {
            FormatArg::Png => "png",
            FormatArg::Jpg => "jpg",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rotation = cli.rotation.to_radians();
    let interpolation = InterpolationMode::from(cli.interpolation);

    let file = File::create(&cli.out)
        .with_context(|| format!("create {}", cli.out.display()))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for (index, path) in cli.inputs.iter().enumerate() {
        let started = Instant::now();
        let src = load_panorama(path)?;

        let faces: Vec<(FaceId, Vec<u8>)> = FaceId::ALL
            .par_iter()
            .map(|&face| {
                let req = RenderRequest {
                    face,
                    rotation,
                    interpolation,
                    max_edge: cli.max_edge,
                };
                let dst = render_face(&src, &req)
                    .with_context(|| format!("render {} of {}", face.name(), path.display()))?;
                let bytes = encode_face(dst, cli.format)
                    .with_context(|| format!("encode {} of {}", face.name(), path.display()))?;
                Ok((face, bytes))
            })
            .collect::<Result<Vec<_>>>()?;

        let folder = format!("image{}", index + 1);
        for (face, bytes) in faces {
            let name = format!("{folder}/{}.{}", face.name(), cli.format.extension());
            archive
                .start_file(name.as_str(), options)
                .with_context(|| format!("add {name} to archive"))?;
            archive
                .write_all(&bytes)
                .with_context(|| format!("write {name}"))?;
        }

        println!(
            "{}: 6 faces ({folder}) in {:.1?}",
            path.display(),
            started.elapsed()
        );
    }

    archive.finish().context("finalize archive")?;
    println!("wrote {}", cli.out.display());
    Ok(())
}

fn load_panorama(path: &Path) -> Result<PixelBuffer> {
    let img = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    PixelBuffer::from_vec(w as usize, h as usize, img.into_raw())
        .with_context(|| format!("panorama layout of {}", path.display()))
}

fn encode_face(face: PixelBuffer, format: FormatArg) -> Result<Vec<u8>> {
    let (w, h) = (face.width() as u32, face.height() as u32);
    let img = RgbaImage::from_raw(w, h, face.into_vec()).context("face pixel layout")?;

    let mut buf = Cursor::new(Vec::new());
    match format {
        FormatArg::Png => img.write_to(&mut buf, ImageFormat::Png)?,
        // JPEG has no alpha channel; drop it on encode.
        FormatArg::Jpg => {
            DynamicImage::ImageRgba8(img)
                .to_rgb8()
                .write_to(&mut buf, ImageFormat::Jpeg)?;
        }
    }
    Ok(buf.into_inner())
}
