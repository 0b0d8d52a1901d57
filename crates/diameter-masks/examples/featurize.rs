//! Example: diameter score features on an RGB image.
//!
//! Splits the input into red, green and blue score matrices, samples pixel
//! centers on a regular grid and builds one diameter-feature record per
//! center. Records, feature names and colors are written to a JSON file next
//! to the input image.
//!
//! Run from the workspace root:
//!   cargo run -p diameter-masks --example featurize -- --help
//!   RUST_LOG=debug cargo run -p diameter-masks --example featurize -- --input data/cells.png

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use diameter_masks::{
    BorderMode, ChannelScores, ChannelSet, DiameterFeatureConfig, DiameterFeatureSet,
    FeatureError, FeatureSet, Image, MemoryScoreBank, Point2i, ScoreBank, ScoreMatrix,
};
use log::info;
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Border {
    Zero,
    Clamp,
    Reflect,
}

impl Border {
    fn mode(self) -> BorderMode<i32> {
        match self {
            Self::Zero => BorderMode::Constant(0),
            Self::Clamp => BorderMode::Clamp,
            Self::Reflect => BorderMode::Reflect101,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Compute per-pixel diameter score features for an RGB image")]
struct Args {
    /// Input image (any format the `image` crate decodes)
    #[arg(long, required = true)]
    input: PathBuf,

    /// Optional JSON run config; command-line values override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ring radius defining the diameter directions
    #[arg(long)]
    radius: Option<u32>,

    /// Sample every `stride`-th pixel in both axes
    #[arg(long, default_value_t = 8)]
    stride: usize,

    /// How reads beyond the image edge are scored
    #[arg(long, value_enum, default_value_t = Border::Zero)]
    border: Border,

    /// Output JSON path (default: <input stem>_diameters.json next to input)
    #[arg(long)]
    out: Option<PathBuf>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SampleDto {
    x: i32,
    y: i32,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct FeaturizeResult {
    image: String,
    config: DiameterFeatureConfig,
    endpoints: Vec<[i32; 2]>,
    names: Vec<String>,
    colors: Vec<[u8; 3]>,
    /// Wall-clock time spent building records, in milliseconds.
    elapsed_ms: f64,
    samples: Vec<SampleDto>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<DiameterFeatureConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let data =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_slice(&data)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => DiameterFeatureConfig::default(),
    };
    if let Some(radius) = args.radius {
        cfg.radius = radius;
    }
    Ok(cfg)
}

/// Decodes `path` into one score matrix per RGB channel.
fn load_rgb_scores(path: &Path, border: &BorderMode<i32>) -> Result<ChannelScores> {
    let rgb = image::open(path)
        .with_context(|| format!("opening input image {}", path.display()))?
        .to_rgb8();
    let (w, h) = rgb.dimensions();

    let mut scores = ChannelScores::new();
    for (c, name) in ["red", "green", "blue"].into_iter().enumerate() {
        let plane: Vec<u8> = rgb.pixels().map(|px| px.0[c]).collect();
        let img = Image::from_vec(w as usize, h as usize, plane)
            .with_context(|| format!("building {name} plane"))?;
        let matrix = ScoreMatrix::from_u8(&img.as_view())
            .with_context(|| format!("building {name} score matrix"))?
            .with_border(border.clone());
        scores.insert(name.to_owned(), Arc::new(matrix));
    }
    Ok(scores)
}

fn grid_centers(width: usize, height: usize, stride: usize) -> Vec<Point2i> {
    (0..height)
        .step_by(stride)
        .flat_map(|y| {
            (0..width)
                .step_by(stride)
                .map(move |x| Point2i::new(x as i32, y as i32))
        })
        .collect()
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.stride == 0 {
        bail!("--stride must be > 0");
    }
    let cfg = load_config(&args)?;
    let image_id = args.input.to_string_lossy().into_owned();
    let out_path = args.out.clone().unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        let dir = args.input.parent().unwrap_or(Path::new("."));
        dir.join(format!("{stem}_diameters.json"))
    });

    let border = args.border.mode();
    let bank = MemoryScoreBank::with_loader(move |id| {
        load_rgb_scores(Path::new(id), &border).map_err(|e| FeatureError::Load {
            image: id.to_owned(),
            reason: format!("{e:#}"),
        })
    });

    let mut features = DiameterFeatureSet::new(&cfg);
    features.initialize_for_run(&ChannelSet::rgb());
    features
        .initialize_for_image(&bank, &image_id)
        .with_context(|| format!("initializing features for {image_id}"))?;

    let scores = bank.get_or_add_scores(&image_id)?;
    let red = scores.get("red").context("red channel missing")?;
    let (width, height) = (red.width(), red.height());
    let centers = grid_centers(width, height, args.stride);
    info!(
        "{image_id}: {width}x{height}, {} centers, {} features per center",
        centers.len(),
        features.num_features()
    );

    let t0 = Instant::now();
    let records = features
        .build_records(&centers)
        .context("building feature records")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
    info!("built {} records in {elapsed_ms:.2} ms", records.len());

    let n = features.num_features();
    let result = FeaturizeResult {
        image: image_id,
        config: cfg,
        endpoints: features.endpoints().iter().map(|t| [t.x, t.y]).collect(),
        names: (0..n).map(|i| features.feature_name(i)).collect(),
        colors: (0..n).map(|i| features.feature_color(i)).collect(),
        elapsed_ms,
        samples: centers
            .iter()
            .zip(records)
            .map(|(c, values)| SampleDto {
                x: c.x,
                y: c.y,
                values,
            })
            .collect(),
    };

    let out_file = std::fs::File::create(&out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    serde_json::to_writer_pretty(out_file, &result)
        .with_context(|| format!("writing JSON to {}", out_path.display()))?;

    println!("results written to {}", out_path.display());
    Ok(())
}
