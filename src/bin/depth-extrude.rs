use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use depth_extrude::{ExtrudeParams, ExtrudeThreading};

/// Extrude a mask image into a grayscale pseudo-depth PNG.
#[derive(Parser, Debug)]
#[command(name = "depth-extrude", version)]
struct Cli {
    /// Input mask image (alpha channel if present, luminance otherwise).
    #[arg(long)]
    mask: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// JSON file with extrusion parameters. Flags below override it.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Extrude direction in degrees.
    #[arg(long, allow_negative_numbers = true)]
    direction: Option<f64>,

    /// Pixels to shift the far end of the gradient.
    #[arg(long)]
    shift: Option<u32>,

    /// Closest extrusion depth (0-255).
    #[arg(long)]
    close_point: Option<u8>,

    /// Farthest extrusion depth (0-255).
    #[arg(long)]
    far_point: Option<u8>,

    /// Mask values at or below this are background (0-254).
    #[arg(long)]
    bg_threshold: Option<u8>,

    /// Output value for background pixels (0-254).
    #[arg(long)]
    bg_depth: Option<u8>,

    /// Number of layers in the extrusion gradient.
    #[arg(long)]
    steps: Option<u32>,

    /// Invert the mask before extruding.
    #[arg(long, conflicts_with = "no_invert")]
    invert: bool,

    /// Do not invert the mask, even if the params file asks for it.
    #[arg(long)]
    no_invert: bool,

    /// Split the canvas into row bands processed in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long)]
    threads: Option<usize>,

    /// Canvas rows per band for --parallel.
    #[arg(long, default_value_t = 64)]
    band_rows: usize,
}

impl Cli {
    fn resolve_params(&self) -> anyhow::Result<ExtrudeParams> {
        let mut p = match &self.params {
            Some(path) => {
                let f = File::open(path)
                    .with_context(|| format!("open params '{}'", path.display()))?;
                ExtrudeParams::from_json_reader(BufReader::new(f))
                    .with_context(|| format!("parse params '{}'", path.display()))?
            }
            None => ExtrudeParams::default(),
        };

        if let Some(v) = self.direction {
            p.direction = v;
        }
        if let Some(v) = self.shift {
            p.shift = v;
        }
        if let Some(v) = self.close_point {
            p.close_point = v;
        }
        if let Some(v) = self.far_point {
            p.far_point = v;
        }
        if let Some(v) = self.bg_threshold {
            p.bg_threshold = v;
        }
        if let Some(v) = self.bg_depth {
            p.bg_depth = v;
        }
        if let Some(v) = self.steps {
            p.steps = v;
        }
        if self.invert {
            p.invert = true;
        }
        if self.no_invert {
            p.invert = false;
        }

        p.validate()?;
        Ok(p)
    }

    fn threading(&self) -> ExtrudeThreading {
        ExtrudeThreading {
            parallel: self.parallel,
            band_rows: self.band_rows,
            threads: self.threads,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.resolve_params()?;
    tracing::info!(?params, "extrusion parameters");

    let mask = depth_extrude::load_mask(&cli.mask)?;
    let depth = depth_extrude::extrude_with(&mask, &params, &cli.threading())
        .with_context(|| format!("extrude '{}'", cli.mask.display()))?;
    depth_extrude::save_depth_png(&depth, &cli.out)?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
