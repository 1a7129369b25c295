//! spriteclip CLI - command-line interface for sprite extraction.

use clap::{Args, Parser, Subcommand};
use spriteclip::Box as Rect;
use spriteclip::SpriteRecord;
use spriteclip::io::{ImageFormat, SpriteSheet, XmlExporter, write_image};
use spriteclip::region::{AnchorPolicy, BlobDetector, DEFAULT_WINDOW_RADIUS, DetectOptions};
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "spriteclip")]
#[command(about = "Find the sprites on a sprite sheet and export them as XML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect sprites and write the sheet description.
    Detect(CliDetectArgs),

    /// Print image size and colour key.
    Info {
        /// Path to the input image.
        #[arg(long)]
        image: PathBuf,
    },
}

#[derive(Debug, Clone, Args)]
struct CliDetectArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Region to scan as x,y,w,h (default: whole image).
    #[arg(long, value_parser = parse_region)]
    region: Option<Rect>,

    /// Merge radius: pixels this close on both axes join one sprite.
    #[arg(long, default_value_t = DEFAULT_WINDOW_RADIUS)]
    radius: u32,

    /// Put anchors at the bounding-box corner instead of the first pixel.
    #[arg(long)]
    top_left_anchor: bool,

    /// Animation name used in the XML.
    #[arg(long, default_value = "default")]
    animation: String,

    /// Path to write the XML to (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory to write one PNG per sprite into.
    #[arg(long)]
    cutouts: Option<PathBuf>,
}

fn parse_region(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(format!("expected x,y,w,h, got '{}'", s));
    }
    let mut vals = [0i32; 4];
    for (v, p) in vals.iter_mut().zip(&parts) {
        *v = p
            .parse()
            .map_err(|e| format!("bad region component '{}': {}", p, e))?;
    }
    Rect::new(vals[0], vals[1], vals[2], vals[3]).map_err(|e| e.to_string())
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(args) => run_detect(&args),
        Commands::Info { image } => run_info(&image),
    }
}

// ── info ───────────────────────────────────────────────────────────────

fn run_info(image: &Path) -> CliResult<()> {
    let sheet = SpriteSheet::open(image)?;
    let (r, g, b) = sheet.color_key();
    println!("{}", sheet.name());
    println!("  size:      {}x{}", sheet.width(), sheet.height());
    println!("  samples:   {}", sheet.pix().spp());
    println!("  color key: ({}, {}, {})", r, g, b);
    Ok(())
}

// ── detect ─────────────────────────────────────────────────────────────

fn run_detect(args: &CliDetectArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());
    let sheet = SpriteSheet::open(&args.image)?;
    tracing::info!("Image size: {}x{}", sheet.width(), sheet.height());

    let region = args.region.unwrap_or_else(|| sheet.full_region());
    let anchor = if args.top_left_anchor {
        AnchorPolicy::TopLeft
    } else {
        AnchorPolicy::FirstPixel
    };
    let options = DetectOptions::new()
        .with_window_radius(args.radius)
        .with_anchor(anchor);

    let mut detector = BlobDetector::with_options(options);
    let blobs = detector.find_clips(&sheet, &region)?;
    tracing::info!("Detected {} sprites", blobs.len());

    let records: Vec<SpriteRecord> = blobs.iter().map(|b| b.to_record()).collect();

    let mut exporter = XmlExporter::new();
    exporter.open_animation(&args.animation);
    exporter.add_sprites(&records);
    exporter.close_animation();
    let xml = exporter.get_xml(sheet.name(), sheet.width(), sheet.height(), sheet.color_key());

    match &args.out {
        Some(path) => {
            std::fs::write(path, &xml)?;
            tracing::info!("XML written to {}", path.display());
        }
        None => println!("{}", xml),
    }

    if let Some(dir) = &args.cutouts {
        std::fs::create_dir_all(dir)?;
        for blob in detector.clips() {
            let cut = sheet.cutout(&blob.bounds())?;
            let path = dir.join(format!("{}.{}", blob.name(), ImageFormat::Png.extension()));
            write_image(&cut, &path, ImageFormat::Png)?;
        }
        tracing::info!(
            "Wrote {} cut-outs to {}",
            detector.clips().len(),
            dir.display()
        );
    }

    Ok(())
}
