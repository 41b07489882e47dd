use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromat_core::{
    ChromaticAdaptationMethod, Chromaticity, ColorSpace, RgbXyzMatrices, StandardSpace,
    TransformChain, adaptation_matrix, white_point,
};

#[derive(Parser)]
#[command(name = "chromat")]
#[command(about = "Derive RGB/XYZ and chromatic adaptation matrices from chromaticities")]
#[command(version = chromat_core::VERSION)]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// JSON array of extra color space descriptors; these shadow built-in names
    #[arg(long, global = true, value_name = "FILE")]
    spaces: Option<PathBuf>,

    /// Digits after the decimal point in text output
    #[arg(long, global = true, default_value_t = 8)]
    precision: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the RGB → XYZ matrix of a color space and its inverse
    Matrix {
        /// Color space name (e.g. "sRGB", "ACEScg", or a name from --spaces)
        space: String,
    },
    /// Print every step of an RGB → RGB conversion and the combined matrix
    Convert {
        /// Source color space
        #[arg(short, long)]
        from: String,

        /// Destination color space
        #[arg(short, long)]
        to: String,

        /// Adaptation between differing whites: bradford, von-kries, cat02, xyz-scaling or none
        #[arg(short, long, default_value = "bradford")]
        adapt: ChromaticAdaptationMethod,
    },
    /// Print the chromatic adaptation matrix between two white points
    Adapt {
        /// Source white: a name (D50, D60, D65, E, DCI) or "x,y"
        #[arg(short, long)]
        from: String,

        /// Destination white
        #[arg(short, long)]
        to: String,

        /// Adaptation method
        #[arg(short, long, default_value = "bradford")]
        method: ChromaticAdaptationMethod,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromat=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let registry = SpaceRegistry::load(cli.spaces.as_deref())?;
    let output = Output {
        json: cli.json,
        precision: cli.precision,
    };

    let rendered = match cli.command {
        Commands::Matrix { space } => run_matrix_command(&registry, &space, output),
        Commands::Convert { from, to, adapt } => {
            run_convert_command(&registry, &from, &to, adapt, output)
        }
        Commands::Adapt { from, to, method } => run_adapt_command(&from, &to, method, output),
    }?;
    println!("{rendered}");
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
    precision: usize,
}

impl Output {
    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Built-in spaces plus descriptors loaded from `--spaces`
#[derive(Debug, Default)]
struct SpaceRegistry {
    custom: Vec<ColorSpace>,
}

/// A resolved color space name
#[derive(Debug, Clone, Copy, PartialEq)]
enum SpaceRef<'a> {
    Standard(StandardSpace),
    Custom(&'a ColorSpace),
}

impl SpaceRegistry {
    fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let custom: Vec<ColorSpace> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse color spaces from {}", path.display()))?;
        tracing::info!(count = custom.len(), path = %path.display(), "loaded color spaces");
        Ok(Self { custom })
    }

    fn resolve(&self, name: &str) -> Result<SpaceRef<'_>> {
        if let Some(space) = self
            .custom
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
        {
            return Ok(SpaceRef::Custom(space));
        }
        let standard = name.parse::<StandardSpace>().with_context(|| {
            let mut known: Vec<&str> = StandardSpace::ALL.iter().map(|s| s.name()).collect();
            known.extend(self.custom.iter().map(|s| s.name.as_str()));
            format!("Known color spaces: {}", known.join(", "))
        })?;
        Ok(SpaceRef::Standard(standard))
    }
}

impl SpaceRef<'_> {
    fn descriptor(&self) -> ColorSpace {
        match self {
            Self::Standard(s) => s.descriptor(),
            Self::Custom(c) => (*c).clone(),
        }
    }

    fn matrices(&self) -> Result<RgbXyzMatrices> {
        let matrices = match self {
            Self::Standard(s) => s.matrices().cloned(),
            Self::Custom(c) => c.rgb_to_xyz(),
        };
        matrices.with_context(|| format!("Cannot derive matrices for {}", self.descriptor().name))
    }
}

/// Parse a white point given by name or as "x,y"
fn parse_white(text: &str) -> Result<Chromaticity> {
    if let Some((x, y)) = text.split_once(',') {
        let x: f64 = x.trim().parse().with_context(|| format!("Bad x in {text:?}"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("Bad y in {text:?}"))?;
        let c = Chromaticity::new(x, y);
        if !c.is_valid() {
            bail!("White point {text:?} has y = 0 or a non-finite coordinate");
        }
        return Ok(c);
    }
    let wp = white_point::from_name(text).with_context(|| {
        let known: Vec<&str> = white_point::ALL.iter().map(|w| w.name).collect();
        format!("Known white points: {}, or \"x,y\"", known.join(", "))
    })?;
    Ok(wp.chromaticity)
}

#[derive(Serialize)]
struct MatrixOutput<'a> {
    space: &'a ColorSpace,
    #[serde(flatten)]
    matrices: &'a RgbXyzMatrices,
    luminance: [f64; 3],
}

/// Each `run_*_command` returns the rendered output; `main` prints it
fn run_matrix_command(registry: &SpaceRegistry, name: &str, output: Output) -> Result<String> {
    let space = registry.resolve(name)?;
    let descriptor = space.descriptor();
    let matrices = space.matrices()?;

    if output.json {
        return output.to_json(&MatrixOutput {
            space: &descriptor,
            matrices: &matrices,
            luminance: matrices.luminance_coefficients(),
        });
    }

    let p = output.precision;
    let white = descriptor.white();
    let mut text = String::new();
    writeln!(text, "{} (white {:.5}, {:.5})", descriptor.name, white.x, white.y)?;
    writeln!(text)?;
    writeln!(text, "RGB → XYZ")?;
    writeln!(text, "{:.*}", p, matrices.to_xyz)?;
    writeln!(text)?;
    writeln!(text, "XYZ → RGB")?;
    writeln!(text, "{:.*}", p, matrices.from_xyz)?;
    writeln!(text)?;
    write!(text, "Round-trip error: {:.2e}", matrices.roundtrip_error())?;
    Ok(text)
}

fn run_convert_command(
    registry: &SpaceRegistry,
    from: &str,
    to: &str,
    method: ChromaticAdaptationMethod,
    output: Output,
) -> Result<String> {
    let src = registry.resolve(from)?;
    let dst = registry.resolve(to)?;

    let chain = match (src, dst) {
        (SpaceRef::Standard(s), SpaceRef::Standard(d)) => {
            TransformChain::between_standard(s, d, method)
        }
        _ => TransformChain::rgb_to_rgb(&src.descriptor(), &dst.descriptor(), method),
    }
    .with_context(|| format!("Cannot build {from} → {to}"))?;

    let report = chain.report();
    if report.inverse.is_none() {
        tracing::warn!("combined matrix is singular");
    }

    if output.json {
        return output.to_json(&report);
    }
    Ok(format!("{:.*}", output.precision, report))
}

#[derive(Serialize)]
struct AdaptOutput {
    from: Chromaticity,
    to: Chromaticity,
    method: ChromaticAdaptationMethod,
    matrix: chromat_core::Matrix3x3,
}

fn run_adapt_command(
    from: &str,
    to: &str,
    method: ChromaticAdaptationMethod,
    output: Output,
) -> Result<String> {
    let src = parse_white(from)?;
    let dst = parse_white(to)?;
    let matrix = adaptation_matrix(src, dst, method)
        .with_context(|| format!("Cannot adapt {from} → {to}"))?;

    if output.json {
        return output.to_json(&AdaptOutput {
            from: src,
            to: dst,
            method,
            matrix,
        });
    }

    Ok(format!(
        "{method} ({:.5}, {:.5}) → ({:.5}, {:.5})\n{:.*}",
        src.x, src.y, dst.x, dst.y, output.precision, matrix
    ))
}
