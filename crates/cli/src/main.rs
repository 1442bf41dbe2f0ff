use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forklift::cfg::{GenCfg, OUTPUT_FILE};
use forklift::geogebra::{read_segments, write_file};
use forklift::gen::SegmentGenerator;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "forklift-gen")]
#[command(about = "Random forklift segment pairs as GeoGebra commands")]
struct Cmd {
    /// Defaults to `generate`
    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Write the segment pairs to the output file in the working directory
    Generate {
        /// Fixed RNG seed; drawn from OS entropy when absent
        #[arg(long)]
        seed: Option<u64>,
        /// Also write a provenance JSON next to the output
        #[arg(long)]
        provenance: bool,
    },
    /// Read a segments file back and summarize it
    Inspect {
        #[arg(default_value = OUTPUT_FILE)]
        file: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action.unwrap_or(Action::Generate {
        seed: None,
        provenance: false,
    }) {
        Action::Generate { seed, provenance } => generate(seed, provenance),
        Action::Inspect { file } => inspect(file),
        Action::Report => report(),
    }
}

fn generate(seed: Option<u64>, provenance: bool) -> Result<()> {
    let out = Path::new(OUTPUT_FILE);
    generate_to(out, GenCfg::default(), seed, provenance)?;
    println!("GeoGebra format written to '{}'.", out.display());
    Ok(())
}

/// Generate `cfg.count` pairs into `out`. Returns the number of lines written.
fn generate_to(out: &Path, cfg: GenCfg, seed: Option<u64>, provenance: bool) -> Result<usize> {
    let gen = match seed {
        Some(seed) => SegmentGenerator::new(cfg, seed)?,
        None => SegmentGenerator::from_entropy(cfg)?,
    };
    let seed = gen.seed();
    tracing::info!(
        count = cfg.count,
        half_length = cfg.half_length,
        max_distance = cfg.max_distance,
        seed,
        out = %out.display(),
        "generate"
    );

    let lines = write_file(out, gen)
        .map_err(|err| {
            tracing::error!(out = %out.display(), error = %err, "output sink failed");
            err
        })
        .with_context(|| format!("could not write output file '{}'", out.display()))?;
    tracing::info!(lines, "written");

    if provenance {
        let params = provenance::RunParams::new(&cfg, Some(seed));
        let path = provenance::write_sidecar(out, &params)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(lines)
}

/// Summary of a segments file read back from disk.
#[derive(Debug, Default, PartialEq)]
struct Inspection {
    segments: usize,
    min_length: f64,
    max_length: f64,
}

fn inspect(file: String) -> Result<()> {
    let summary = inspect_file(Path::new(&file))?;
    tracing::info!(
        file,
        segments = summary.segments,
        pairs = summary.segments / 2,
        min_length = summary.min_length,
        max_length = summary.max_length,
        "inspect"
    );
    println!(
        "{file}: {} segments ({} pairs), length {:.3}..{:.3}",
        summary.segments,
        summary.segments / 2,
        summary.min_length,
        summary.max_length
    );
    Ok(())
}

fn inspect_file(path: &Path) -> Result<Inspection> {
    let reader = File::open(path)
        .map(BufReader::new)
        .with_context(|| format!("opening {}", path.display()))?;
    let segs = read_segments(reader).with_context(|| format!("reading {}", path.display()))?;
    if segs.is_empty() {
        return Ok(Inspection::default());
    }
    let (min_length, max_length) = segs
        .iter()
        .map(|s| s.length())
        .fold((f64::INFINITY, 0.0f64), |(lo, hi), l| (lo.min(l), hi.max(l)));
    Ok(Inspection {
        segments: segs.len(),
        min_length,
        max_length,
    })
}

fn report() -> Result<()> {
    let cfg = GenCfg::default();
    let params = provenance::RunParams::new(&cfg, None);
    let doc = provenance::document(&params, &[OUTPUT_FILE.to_string()]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
