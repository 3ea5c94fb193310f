//! Aracne: animated 3D landing scene.
//!
//! Composes the radial-line scene, then either opens a window and runs the
//! render loop, or (with `--headless`) prints what was composed and exits.

mod app;
mod font;
mod text;

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

use aracne_scene::{LightRig, SceneConfig, SceneModel};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLightRig {
    Studio,
    Accent,
}

impl From<CliLightRig> for LightRig {
    fn from(value: CliLightRig) -> Self {
        match value {
            CliLightRig::Studio => LightRig::Studio,
            CliLightRig::Accent => LightRig::Accent,
        }
    }
}

/// Aracne - rotating sphere, radiating lines, clickable labels
#[derive(Parser, Debug)]
#[command(name = "aracne", version, about)]
struct Cli {
    /// Scene configuration file (JSON); built-in defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for segment lengths and label placement
    #[arg(long)]
    seed: Option<u64>,

    /// Number of radiating segments
    #[arg(long)]
    segments: Option<usize>,

    /// Base address the clickable labels navigate under
    #[arg(long)]
    base_url: Option<String>,

    /// Start with the inverted (dark) color scheme
    #[arg(long)]
    dark: bool,

    /// Light rig (studio or accent)
    #[arg(long, value_enum)]
    lighting: Option<CliLightRig>,

    /// Compose the scene, print a summary and exit without a window
    #[arg(long)]
    headless: bool,

    /// Write the composed scene to a JSON file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config: SceneConfig = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open config file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("cannot parse config file {}", path.display()))?
        }
        None => SceneConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = cli.segments {
        config.segment_count = count;
    }
    if let Some(base) = cli.base_url {
        config.base_url = base;
    }
    if let Some(rig) = cli.lighting {
        config.lighting = rig.into();
    }
    if cli.dark {
        config.dark = true;
    }

    let model = SceneModel::compose(config).context("invalid scene configuration")?;

    if let Some(path) = &cli.export {
        let file = File::create(path)
            .with_context(|| format!("cannot create export file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &model.snapshot())
            .with_context(|| format!("cannot write export file {}", path.display()))?;
        log::info!("exported scene to {}", path.display());
    }

    if cli.headless {
        print_summary(&model);
        return Ok(());
    }

    app::run(model)
}

fn print_summary(model: &SceneModel) {
    println!("seed: {}", model.seed);
    println!(
        "segments: {} total, {} labelled",
        model.segments.len(),
        model.sites.len()
    );
    for site in &model.sites {
        println!(
            "  segment {:>2}: {} -> {}",
            site.segment_index,
            site.text,
            model.destination_url(&site.slug)
        );
    }
}
