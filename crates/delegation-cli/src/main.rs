// File: crates/delegation-cli/src/main.rs
// Summary: Loads a delegation CSV and figure config, then renders each configured figure to PNG.

mod logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use delegation_core::{load_records_csv, Delegation, Figure, FigureConfig, FigureSpec, PanelKind, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "delegation-chart", about = "Render Olympic delegation infographics to PNG")]
struct Cli {
    /// Per-year records (CSV with a header row).
    #[arg(short, long)]
    data: PathBuf,

    /// Figure configuration (TOML). Built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory receiving `<figure>.png` files.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Render only the named figures (repeatable).
    #[arg(short, long = "figure")]
    figures: Vec<String>,

    /// Render a single ad-hoc figure with these panels, e.g. `medals,athletes`.
    #[arg(long, value_delimiter = ',')]
    panels: Vec<PanelKind>,

    /// Country name used in captions; overrides the config.
    #[arg(long)]
    country: Option<String>,

    /// Draw medal tiles without sport icons (ignore the tag columns).
    #[arg(long)]
    no_icons: bool,

    /// Skip all text (useful for pixel comparisons).
    #[arg(long)]
    no_labels: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(country) = &cli.country {
        cfg.country = country.clone();
    }
    if cli.no_labels {
        cfg.render.draw_labels = false;
    }

    let mut records = load_records_csv(&cli.data)
        .with_context(|| format!("failed to load records '{}'", cli.data.display()))?;
    tracing::info!(rows = records.len(), path = %cli.data.display(), "loaded records");
    if records.is_empty() {
        anyhow::bail!("no rows in '{}'; check the header and delimiter", cli.data.display());
    }
    if cli.no_icons {
        for r in &mut records {
            r.gold_sports.clear();
            r.silver_sports.clear();
            r.bronze_sports.clear();
        }
    }
    let delegation = Delegation::new(cfg.country.clone(), records);

    let specs = select_figures(&cfg, cli)?;
    let opts = RenderOptions::from_config(&cfg.render);
    for spec in &specs {
        let figure = Figure::from_config(&delegation, &cfg, spec)
            .with_context(|| format!("figure '{}'", spec.name))?;
        let out = cli.out_dir.join(format!("{}.png", spec.name));
        figure
            .render_to_png(&opts, &out)
            .with_context(|| format!("rendering '{}'", out.display()))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<FigureConfig> {
    match path {
        Some(p) => {
            let cfg = FigureConfig::from_path(p).with_context(|| format!("failed to read config '{}'", p.display()))?;
            tracing::debug!(path = %p.display(), figures = cfg.figures.len(), "loaded config");
            Ok(cfg)
        }
        None => {
            tracing::debug!("no config given; using built-in defaults");
            Ok(FigureConfig::default())
        }
    }
}

/// `--panels` wins over `--figure`; an empty `--figure` list keeps every configured figure.
fn select_figures(cfg: &FigureConfig, cli: &Cli) -> Result<Vec<FigureSpec>> {
    if !cli.panels.is_empty() {
        let name = cli.figures.first().cloned().unwrap_or_else(|| "custom".to_string());
        return Ok(vec![FigureSpec { name, panels: cli.panels.clone(), arrow: cli.panels.contains(&PanelKind::Athletes) }]);
    }
    if cli.figures.is_empty() {
        return Ok(cfg.figures.clone());
    }
    cli.figures
        .iter()
        .map(|name| {
            cfg.figure(name)
                .cloned()
                .with_context(|| format!("no figure named '{name}' in config"))
        })
        .collect()
}
