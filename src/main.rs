//! Command-line entry point: load a network, then list, draw or export charts.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use tcc_plot::batch::{BatchOptions, render_all, render_one};
use tcc_plot::catalog::Catalog;
use tcc_plot::config::AppConfig;
use tcc_plot::io::{ExportFormat, load_catalog};

#[derive(Parser)]
#[command(name = "tcc-plot", version, about = "Time-current coordination charts for radial networks")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// CSV sheet with one row per bus or load; overrides `input.path`.
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// Built-in configuration preset (`default`, `reference`).
    #[arg(long, global = true)]
    preset: Option<String>,
    /// Directory for chart files; overrides `output.dir`.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
    /// Chart file format; overrides `output.format`.
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<ExportFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List buses and loads in input order.
    Items,
    /// Print the bus/load tree, whole or around one item.
    Tree { name: Option<String> },
    /// Render and save the chart of one item.
    Plot { name: String },
    /// Render and save the chart of every item.
    All,
    /// Browse charts in the terminal.
    #[cfg(feature = "tui")]
    Tui,
    /// Serve items, charts and trees over HTTP.
    #[cfg(feature = "api")]
    Serve {
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(format!("unknown format \"{other}\", expected csv or json")),
    }
}

fn main() -> ExitCode {
    // Respects RUST_LOG; info by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut cfg = match (&cli.config, &cli.preset) {
        (Some(path), _) => AppConfig::from_toml_file(path)?,
        (None, Some(name)) => AppConfig::from_preset(name)?,
        (None, None) => AppConfig::standard(),
    };
    if cli.config.is_some() {
        if let Some(name) = &cli.preset {
            cfg.input.preset = AppConfig::from_preset(name)?.input.preset;
        }
    }
    if let Some(path) = &cli.input {
        cfg.input.path = Some(path.clone());
        cfg.input.preset = None;
    }
    if let Some(dir) = &cli.output_dir {
        cfg.output.dir = dir.clone();
    }
    if let Some(format) = cli.format {
        cfg.output.format = format;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            error!("{e}");
        }
        bail!("{} configuration error(s)", errors.len());
    }
    Ok(cfg)
}

fn batch_options(cfg: &AppConfig) -> BatchOptions {
    BatchOptions {
        dir: cfg.output.dir.clone(),
        prefix: cfg.output.prefix.clone(),
        format: cfg.output.format,
        style: cfg.plot.style(),
    }
}

fn catalog(cfg: &AppConfig) -> Result<Catalog> {
    load_catalog(&cfg.input, &cfg.defaults.build_defaults()).context("loading network")
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(&cli)?;

    match cli.command {
        Command::Items => {
            for item in catalog(&cfg)?.items() {
                let kind = if item.is_load { "load" } else { "bus" };
                let sector = item.sector.as_deref().unwrap_or("-");
                let emergency = if item.emergency { "  emergency" } else { "" };
                println!("{:<24} {kind:<4} {sector}{emergency}", item.name);
            }
        }
        Command::Tree { name } => {
            print!("{}", catalog(&cfg)?.tree(name.as_deref())?);
        }
        Command::Plot { name } => {
            let path = render_one(&catalog(&cfg)?, &name, &batch_options(&cfg))
                .with_context(|| format!("rendering \"{name}\""))?;
            info!(path = %path.display(), "chart written");
        }
        Command::All => {
            let report = render_all(&catalog(&cfg)?, &batch_options(&cfg));
            let failed = report.failures().count();
            if failed > 0 && report.rendered() == 0 {
                bail!("no chart could be rendered ({failed} failures)");
            }
        }
        #[cfg(feature = "tui")]
        Command::Tui => {
            let app = tcc_plot::tui::runtime::App::new(cfg).context("loading network")?;
            tcc_plot::tui::run(app).context("terminal UI failed")?;
        }
        #[cfg(feature = "api")]
        Command::Serve { port } => {
            let state = std::sync::Arc::new(tcc_plot::api::AppState {
                catalog: catalog(&cfg)?,
                style: cfg.plot.style(),
            });
            let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
            let rt = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
            rt.block_on(tcc_plot::api::serve(state, addr))
                .with_context(|| format!("serving on {addr}"))?;
        }
    }
    Ok(())
}
