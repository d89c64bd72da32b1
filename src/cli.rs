use crate::{
    config::Config,
    exec::SystemRunner,
    fleet, input,
    report::ImportReport,
    summary,
    util::{ensure_dir, now_rfc3339},
};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "opskit")]
#[command(about = "Operator toolkit: prospect-import report summaries + repository fleet bootstrap")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./opskit.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a prospect-import report.
    Summarize {
        /// Inline report JSON. Takes precedence over --file.
        #[arg(long)]
        json: Option<String>,
        /// Path to a report JSON file.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Clone, check out, and set up every repository in the manifest.
    Bootstrap {},
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let cfg = Config::load(&cfg_path)?;
    let _guard = init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Summarize { json, file } => summarize(json.as_deref(), file.as_deref()),
        Command::Bootstrap {} => bootstrap(&cfg),
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("opskit.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("opskit.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = resolve_log_path(cfg) {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn resolve_log_path(cfg: &Config) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }
    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }
    Some(PathBuf::from("opskit.log"))
}

fn summarize(json: Option<&str>, file: Option<&Path>) -> Result<()> {
    let value = input::resolve(json, file)?;
    let report = ImportReport::parse(value)?;
    let stats = summary::summarize(&report);

    println!("{}", report.status.as_str());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn bootstrap(cfg: &Config) -> Result<()> {
    if cfg.repos.is_empty() {
        return Err(anyhow!("no [repos.*] entries in config"));
    }

    let started = Instant::now();
    info!("fleet start {} repos={}", now_rfc3339(), cfg.repos.len());

    let runner = SystemRunner;
    let outcomes = fleet::bootstrap(&cfg.fleet, &runner, &cfg.repos);

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!("fleet settled ok={} failed={}", outcomes.len() - failed, failed);
    println!("Total time: {:.2?}", started.elapsed());

    // Partial failure is the expected steady state; the operator reads
    // the log to find what needs a manual re-run.
    Ok(())
}
