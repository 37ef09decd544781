use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use simple_series::{config, filter::PostFilter, generate, output, scan};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that apply the publication filter.
#[derive(clap::Args, Clone)]
struct AsOfArgs {
    /// Reference time for the publication filter (default: now).
    /// Accepts RFC 3339 or YYYY-MM-DD.
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<DateTime<Utc>>,
}

impl AsOfArgs {
    fn now(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }
}

fn parse_as_of(raw: &str) -> Result<DateTime<Utc>, String> {
    scan::parse_date(raw).ok_or_else(|| format!("unrecognized date '{raw}'"))
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-series")]
#[command(about = "Series pages and navigation for static blogs")]
#[command(long_about = "\
Series pages and navigation for static blogs

Posts declare their series in front matter. Posts whose series names match
after normalization (case, spacing, punctuation) form one series, ordered by
series_order, then date, then id.

Content structure:

  content/
  ├── config.toml                      # Site config (optional)
  ├── series/
  │   └── building-a-coding-agent.md   # Series description (optional)
  ├── 2025-10-26-agent-loop.md         # Date prefix supplies the date
  └── notes/axum-routing.md            # Subdirectories are scanned too

Front matter:

  ---
  title: The Agent Loop
  date: 2025-10-26
  series: Building a Coding Agent
  series_order: 1
  draft: false
  ---

Run 'simple-series gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-series-temp", global = true)]
    temp_dir: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce series pages from the manifest
    Generate(AsOfArgs),
    /// Run the full pipeline: scan → generate
    Build(AsOfArgs),
    /// Show the series a build would produce, without writing anything
    Check(AsOfArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Scan => {
            init_thread_pool(&cli.source)?;
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate(as_of) => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.output, as_of.now())?;
            output::print_generate_output(&report);
        }
        Command::Build(as_of) => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            init_thread_pool(&cli.source)?;
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating series pages → {}", cli.output.display());
            let report = generate::generate_from_manifest(&manifest, &cli.output, as_of.now())?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check(as_of) => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let filter = PostFilter::from_config(&manifest.config.posts, as_of.now());
            output::print_series_output(&manifest, &filter);
            if manifest.skipped.is_empty() {
                println!("==> Content is valid");
            } else {
                println!("==> {} file(s) skipped", manifest.skipped.len());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize tracing. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("simple-series started with verbosity level: {}", verbose);
}

fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let manifest_path = temp_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&manifest_path, json)?;
    info!(path = %manifest_path.display(), posts = manifest.posts.len(), "wrote manifest");
    Ok(())
}

/// Initialize the rayon thread pool from the content root's processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(source: &Path) -> Result<(), config::ConfigError> {
    let site_config = config::load_config(source)?;
    let threads = config::effective_threads(&site_config.processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
    Ok(())
}
