//! vitals-tools: Core Web Vitals scoring and insights tool
//!
//! Fetches field data for one or more URLs, scores it, and renders
//! reports for terminals, spreadsheets and CI pipelines.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_tools::{
    cli,
    config::{file::CONFIG_FILE_NAMES, AppConfig, ConfigOverrides},
    crux::FormFactor,
    reports::ReportFormat,
};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nMetrics:",
        "\n  LCP, CLS, FCP, INP (Chrome UX Report field data, p75)",
        "\n\nOutput Formats:",
        "\n  summary, json, csv, text"
    )
}

#[derive(Parser)]
#[command(name = "vitals-tools")]
#[command(author)]
#[command(version, long_version = build_long_version())]
#[command(about = "Core Web Vitals scoring and insights tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  A URL scored below --min-score
    2  A URL failed to fetch (with --fail-on-fetch-error)
    3  Error occurred

EXAMPLES:
    # Score a single site
    vitals-tools analyze example.com

    # Compare several sites with recommendations
    vitals-tools compare example.com example.org --recommendations

    # CI gate on desktop field data
    vitals-tools analyze example.com --form-factor desktop --min-score 80 -o json

    # Export a CSV
    vitals-tools compare a.com b.com c.com -o csv -O vitals.csv")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Options shared by `analyze` and `compare`
#[derive(Args)]
struct SourceArgs {
    /// Output format [default: auto, which is summary on a terminal and json otherwise]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Chrome UX Report API key (mock data is used when absent)
    #[arg(long, env = "CRUX_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Use mock field data even if an API key is configured
    #[arg(long)]
    mock: bool,

    /// Device class to query
    #[arg(long, value_enum)]
    form_factor: Option<FormFactor>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum concurrent fetches
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Exit with code 1 if any URL's overall score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Exit with code 2 if any URL fails to fetch
    #[arg(long)]
    fail_on_fetch_error: bool,

    /// Show per-metric recommendations
    #[arg(long)]
    recommendations: bool,
}

impl SourceArgs {
    /// Collect the flags that were actually given on the command line.
    fn into_overrides(self, no_color: bool, quiet: bool) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key,
            force_mock: self.mock,
            form_factor: self.form_factor,
            timeout_secs: self.timeout,
            max_concurrent: self.max_concurrent,
            min_score: self.min_score,
            format: self.output,
            file: self.output_file,
            no_color,
            show_recommendations: self.recommendations,
            fail_on_fetch_error: self.fail_on_fetch_error,
            quiet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single URL
    Analyze {
        /// URL or origin to analyze
        url: String,

        #[command(flatten)]
        args: SourceArgs,
    },

    /// Score several URLs and summarize them side by side
    Compare {
        /// URLs or origins to compare
        #[arg(required = true, num_args = 2..)]
        urls: Vec<String>,

        #[command(flatten)]
        args: SourceArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .vitals-tools.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        quiet,
        no_color,
        config: config_path,
        command,
    } = Cli::parse();

    // Initialize logging
    let log_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match command {
        Commands::Analyze { url, args } => {
            let overrides = args.into_overrides(no_color, quiet);
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(config_path.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            let exit_code = cli::run_analyze(config, url)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Compare { urls, args } => {
            let overrides = args.into_overrides(no_color, quiet);
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(config_path.as_deref(), &overrides);
            if let Some(path) = loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            let exit_code = cli::run_compare(config, urls)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "vitals-tools", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = vitals_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (mut config, loaded_from) =
                    vitals_tools::config::load_or_default(config_path.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                if config.source.api_key.is_some() {
                    config.source.api_key = Some("********".to_string());
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("vitals-tools").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match vitals_tools::config::discover_config_file(config_path.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".vitals-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = vitals_tools::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
