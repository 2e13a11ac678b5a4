use chrono::Datelike;
use clap::{Parser, Subcommand};
use heatmap_manifest::{config, manifest, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "heatmap-manifest")]
#[command(about = "Generate a manifest for github*.svg heatmap files")]
#[command(long_about = "\
Generate a manifest for github*.svg heatmap files

Scans the assets directory for the aggregate heatmap and per-year heatmaps,
then writes a JSON manifest a web page can use to pick the right SVG.

Assets structure:

  assets/
  ├── github.svg           # Aggregate heatmap, required (\"Total\")
  ├── github_2023.svg      # One file per year, exactly four digits
  └── github_2024.svg

Naming and the base URL can also come from a config file passed with
--config (prefix, total_label, base_url).

The default year is the current year when its file exists, else the newest
year, else \"Total\".

Run 'heatmap-manifest gen-config' to print a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing github.svg and github_YYYY.svg
    #[arg(long, default_value = "assets", global = true)]
    assets_dir: PathBuf,

    /// Manifest output path
    #[arg(long, default_value = "assets/github_manifest.json", global = true)]
    output: PathBuf,

    /// Absolute base URL for direct file URLs (overrides config)
    #[arg(long, default_value = "", global = true)]
    base_url: String,

    /// Config file (default: none, stock settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the assets directory and write the manifest (default)
    Generate,
    /// Scan and show the manifest without writing it
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), manifest::ManifestError> {
    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let manifest_config = load_config(cli.config.as_deref(), &cli.base_url)?;
            manifest::generate(&cli.assets_dir, &cli.output, &manifest_config, current_year())?;
            output::print_write_output(&cli.output);
        }
        Command::Check => {
            let manifest_config = load_config(cli.config.as_deref(), &cli.base_url)?;
            let built = manifest::prepare(&cli.assets_dir, &manifest_config, current_year())?;
            output::print_check_output(&built, &cli.assets_dir);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Resolve the config file and apply the `--base-url` override.
fn load_config(
    explicit: Option<&Path>,
    base_url: &str,
) -> Result<config::ManifestConfig, config::ConfigError> {
    Ok(config::load_config(explicit)?.with_base_url_override(base_url))
}

/// Calendar year in local time, used for default-year selection.
fn current_year() -> i32 {
    chrono::Local::now().year()
}
