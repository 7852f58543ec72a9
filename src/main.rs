use clap::{Parser, Subcommand};
use sitenav::{config, output};
use std::path::PathBuf;

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
#[command(name = "sitenav")]
#[command(about = "Validate and normalize documentation site navigation")]
#[command(long_about = "\
Validate and normalize documentation site navigation

Reads the site title, nav bar, sidebar and repository settings from one or
more config files, checks them, and prints the normalized result.

Config files:

  sitenav.toml                     # TOML, snake_case keys
  config.json                      # JSON, also accepts the host's camelCase keys

  --config a.toml --config b.toml  # b.toml overrides a.toml

Checks, in order (first failure wins):
  1. title and description are set
  2. every nav item has a label and a /path or absolute URL
  3. every sidebar section has a title and a path
  4. sidebar paths are unique
  5. sidebar_depth is not negative

Run 'sitenav gen-config' to generate a documented sitenav.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file; repeat to layer overrides
    #[arg(long = "config", default_value = "sitenav.toml", global = true)]
    configs: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the config and print the navigation inventory
    Check,
    /// Print the normalized config as JSON
    Normalize {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print a stock sitenav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", describe_sources(&cli.configs));
            let normalized = config::load_and_normalize(&cli.configs)?;
            output::print_normalized(&normalized);
            output::print_warnings(&normalized.warnings());
            println!("==> Config is valid");
        }
        Command::Normalize { compact } => {
            let normalized = config::load_and_normalize(&cli.configs)?;
            let json = if compact {
                serde_json::to_string(&normalized)?
            } else {
                serde_json::to_string_pretty(&normalized)?
            };
            println!("{}", json);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Render the config file list for the stage banner.
fn describe_sources(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}
