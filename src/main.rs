use clap::{Parser, Subcommand};
use docnav::{CliSettings, config, manifest, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    if env!("DOCNAV_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("DOCNAV_GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Resolve documentation sidebar navigation against a base path")]
#[command(long_about = "\
Resolve documentation sidebar navigation against a base path

Reads docnav.toml from the source directory, checks every sidebar group,
joins each link with the deployment base path and writes the result as a
JSON manifest for the site engine.

Example docnav.toml:

  title = \"Angular - Zero to Hero\"
  base_url = \"${DOCS_BASE_PATH:-/angular-workshop-docs}\"

  [[sidebar]]
  label = \"Guides\"
  items = [{ label = \"Angular CLI\", link = \"guides/angular-cli/\" }]

  [[sidebar]]
  label = \"Reference\"
  autogenerate = { directory = \"reference\" }

Link resolution (base = /angular-workshop-docs):
  guides/angular-cli/                      → /angular-workshop-docs/guides/angular-cli/
  /angular-workshop-docs/guides/routing/   → unchanged
  {base}/guides/routing/                   → /angular-workshop-docs/guides/routing/
  https://github.com/...                   → unchanged

Run 'docnav gen-config' to print a documented docnav.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing docnav.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Base path override (replaces base_url from docnav.toml)
    #[arg(long, env = "DOCNAV_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Log config loading and resolution steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the sidebar and write the navigation manifest
    Resolve {
        /// Manifest output path
        #[arg(long, default_value = manifest::MANIFEST_FILE_NAME)]
        out: PathBuf,
    },
    /// Validate docnav.toml without writing anything
    Check,
    /// Print the resolved sidebar
    Show {
        /// Print the manifest JSON instead of the tree
        #[arg(long)]
        json: bool,

        /// Read a manifest written by `resolve` instead of docnav.toml
        #[arg(long)]
        manifest: Option<PathBuf>,
    },
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise RUST_LOG (default: warnings)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = CliSettings {
        base_url: cli.base_url.clone(),
    };

    match cli.command {
        Command::Resolve { out } => {
            let nav = load_manifest(&cli.source, &settings)?;
            manifest::write_manifest(&nav, &out)?;
            output::print_sidebar(&nav);
            output::print_written(&out);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.join(config::CONFIG_FILE_NAME).display());
            let nav = load_manifest(&cli.source, &settings)?;
            output::print_sidebar(&nav);
            println!("==> Navigation is valid");
        }
        Command::Show { json, manifest: saved } => {
            let nav = match saved {
                Some(path) => manifest::read_manifest(&path)?,
                None => load_manifest(&cli.source, &settings)?,
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&nav)?);
            } else {
                output::print_sidebar(&nav);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config in `source` and resolve it into a manifest.
fn load_manifest(
    source: &Path,
    settings: &CliSettings,
) -> Result<manifest::NavigationManifest, Box<dyn std::error::Error>> {
    let site_config = config::load_config_with(source, settings)?;
    Ok(manifest::build_manifest(&site_config)?)
}
