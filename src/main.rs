//! sbom-forge: SBOM generation from dependency manifests.
//!
//! Scans a repository's manifests and emits `CycloneDX` or SPDX documents.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_forge::cli::{run_generate, GenerateConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM Formats:",
        "\n  CycloneDX: 1.4 (JSON, XML)",
        "\n  SPDX:      2.3 (JSON)",
        "\n\nSupported Manifests:",
        "\n  go.mod, package.json, requirements*.txt"
    )
}

#[derive(Parser)]
#[command(name = "sbom-forge")]
#[command(version, long_version = build_long_version())]
#[command(about = "Generate SBOMs from dependency manifests", long_about = None)]
#[command(after_help = "EXAMPLES:
    # CycloneDX JSON for the current directory, to stdout
    sbom-forge generate

    # SPDX document for a specific repository checkout
    sbom-forge generate --path ./checkout --org acme --repo app \\
        --format spdx-json --commit $(git -C ./checkout rev-parse HEAD) \\
        --output sbom.spdx.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `generate` subcommand
#[derive(Parser)]
struct GenerateArgs {
    /// Directory to scan for dependency manifests
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Organization name recorded in the document
    #[arg(long)]
    org: Option<String>,

    /// Repository name (defaults to the scanned directory's basename)
    #[arg(long)]
    repo: Option<String>,

    /// Output format: cyclonedx-json, cyclonedx-xml, or spdx-json
    #[arg(short, long, default_value = "cyclonedx-json")]
    format: String,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Commit SHA recorded as the subject version
    #[arg(long, default_value = "")]
    commit: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and generate an SBOM
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
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

    match cli.command {
        Commands::Generate(args) => {
            let code = run_generate(GenerateConfig {
                path: args.path,
                org: args.org,
                repo: args.repo,
                format: args.format,
                output: args.output,
                commit: args.commit,
                quiet: cli.quiet,
            })?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
