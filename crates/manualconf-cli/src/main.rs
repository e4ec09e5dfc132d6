//! CLI entry point - the composition root.
//!
//! This is the only place where real inputs (process environment,
//! filesystem, helper script) are wired into the core resolvers. Fatal
//! errors surface the underlying error verbatim and abort the build.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use manualconf_core::{
    BuildContext, DocConfig, ProcessEnv, THEME_PLACEHOLDER, VERSION_PLACEHOLDER, VersionProbe,
};

/// Command-line interface for the manual build's value resolver.
#[derive(Parser)]
#[command(name = "manualconf")]
#[command(about = "Resolve build-time values for the manual build")]
#[command(version)]
struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the release version and HTML theme for the renderer
    Resolve {
        /// Possibly-substituted version placeholder text
        #[arg(long, default_value = VERSION_PLACEHOLDER)]
        version_text: String,

        /// Possibly-substituted theme placeholder text
        #[arg(long, default_value = THEME_PLACEHOLDER)]
        theme_text: String,

        /// Helper script that computes the version (preprocessor deployments)
        #[arg(long, conflicts_with = "build_file")]
        version_script: Option<PathBuf>,

        /// Build-description file to parse (plain autoconf deployments)
        #[arg(long)]
        build_file: Option<PathBuf>,

        /// Directory holding bundled theme resources
        #[arg(long, default_value = "themes")]
        theme_root: PathBuf,

        /// Emit JSON instead of key = value lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Resolve {
            version_text,
            theme_text,
            version_script,
            build_file,
            theme_root,
            json,
        } => {
            let version_probe = match (version_script, build_file) {
                (Some(script), None) => VersionProbe::HelperScript(script),
                (None, Some(file)) => VersionProbe::BuildFile(file),
                _ => bail!("exactly one of --version-script or --build-file is required"),
            };

            let env = ProcessEnv;
            let config = DocConfig::resolve(&BuildContext {
                version_text: &version_text,
                theme_text: &theme_text,
                version_probe,
                theme_root,
                env: &env,
            })?;
            tracing::debug!(release = %config.release, theme = %config.html_theme, "resolved");

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{config}");
            }
        }
    }

    Ok(())
}
