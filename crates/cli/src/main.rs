mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "locale_pages=info";

#[derive(Parser)]
#[command(name = "locale-pages")]
#[command(version, about = "Static page generator for a fixed set of locales", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the routes generated at build time
    Routes {
        /// Print route parameters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a single page to stdout
    Render {
        /// Locale passed to the page; omitted means the page default (en)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Generate every page into the output directory
    Build {
        /// Output directory (overrides build.output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (default: ./locale-pages.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,
    },

    /// Check a built output directory against a fresh build
    Validate {
        /// Path to built output directory
        path: PathBuf,
    },

    /// Serve generated pages locally
    Preview {
        /// Port to serve on (overrides preview.port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (default: ./locale-pages.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Routes { json } => commands::routes::run(json),
        Command::Render { lang } => commands::render::run(lang),
        Command::Build {
            output,
            config,
            clean,
        } => commands::build::run(output, config, clean).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { port, config } => commands::preview::run(port, config).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "locale-pages", &mut io::stdout());
            Ok(())
        }
    }
}

/// `RUST_LOG` when set and valid, otherwise the default filter
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
