//! docsite CLI
//!
//! Serves, exports and link-checks the documentation site's derived documents.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docsite.
#[derive(Parser)]
#[command(
    name = "docsite",
    version,
    about = "Documentation site sitemap, llms.txt and link checking"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docsite.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve llms.txt, llms-full.txt and sitemap.xml
    Serve {
        /// Interface to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Write the derived documents to an output directory
    Build {
        /// Output directory (overrides build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Check that every internal link resolves to a page
    CheckLinks,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            docsite::cmd::serve::run(&cli.config, host.as_deref(), port).await?;
        }
        Commands::Build { output, base_url } => {
            docsite::cmd::build::run(&cli.config, output.as_deref(), base_url.as_deref())?;
        }
        Commands::CheckLinks => {
            return docsite::cmd::check::run(&cli.config);
        }
    }

    Ok(ExitCode::SUCCESS)
}
