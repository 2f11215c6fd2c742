//! studio-site: serve the site, or inspect how its carousels lay out.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studio_site::config::SiteConfig;
use studio_site::page::Page;
use studio_site::server;

#[derive(Parser)]
#[command(name = "studio-site", version, about = "Brows & sugaring studio website")]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true, env = "STUDIO_SITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP.
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory to serve.
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Load a page and print each carousel's card roles.
    Inspect {
        /// HTML file to load.
        page: PathBuf,
        /// Viewport width in CSS pixels.
        #[arg(long, default_value_t = 1280)]
        width: u32,
        /// Autoplay intervals to simulate after load.
        #[arg(long, default_value_t = 0)]
        ticks: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { host, port, root } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(root) = root {
                config.server.root = root;
            }
            server::serve(&config)
                .await
                .with_context(|| format!("serving {}", config.server.root.display()))?;
        }
        Command::Inspect { page, width, ticks } => {
            let source = std::fs::read_to_string(&page)
                .with_context(|| format!("reading {}", page.display()))?;
            let interval = config.carousel.autoplay_interval_ms;
            let mut page = Page::load(&source, config.carousel, config.viewport, width)?;

            println!("t=0ms\n{}", page.describe());
            for _ in 0..ticks {
                page.advance_by(interval);
                println!("\nt={}ms\n{}", page.now(), page.describe());
            }
        }
    }

    Ok(())
}
