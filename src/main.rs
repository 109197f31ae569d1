mod cli;

use crate::cli::app::App;
use animal_tables::render::{html, render_text};
use animal_tables::web::{AppState, build_router};
use animal_tables::{AppConfig, RecordingInteraction, Session, open_session};
use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "animal-tables")]
#[command(about = "Categorized animal tables you can add to, edit, delete from and sort")]
struct Cli {
    /// JSON seed file replacing the built-in tables
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Unit shown after sizes
    #[arg(long, global = true)]
    size_unit: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Serve the tables as an HTML page
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the seeded tables once
    Render {
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);
    init_tracing(cli.log_file.as_ref(), matches!(command, Command::Tui))?;

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config = config.seed_file(seed);
    }
    if let Some(unit) = cli.size_unit.as_deref() {
        config = config.size_unit(unit);
    }

    let mut startup = RecordingInteraction::default();
    let session = open_session(&config, &mut startup).context("failed to load tables")?;

    match command {
        Command::Tui => {
            let mut app = App::new(session, startup.reports);
            app.run().map_err(|e| anyhow!("terminal error: {e}"))?;
        }
        Command::Serve { host, port } => {
            if let Some(host) = host.as_deref() {
                config = config.host(host);
            }
            if let Some(port) = port {
                config = config.port(port);
            }
            serve(&config, session, startup.reports).await?;
        }
        Command::Render { format, out } => {
            for report in &startup.reports {
                eprintln!("{}", report);
            }
            let output = render(&session, format)?;
            match out {
                Some(path) => fs::write(&path, output)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{}", output),
            }
        }
    }

    Ok(())
}

fn render(session: &Session, format: Format) -> Result<String> {
    let views = session.render_all();
    Ok(match format {
        Format::Html => html::render_page(&views, &[]),
        Format::Text => views.iter().map(render_text).collect::<Vec<_>>().join("\n"),
        Format::Json => serde_json::to_string_pretty(&views)?,
    })
}

async fn serve(config: &AppConfig, session: Session, notices: Vec<String>) -> Result<()> {
    let app = build_router(AppState::with_notices(session, notices));

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "animal tables page server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Logs go to `log_file` when given. Without one the terminal UI stays
/// silent, since stderr shares the screen with the alternate buffer.
fn init_tracing(log_file: Option<&PathBuf>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("animal_tables=info,tower_http=info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "unable to install Ctrl+C signal handler");
        std::future::pending::<()>().await;
    }
}
