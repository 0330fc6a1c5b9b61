//! Major Event Log - Binary Entry Point
//!
//! `serve` (the default) runs the HTTP server; `record` adds an event to the
//! database from the command line.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing::info;

use major_event_log::utils::parse_submitted_date;
use major_event_log::{
    create_router, AppConfig, AppState, EventRepository, NewEvent, Outcome, SqliteEventRepository,
};

#[derive(Parser)]
#[command(name = "major-event-log")]
#[command(about = "Record and publish major preservation events", version)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "MAJOR_EVENT_LOG_DATABASE")]
    database: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, global = true, env = "MAJOR_EVENT_LOG_BIND")]
    bind: Option<SocketAddr>,

    /// Absolute site root used in feed and export links
    #[arg(long, global = true, env = "MAJOR_EVENT_LOG_SITE_URL")]
    site_url: Option<String>,

    /// Events per page on the index and the feed
    #[arg(long, global = true, env = "MAJOR_EVENT_LOG_PAGE_SIZE")]
    page_size: Option<NonZeroUsize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Record a new event
    Record {
        #[arg(long)]
        title: String,
        #[arg(long)]
        detail: String,
        /// `Success`, `Failure` or a full outcome URI
        #[arg(long)]
        outcome: Outcome,
        #[arg(long)]
        outcome_detail: String,
        /// When the event happened; defaults to now
        #[arg(long, value_parser = parse_date)]
        date: Option<DateTime<Utc>>,
        #[arg(long)]
        contact_name: String,
        #[arg(long)]
        contact_email: String,
    },
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_submitted_date(raw).ok_or_else(|| format!("unrecognised date: {raw}"))
}

impl Cli {
    fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(site_url) = &self.site_url {
            config.feed.site_url = site_url.clone();
        }
        if let Some(page_size) = self.page_size {
            config.index_page_size = page_size;
            config.feed.page_size = page_size;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("major_event_log=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let repo = SqliteEventRepository::open(&config.database)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(repo, config).await,
        Command::Record {
            title,
            detail,
            outcome,
            outcome_detail,
            date,
            contact_name,
            contact_email,
        } => {
            let event = repo.create_event(NewEvent {
                title,
                detail,
                outcome,
                outcome_detail,
                date: date.unwrap_or_else(Utc::now),
                contact_name,
                contact_email,
            })?;
            info!(id = %event.id, "event recorded");
            println!("{}", serde_json::to_string_pretty(&event)?);
            Ok(())
        }
    }
}

async fn serve(repo: SqliteEventRepository, config: AppConfig) -> anyhow::Result<()> {
    let bind = config.bind;
    let site_url = config.feed.site_url.clone();
    let state = Arc::new(AppState::new(Arc::new(repo), config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(%bind, %site_url, "major event log listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Shutting down...");
}
