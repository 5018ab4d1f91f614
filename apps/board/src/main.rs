use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use board::config::Config;
use board::models::session::SessionContext;
use board::pipeline::{notice_channel, style_for, BoardConfig, NoticeLevel, PipelineBoard};
use board::service::http::HttpCandidateService;

/// Loads the board for the configured scope and prints a stage-column
/// snapshot. The interactive drag surface lives in the dashboard frontend;
/// this binary wires the same core end to end from a terminal.
#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pipeline board v{}", env!("CARGO_PKG_VERSION"));

    let session = SessionContext {
        user_id: config.user_id.clone(),
        role: config.role,
        token: config.api_token.clone(),
    };
    let service = Arc::new(HttpCandidateService::new(&config.api_base_url, session)?);
    info!("Candidate service client initialized ({})", config.api_base_url);

    let (notices, mut notice_rx) = notice_channel();
    let board = PipelineBoard::new(
        BoardConfig {
            scope: config.scope(),
            role: config.role,
        },
        service,
        notices,
    );

    let count = board.load().await?;
    info!(count, role = ?config.role, "board ready");

    let style = style_for(config.role);
    for column in board.columns() {
        println!(
            "{} [{}] — {} candidate(s)",
            column.stage.label(),
            style.accent,
            column.candidates.len()
        );
        for candidate in &column.candidates {
            println!(
                "  - {} — {} ({} yrs)",
                candidate.full_name(),
                candidate.title,
                candidate.years_experience
            );
        }
    }

    while let Ok(notice) = notice_rx.try_recv() {
        match notice.level {
            NoticeLevel::Success => info!("{}", notice.message),
            NoticeLevel::Error => warn!("{}", notice.message),
        }
    }

    Ok(())
}
