//! Round robin calculator — entry point.
//!
//! Loads the slate from configuration, initialises structured logging,
//! evaluates every combination, and writes the report to stdout.

use anyhow::Result;
use tracing::{info, warn};

use roundrobin::config::{self, AppConfig};
use roundrobin::engine::RoundRobin;
use roundrobin::export::{self, StdoutSink};
use roundrobin::strategy::generator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let path = std::env::var("ROUNDROBIN_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_FILE.to_string());
    let cfg = AppConfig::load(&path)?;
    let sheet = cfg.team_sheet()?;

    let size = cfg.calculator.combination_size;
    let clamped = generator::clamp_size(size, sheet.len());
    if clamped != size {
        let available: Vec<usize> = sheet.available_sizes().iter().map(|o| o.size).collect();
        warn!(
            requested = size,
            using = clamped,
            available = ?available,
            "Combination size not available for this team count"
        );
    }

    info!(
        config = %path,
        teams = sheet.len(),
        size = clamped,
        risk = %cfg.calculator.risk,
        "Evaluating round robin"
    );

    let round_robin = sheet.evaluate(clamped, &cfg.calculator.risk);
    log_summary(&round_robin, &cfg.export.currency);

    let report = export::render(&round_robin, cfg.export.format, &cfg.export.currency)?;
    export::copy_report(&StdoutSink, &report).await;

    Ok(())
}

/// Log the aggregate and one line per combination.
fn log_summary(round_robin: &RoundRobin, currency: &str) {
    for (combination, result) in round_robin.results() {
        info!(
            teams = %combination.team_names(" + "),
            odds = format!("{:.2}", combination.total_odds),
            outcome = %combination.outcome,
            draws = combination.draw_count,
            result = format!("{currency}{:.2}", result),
            "Combination"
        );
    }

    let s = &round_robin.summary;
    info!(
        combinations = s.total_combinations,
        won = s.winning_combinations,
        lost = s.losing_combinations,
        pending = s.pending_combinations,
        stake = format!("{currency}{:.2}", s.per_combination_risk),
        win = format!("{currency}{:.2}", s.total_win),
        loss = format!("{currency}{:.2}", s.total_loss),
        net = format!("{currency}{:.2}", s.net_result),
        "Round robin summary"
    );
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roundrobin=info"));

    let json_logging = std::env::var("ROUNDROBIN_LOG_JSON").is_ok();

    // Logs go to stderr so the exported report owns stdout.
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
