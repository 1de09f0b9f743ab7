//! Structured logging configuration.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log level comes from `RUST_LOG` (default `info`). Records emitted through
/// the `log` facade by `card_round` are captured as well.
///
/// Output goes to stderr so stdout carries only selection events.
///
/// # Example
///
/// ```no_run
/// cr_server::logging::init();
/// tracing::info!("Server starting");
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a round notification with structured fields
pub fn log_notification(notification: &card_round::RoundNotification) {
    use card_round::RoundNotification as N;

    match notification {
        N::Dealt { hand_number } => tracing::info!(hand_number, "Hand dealt"),
        N::Selected {
            card,
            position,
            reason,
        } => tracing::info!(card = card.name(), position, %reason, "Card selected"),
        N::SessionExpired => tracing::info!("Decision window expired"),
        N::Paused => tracing::debug!("Countdown paused"),
        N::Resumed => tracing::debug!("Countdown resumed"),
        N::KickWarning { remaining_secs } => {
            tracing::warn!(remaining_secs, "Inactive, kick pending")
        }
        N::Kicked => tracing::warn!("Kicked for inactivity"),
        N::SessionEnded => tracing::info!("Session ended"),
    }
}
