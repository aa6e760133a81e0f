use dnsweep_domain::Config;
use std::io::IsTerminal;
use tracing::debug;

/// Logs go to stderr so stdout carries only sweep output.
pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(ansi_enabled(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}

/// Color codes only when a terminal will render them.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}
