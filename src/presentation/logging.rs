//! Logging setup

use anyhow::anyhow;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given flags
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber: stderr, no timestamps, colour only on a
/// terminal. `RUST_LOG` takes precedence over the flags.
pub fn init_logging(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_then_verbosity_escalates() {
        assert_eq!(default_directive(0, true), "warn");
        assert_eq!(default_directive(0, false), "info");
        assert_eq!(default_directive(1, false), "debug");
        assert_eq!(default_directive(3, false), "trace");
    }
}
