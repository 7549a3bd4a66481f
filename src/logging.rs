use std::env;

use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: warn by default, then info, then debug.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. Logs go to stderr so table/JSON/CSV output
/// on stdout stays clean. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let filter = env::var("RUST_LOG").map_or_else(
        |_| EnvFilter::new(format!("street_food_planner={}", level)),
        EnvFilter::new,
    );

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "debug");
    }
}
