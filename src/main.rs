//! machlog main entrypoint.

use tracing_subscriber::EnvFilter;

fn main() {
    // Process-wide logging setup happens exactly once, here; the
    // aggregation core itself carries no global state.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("machlog=warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = machlog::run() {
        machlog::ui::messages::error(&e);
        std::process::exit(1);
    }
}
