use tracing::Level;

use crate::config::Config;

pub fn init_logger(config: &Config) {
    let level = if config.is_development() {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Lambda already timestamps every line it captures.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}
