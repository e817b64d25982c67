use dustorb::config::{preset, OrbConfig};
use dustorb::error::OrbError;

fn main() -> Result<(), OrbError> {
    tracing_subscriber::fmt::init();

    // Optional preset name as the first argument, e.g. `dustorb fireball`
    let config = std::env::args()
        .nth(1)
        .and_then(|name| preset(&name))
        .map(|p| (p.config)())
        .unwrap_or_else(OrbConfig::default);

    dustorb::app::run(config)
}
