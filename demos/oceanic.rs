//! Oceanic preset: deep blues, calm swell.
//!
//! Run with: `cargo run --example oceanic --release`

use dustorb::config::preset;
use dustorb::error::OrbError;

fn main() -> Result<(), OrbError> {
    tracing_subscriber::fmt::init();

    let oceanic = preset("oceanic").expect("built-in preset");
    dustorb::app::run((oceanic.config)())
}
