//! Galaxy preset: violet dust, slow drift.
//!
//! Run with: `cargo run --example galaxy --release`

use dustorb::config::preset;
use dustorb::error::OrbError;

fn main() -> Result<(), OrbError> {
    tracing_subscriber::fmt::init();

    let galaxy = preset("galaxy").expect("built-in preset");
    dustorb::app::run((galaxy.config)())
}
