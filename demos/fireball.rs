//! Fireball preset: hot oranges, strong repulsion.
//!
//! Run with: `cargo run --example fireball --release`

use dustorb::config::preset;
use dustorb::error::OrbError;

fn main() -> Result<(), OrbError> {
    tracing_subscriber::fmt::init();

    let fireball = preset("fireball").expect("built-in preset");
    dustorb::app::run((fireball.config)())
}
