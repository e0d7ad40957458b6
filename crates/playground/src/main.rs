//! Renders the playground screen and prints its render tree as JSON.
//!
//! Set `PLAYGROUND_CONFIG` to a JSON config file to change the defaults and
//! `RUST_LOG` to control log output (written to stderr).

use anyhow::{Context, Result};
use playground::{Playground, PlaygroundConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PlaygroundConfig::from_env().context("failed to load playground config")?;
    tracing::info!(
        min_input_length = config.min_input_length,
        modal_visible = config.initial_modal_visible,
        "rendering playground"
    );

    let json = Playground::new(config)
        .export()
        .context("failed to export render tree")?;
    println!("{json}");

    Ok(())
}
