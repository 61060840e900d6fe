//! Heightmap studio
//!
//! Run with:
//! ```
//! cargo run -p heightmap-studio
//! ```

use heightmap_studio::{StudioConfig, command::HELP, run_session};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = StudioConfig::from_env();
    tracing::info!(
        "Starting heightmap studio (debounce {}ms, preview {})",
        config.debounce.as_millis(),
        config
            .preview_path
            .as_ref()
            .map_or_else(|| "disabled".to_string(), |p| p.display().to_string())
    );

    println!("{HELP}");
    run_session(config, BufReader::new(tokio::io::stdin())).await?;

    Ok(())
}
