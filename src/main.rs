use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

fn main() -> Result<()> {
    init_tracing()?;

    for line in price_strategy::pricing::demo::run() {
        println!("{line}");
    }
    Ok(())
}
