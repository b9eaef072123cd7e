use anyhow::Context;
use clap::Parser;
use rica_permit::utils::logger;
use rica_permit::{CliConfig, FileConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose);
    tracing::info!("starting rica-permit v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &cli.config {
        let cfg = FileConfig::from_file(path)
            .with_context(|| format!("failed to load config file {path}"))?;
        cfg.validate().context("configuration is invalid")?;
        rica_permit::http::serve(&cfg).await?;
    } else {
        cli.validate().context("configuration is invalid")?;
        rica_permit::http::serve(&cli).await?;
    }

    Ok(())
}
