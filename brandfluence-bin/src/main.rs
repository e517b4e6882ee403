use brandfluence_common::BFAppContext;
use brandfluence_error::{BFError, BFResult};
use brandfluence_models::constants::DEFAULT_CONFIG_FILE_NAME;
use brandfluence_storage::BFDbManager;
use brandfluence_web::BFWebServer;
use clap::Parser;
use std::{env::current_dir, path::PathBuf};

/// Brandfluence - influencer marketplace backend
///
/// Serves the brand, influencer, campaign and payment API over HTTP,
/// backed by a single SQLite database.
#[derive(Parser)]
#[command(name = "brandfluence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brandfluence marketplace server", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, the server looks for 'brandfluence.toml'
    /// in the current working directory.
    #[arg(short, long, env = "BF_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> BFResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| BFError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx =
        BFAppContext::init::<BFDbManager, BFWebServer>(config_path.to_string_lossy().to_string())
            .await?;

    ctx.run().await
}
