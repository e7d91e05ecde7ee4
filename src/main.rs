use clap::Parser;
use dotenvy::dotenv;
use fetch_to_s3::cli::Args;
use fetch_to_s3::config::TransferConfig;
use fetch_to_s3::infrastructure::{http, storage};
use fetch_to_s3::pipeline;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_to_s3=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let request = match args.into_request() {
        Ok(request) => request,
        Err(e) => {
            error!("❌ {e:#}");
            std::process::exit(1);
        }
    };

    let config = TransferConfig::from_env();
    let http_client = http::setup_http(&config)?;
    let storage_service = storage::setup_storage(&config, request.bucket.clone()).await;

    match pipeline::run(&request, &http_client, &storage_service, Path::new(".")).await {
        Ok(outcome) => {
            info!("🔗 Presigned URL:");
            println!("{}", outcome.signed_url);
            Ok(())
        }
        Err(e) => {
            error!("❌ {e}");
            std::process::exit(1);
        }
    }
}
