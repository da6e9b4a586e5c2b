use anyhow::Context;
use clap::Parser;
use tb_tripadvisor::{Client, Config, LocationApi};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'k', long, help = "TripAdvisor partner API key.")]
    api_key: String,
    #[arg(short = 'l', long, help = "Location ID to fetch reviews for.")]
    location_id: i32,
    #[arg(
        short = 'e',
        long,
        help = "Base endpoint to use. Defaults to the 2.0 partner API."
    )]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut builder = Config::builder();
    builder.key(args.api_key);
    if let Some(endpoint) = args.endpoint {
        builder.endpoint(endpoint);
    }
    let config = builder.build().context("invalid configuration")?;

    let client = Client::new(config)?;
    let reviews = client
        .get_reviews(args.location_id)
        .await
        .with_context(|| format!("failed to fetch reviews for location {}", args.location_id))?;

    println!("{}", serde_json::to_string_pretty(&reviews)?);
    Ok(())
}
