//! Rijks collection client - Main Entry Point
//!
//! Wires the HTTP adapter, remote loader and paginator together, loads the
//! first batches of the collection feed and prints them as JSON.

mod config;

use rijks_application::use_cases::{BrowseCollection, PiecesPaginator};
use rijks_domain::{FeedState, LanguageResolutionPolicy};
use rijks_infrastructure::{
    RemotePiecesLoader, ReqwestHttpClient, SettingsRepository, to_json_stable,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let lookup = |name: &str| std::env::var(name).ok();
    let repository = config::settings_path(lookup)
        .map_or_else(SettingsRepository::new, SettingsRepository::with_path);
    let settings = repository.load().await?;
    let run = config::apply_env(settings, lookup)?;

    tracing::info!(
        collection = %run.settings.collection_url,
        batch_size = run.settings.effective_batch_size(),
        "Starting Rijks collection client v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ReqwestHttpClient::from_settings(&run.settings)?;
    let loader = RemotePiecesLoader::new(run.settings.collection_url.clone(), client);
    let paginator = PiecesPaginator::new(loader, LanguageResolutionPolicy::new())
        .with_batch_size(run.settings.effective_batch_size());
    let mut feed = BrowseCollection::new(paginator);

    if let FeedState::Error(message) = feed.load().await {
        return Err(message.clone().into());
    }

    for _ in 0..run.extra_pages {
        if !feed.has_more() {
            break;
        }
        feed.load_more().await;
    }

    let pieces = feed.state().pieces();
    tracing::info!(count = pieces.len(), more = feed.has_more(), "feed loaded");
    println!("{}", to_json_stable(&pieces)?);

    Ok(())
}
