use std::sync::Arc;

use genre_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogProvider, GoogleBooksProvider, Recommender, RecommenderSettings, TextModel},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // The service does not start without its model
    let model = TextModel::load(&config).await.map_err(|e| {
        tracing::error!(error = %e, "Error initializing model");
        anyhow::anyhow!("{}", e)
    })?;

    let provider: Arc<dyn CatalogProvider> = Arc::new(GoogleBooksProvider::new(
        config.catalog_api_url.clone(),
        config.catalog_api_key.clone(),
    ));
    let catalog = provider.name();
    let settings = RecommenderSettings::from(&config);

    tracing::info!(
        catalog,
        page_size = settings.page_size,
        candidate_pool_limit = settings.candidate_pool_limit,
        shortlist_size = settings.shortlist_size,
        "Recommender configured"
    );

    let state = AppState::new(Recommender::new(provider, settings), model, catalog);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
