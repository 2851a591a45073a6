use std::sync::Arc;

use quriosity::{
    app::{Action, AppController},
    config::Config,
    services::{providers::TmdbProvider, CatalogAggregator, SessionGate},
    storage::FileStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(FileStore::new(&config.storage_dir));
    let gate = SessionGate::new(store, config.auth());
    let provider = Arc::new(TmdbProvider::new(config.catalog()));
    let aggregator = CatalogAggregator::new(provider, config.trending_keyword.clone());

    let mut controller = AppController::new(gate, aggregator);
    controller.start().await;

    if !controller.state().authenticated() {
        controller
            .dispatch(Action::SignIn {
                email: config.authorized_email.clone(),
                password: config.authorized_password.clone(),
            })
            .await;
    }

    if let Some(error) = &controller.state().sign_in_error {
        println!("Sign-in failed: {}", error);
        return Ok(());
    }

    let state = controller.state();
    if let Some(email) = &state.user_email {
        println!("Signed in as {}", email);
    }
    if let Some(featured) = &state.featured {
        println!(
            "Featured: {} ({:.1})",
            featured.title, featured.vote_average
        );
        if let Some(url) = featured.backdrop_url(&config.backdrop_base_url, &config.image_base_url)
        {
            println!("  Artwork: {}", url);
        }
    }
    for (category, items) in state.categories.rows() {
        println!("{}: {} titles", category, items.len());
    }

    controller
        .dispatch(Action::Search {
            query: config.trending_keyword.clone(),
        })
        .await;
    let state = controller.state();
    println!(
        "Search '{}': {} results",
        config.trending_keyword,
        state.search_results.len()
    );

    let sample_id = state
        .search_results
        .first()
        .or_else(|| state.categories.trending.first())
        .map(|item| item.id);
    if let Some(id) = sample_id {
        match controller.trailer_for(id).await {
            Some(key) => println!("Trailer: {}", key.embed_url()),
            None => println!("Trailer: none available"),
        }
    }

    Ok(())
}
