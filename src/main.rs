//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run the
//! pipeline. No business logic here; traversal is delegated to CatalogueWalker.

use dotenv::dotenv;
use prophecy_deck::adapters::{FsImagePicker, JsonCatalogueLoader, JsonCorpusResolver, JsonDeck};
use prophecy_deck::domain::TransitionDefaults;
use prophecy_deck::ports::{CataloguePort, DeckPort, ImagePort, ScripturePort};
use prophecy_deck::usecases::{CatalogueWalker, DeckSession};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = prophecy_deck::shared::config::AppConfig::load().unwrap_or_default();

    let catalogue_path = required_path(cfg.catalogue_path.as_deref(), "PROPHECY_DECK_CATALOGUE_PATH")?;
    let images_dir = required_path(cfg.images_dir.as_deref(), "PROPHECY_DECK_IMAGES_DIR")?;
    let output_path = required_path(cfg.output_path.as_deref(), "PROPHECY_DECK_OUTPUT_PATH")?;
    let kjv_corpus = required_path(cfg.kjv_corpus.as_deref(), "PROPHECY_DECK_KJV_CORPUS")?;

    // --- Resolver: KJV required, Hebrew/Greek corpora optional extras ---
    let scripture: Arc<dyn ScripturePort> = Arc::new(
        JsonCorpusResolver::load(
            &kjv_corpus,
            cfg.tanach_corpus.as_deref().map(Path::new),
            cfg.greek_nt_corpus.as_deref().map(Path::new),
        )
        .await?,
    );

    let images: Arc<dyn ImagePort> = Arc::new(FsImagePicker::new());

    // --- Deck: blank by default, or append to an existing document ---
    let deck: Arc<dyn DeckPort> = if cfg.open_existing_or_default() {
        Arc::new(JsonDeck::open_existing(&output_path).await?)
    } else {
        Arc::new(JsonDeck::create(&output_path))
    };

    let session = DeckSession::initialize(Arc::clone(&deck), &TransitionDefaults::default()).await?;

    let loader = JsonCatalogueLoader::new();
    let catalogue = loader.load(&catalogue_path).await?;

    let max_prophecies = cfg.max_prophecies_or_default();
    let walker = CatalogueWalker::new(
        scripture,
        images,
        session.deck(),
        images_dir,
        max_prophecies,
    );
    let stats = walker.walk(&catalogue).await?;
    info!(
        slides = stats.slides_added,
        skipped = stats.references_skipped,
        "deck built"
    );

    session.finish().await?;
    Ok(())
}

fn required_path(value: Option<&str>, var: &str) -> anyhow::Result<PathBuf> {
    match value {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => anyhow::bail!("Set {} (env or .env)", var),
    }
}
