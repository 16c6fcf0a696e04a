// src/main.rs
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use log::info;
use std::sync::Arc;

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use crate::config::Config;
use crate::services::storage::PUBLIC_PREFIX;
use crate::services::{
    ColorTheoryTranslator, DesignSpecBuilder, GenerationOrchestrator, GenerationStore,
    HttpImageProvider, ImageProcessor, ImageVariationResolver, LocalObjectStore, ObjectStore,
    OrchestratorSettings, RedisService,
};

/// Product category the storefront imagery is indexed under.
const VARIATION_CATEGORY: &str = "affirmations";

#[derive(Clone)]
pub struct AppState {
    translator: Arc<ColorTheoryTranslator>,
    builder: Arc<DesignSpecBuilder>,
    orchestrator: Arc<GenerationOrchestrator>,
    resolver: Arc<ImageVariationResolver>,
    generations: Arc<dyn GenerationStore>,
    object_store: Arc<dyn ObjectStore>,
    image_processor: Arc<ImageProcessor>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting affirmation studio...");

    let config = Config::from_env()?;

    let redis_service = Arc::new(RedisService::new(&config.redis_url).await?);
    let provider = Arc::new(HttpImageProvider::new(
        config.provider_api_key.clone(),
        config.provider_url.clone(),
        config.provider_model.clone(),
    ));
    let orchestrator = Arc::new(GenerationOrchestrator::new(
        provider,
        OrchestratorSettings {
            progress_tick: config.progress_tick,
            ..Default::default()
        },
    ));
    let resolver = Arc::new(ImageVariationResolver::new(
        redis_service.clone(),
        VARIATION_CATEGORY,
    ));

    let object_store = Arc::new(LocalObjectStore::new(
        &config.overrides_dir,
        config.public_base_url.clone(),
    ));
    for (product_id, url) in object_store.scan_overrides().await? {
        resolver.register_override(&product_id, url).await;
    }
    let overrides_root = object_store.root().to_path_buf();

    let app_state = AppState {
        translator: Arc::new(ColorTheoryTranslator::new()),
        builder: Arc::new(DesignSpecBuilder::new()),
        orchestrator,
        resolver,
        generations: redis_service,
        object_store,
        image_processor: Arc::new(ImageProcessor::new()),
    };

    info!("Starting HTTP server on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
            .service(actix_files::Files::new(PUBLIC_PREFIX, overrides_root.clone()))
            .route("/health", web::get().to(health_check))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "affirmation-studio",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
