// src/handlers.rs
use crate::services::image_processor::OVERRIDE_EDGE;
use crate::services::layout;
use crate::services::storage::validate_product_id;
use crate::{AppState, errors::StudioError, models::*};
use actix_multipart::Multipart;
use actix_web::{Error, HttpResponse, web};
use bytes::BytesMut;
use futures_util::TryStreamExt;
use log::{info, warn};
use serde::Deserialize;
use uuid::Uuid;

const DEFAULT_FALLBACK_IMAGE: &str = "/placeholder.svg";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/palette/analyze", web::post().to(analyze_palette))
            .route("/design-spec", web::post().to(build_design_spec))
            .route("/layouts/resolve", web::get().to(resolve_layout))
            .route("/surfaces/{surface}/preview", web::post().to(generate_preview))
            .route("/surfaces/{surface}/final", web::post().to(generate_final))
            .route("/surfaces/{surface}/job", web::get().to(job_snapshot))
            .route("/surfaces/{surface}/cancel", web::post().to(cancel_job))
            .route("/generations/{job_id}", web::get().to(get_generation))
            .route(
                "/products/{product_id}/display-image",
                web::get().to(display_image),
            )
            .route(
                "/products/{product_id}/override",
                web::post().to(upload_override),
            )
            .route("/variations/invalidate", web::post().to(invalidate_variations)),
    );
}

#[derive(Debug, Deserialize)]
pub struct PaletteRequest {
    #[serde(default)]
    pub colors: Vec<String>,
    pub theme: Option<String>,
    pub mood: Option<String>,
}

pub async fn analyze_palette(
    data: web::Data<AppState>,
    body: web::Json<PaletteRequest>,
) -> Result<HttpResponse, Error> {
    let report = data.translator.analyze_hex(&body.colors);
    let theme = Theme::from_slug(body.theme.as_deref().unwrap_or_default());
    let mood = Mood::from_slug(body.mood.as_deref().unwrap_or_default());
    let prompt_section = data.translator.to_prompt_section(&report, theme, mood);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "report": report,
        "prompt_section": prompt_section
    })))
}

pub async fn build_design_spec(
    data: web::Data<AppState>,
    body: web::Json<DesignRequest>,
) -> Result<HttpResponse, Error> {
    let spec = data.builder.build(&body);
    Ok(HttpResponse::Ok().json(&spec))
}

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    pub name: String,
    pub fallback: Option<String>,
    pub mood: Option<String>,
}

pub async fn resolve_layout(query: web::Query<LayoutQuery>) -> Result<HttpResponse, Error> {
    let fallback = match (&query.fallback, &query.mood) {
        (Some(name), _) => {
            let name = name.trim().to_lowercase();
            *LayoutArchetype::ALL
                .iter()
                .find(|a| a.as_str() == name)
                .ok_or_else(|| {
                    StudioError::Validation(format!("Unknown fallback layout: {}", name))
                })?
        }
        (None, Some(mood)) => layout::default_for_mood(Mood::from_slug(mood)),
        (None, None) => LayoutArchetype::CenteredSerenity,
    };

    let archetype = layout::resolve(&query.name, fallback);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "layout": archetype,
        "description": archetype.description()
    })))
}

pub async fn generate_preview(
    path: web::Path<String>,
    data: web::Data<AppState>,
    body: web::Json<DesignSpec>,
) -> Result<HttpResponse, Error> {
    let surface = path.into_inner();
    let outcome = data
        .orchestrator
        .generate_preview(&surface, body.into_inner())
        .await?;
    outcome_response(&data, outcome).await
}

pub async fn generate_final(
    path: web::Path<String>,
    data: web::Data<AppState>,
    body: web::Json<DesignSpec>,
) -> Result<HttpResponse, Error> {
    let surface = path.into_inner();
    let outcome = data
        .orchestrator
        .generate_final(&surface, body.into_inner())
        .await?;
    outcome_response(&data, outcome).await
}

async fn outcome_response(data: &AppState, outcome: JobOutcome) -> Result<HttpResponse, Error> {
    match outcome {
        JobOutcome::Succeeded { job } => {
            if let Err(e) = data.generations.store_generation(&job).await {
                warn!("Failed to persist generation {}: {}", job.id, e);
            }

            let images: Vec<_> = job
                .images
                .iter()
                .map(|img| {
                    serde_json::json!({
                        "id": img.id,
                        "byte_len": img.byte_len,
                        "data_url": img.data_url()
                    })
                })
                .collect();

            Ok(HttpResponse::Ok().json(serde_json::json!({
                "status": JobStatus::Succeeded,
                "job_id": job.id,
                "count": images.len(),
                "images": images
            })))
        }
        JobOutcome::Failed {
            job_id,
            class,
            message,
        } => {
            warn!("Generation {} failed ({:?})", job_id, class);
            Err(StudioError::Generation { class, message }.into())
        }
        JobOutcome::Cancelled { job_id } => {
            info!("Generation {} ended without results", job_id);
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "status": JobStatus::Cancelled,
                "job_id": job_id
            })))
        }
    }
}

pub async fn job_snapshot(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let surface = path.into_inner();
    let job = data
        .orchestrator
        .snapshot(&surface)
        .await
        .ok_or_else(|| StudioError::NotFound(format!("No job on surface {}", surface)))?;

    Ok(HttpResponse::Ok().json(&job))
}

pub async fn cancel_job(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let cancelled = data.orchestrator.cancel(&path.into_inner()).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "cancelled": cancelled })))
}

pub async fn get_generation(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let job = data.generations.get_generation(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(&job))
}

#[derive(Debug, Deserialize)]
pub struct DisplayImageQuery {
    pub fallback: Option<String>,
    /// Answer from cache only, flagging a miss as still loading.
    #[serde(default)]
    pub peek: bool,
}

pub async fn display_image(
    path: web::Path<String>,
    data: web::Data<AppState>,
    query: web::Query<DisplayImageQuery>,
) -> Result<HttpResponse, Error> {
    let product_id = path.into_inner();
    let fallback = query.fallback.as_deref().unwrap_or(DEFAULT_FALLBACK_IMAGE);

    let resolved = if query.peek {
        data.resolver.peek(&product_id, fallback).await
    } else {
        data.resolver.resolve(&product_id, fallback).await
    };

    Ok(HttpResponse::Ok().json(&resolved))
}

pub async fn upload_override(
    path: web::Path<String>,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let product_id = path.into_inner();
    validate_product_id(&product_id)?;

    let mut image_data = None;
    while let Some(mut field) = payload.try_next().await? {
        if field.content_disposition().get_filename().is_none() {
            continue;
        }

        let mut buf = BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        image_data = Some(buf.freeze());
        break;
    }

    let image_data = image_data
        .ok_or_else(|| StudioError::Validation("No image file provided".to_string()))?;

    data.image_processor.validate_image(&image_data)?;
    let processed = data
        .image_processor
        .prepare_override(&image_data, OVERRIDE_EDGE)?;

    let url = data
        .object_store
        .put(&product_id, DisplayVariation::Digital, &processed)
        .await?;
    data.resolver.register_override(&product_id, url.clone()).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "product_id": product_id,
        "url": url,
        "size": processed.len()
    })))
}

pub async fn invalidate_variations(data: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let cache_buster = data.resolver.invalidate().await;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "cache_buster": cache_buster })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::color_theory::ColorTheoryTranslator;
    use crate::services::image_processor::ImageProcessor;
    use crate::services::orchestrator::{GenerationOrchestrator, OrchestratorSettings};
    use crate::services::prompt::ProviderRequest;
    use crate::services::provider::{ImageProvider, ProviderError};
    use crate::services::redis_service::GenerationStore;
    use crate::services::spec_builder::DesignSpecBuilder;
    use crate::services::storage::LocalObjectStore;
    use crate::services::variation_resolver::{
        ImageVariationResolver, VariationCache, VariationIndex,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct FixedProvider(Result<String, ProviderError>);

    #[async_trait]
    impl ImageProvider for FixedProvider {
        async fn generate(&self, _request: &ProviderRequest) -> Result<String, ProviderError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct MemoryGenerations(Mutex<HashMap<Uuid, GenerationJob>>);

    #[async_trait]
    impl GenerationStore for MemoryGenerations {
        async fn store_generation(&self, job: &GenerationJob) -> Result<(), StudioError> {
            self.0.lock().unwrap().insert(job.id, job.clone());
            Ok(())
        }

        async fn get_generation(&self, job_id: &Uuid) -> Result<GenerationJob, StudioError> {
            self.0
                .lock()
                .unwrap()
                .get(job_id)
                .cloned()
                .ok_or_else(|| StudioError::NotFound(job_id.to_string()))
        }
    }

    struct CanvasOnlyIndex;

    #[async_trait]
    impl VariationIndex for CanvasOnlyIndex {
        async fn find(
            &self,
            product_id: &str,
            _category: &str,
            variation: DisplayVariation,
        ) -> Result<Option<String>, StudioError> {
            Ok((variation == DisplayVariation::Canvas)
                .then(|| format!("https://cdn/{}/canvas.png", product_id)))
        }

        async fn find_any(
            &self,
            product_id: &str,
            _category: &str,
            _choices: &[DisplayVariation],
        ) -> Result<Option<(DisplayVariation, String)>, StudioError> {
            Ok(Some((
                DisplayVariation::Canvas,
                format!("https://cdn/{}/canvas.png", product_id),
            )))
        }
    }

    fn state(provider: Result<String, ProviderError>) -> AppState {
        let orchestrator = GenerationOrchestrator::new(
            Arc::new(FixedProvider(provider)),
            OrchestratorSettings {
                progress_tick: Duration::from_millis(5),
                progress_step: 5,
                ..Default::default()
            },
        );
        AppState {
            translator: Arc::new(ColorTheoryTranslator::new()),
            builder: Arc::new(DesignSpecBuilder::new()),
            orchestrator: Arc::new(orchestrator),
            resolver: Arc::new(ImageVariationResolver::with_cache(
                Arc::new(CanvasOnlyIndex),
                "affirmations",
                VariationCache::with_seed(1),
            )),
            generations: Arc::new(MemoryGenerations::default()),
            object_store: Arc::new(LocalObjectStore::new(std::env::temp_dir(), "")),
            image_processor: Arc::new(ImageProcessor::new()),
        }
    }

    fn ok_state() -> AppState {
        state(Ok("iVBORw0KGgo=".to_string()))
    }

    fn spec() -> DesignSpec {
        DesignSpecBuilder::new().build(&DesignRequest {
            theme: "confidence".to_string(),
            mood: "minimalist".to_string(),
            seed: Some(42),
            ..Default::default()
        })
    }

    #[actix_web::test]
    async fn analyze_palette_assigns_roles() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/palette/analyze")
            .set_json(serde_json::json!({ "colors": ["#1A1A1A", "#D4AF37", "#FFFFFF"] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["report"]["kind"], "palette");
        assert_eq!(body["report"]["colors"][0]["role"], "primary-text");
        assert_eq!(body["report"]["colors"][2]["role"], "background");
        assert_eq!(body["report"]["contrast"]["meets_aaa"], true);
    }

    #[actix_web::test]
    async fn empty_palette_reports_sentinel() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/palette/analyze")
            .set_json(serde_json::json!({ "colors": [] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["report"]["kind"], "no-custom-palette");
    }

    #[actix_web::test]
    async fn seeded_design_specs_are_identical() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/v1/design-spec")
                .set_json(serde_json::json!({ "theme": "confidence", "mood": "minimalist", "seed": 42 }))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            bodies.push(body);
        }
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[0]["supporting_phrases"].as_array().unwrap().len(), 6);
    }

    #[actix_web::test]
    async fn layout_resolution_uses_fallback() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/layouts/resolve?name=vintage")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["layout"], "arc-flow");

        let req = test::TestRequest::get()
            .uri("/api/v1/layouts/resolve?name=zzz&fallback=golden-spiral")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["layout"], "golden-spiral");

        let req = test::TestRequest::get()
            .uri("/api/v1/layouts/resolve?name=zzz&fallback=nonsense")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn preview_success_is_persisted() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/surfaces/builder/preview")
            .set_json(spec())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "succeeded");
        assert_eq!(body["count"], 4);
        assert!(body["images"][0]["data_url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));

        let job_id = body["job_id"].as_str().unwrap().to_string();
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/generations/{}", job_id))
            .to_request();
        let stored: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["status"], "succeeded");
        assert_eq!(stored["progress"], 100);
        assert_eq!(stored["images"].as_array().unwrap().len(), 4);

        let req = test::TestRequest::get()
            .uri("/api/v1/surfaces/builder/job")
            .to_request();
        let job: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(job["id"].as_str().unwrap(), job_id);
        assert!(job["images"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn malformed_spec_is_rejected_with_400() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let mut broken = spec();
        broken.supporting_phrases.clear();
        broken.palette_token.hex = vec!["#000000".to_string()];
        broken.constraints.dpi = 72;

        let req = test::TestRequest::post()
            .uri("/api/v1/surfaces/builder/final")
            .set_json(&broken)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error");

        let req = test::TestRequest::get()
            .uri("/api/v1/surfaces/builder/job")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn built_spec_is_accepted_for_final() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/surfaces/builder/final")
            .set_json(spec())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "succeeded");
        assert_eq!(body["count"], 4);
    }

    #[actix_web::test]
    async fn exhausted_quota_returns_402_advisory() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(Err(ProviderError {
                    status: Some(402),
                    message: "{\"error\":\"raw provider payload\"}".to_string(),
                }))))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/surfaces/builder/final")
            .set_json(spec())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYMENT_REQUIRED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["reason"], "quota-exhausted");
        assert!(!body["message"].as_str().unwrap().contains("raw provider payload"));
    }

    #[actix_web::test]
    async fn unknown_surface_and_generation_are_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ok_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/surfaces/nowhere/job")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/generations/{}", Uuid::new_v4()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/v1/surfaces/nowhere/cancel")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cancelled"], false);
    }

    #[actix_web::test]
    async fn display_image_prefers_override_then_index() {
        let state = ok_state();
        state
            .resolver
            .register_override("p-override", "/overrides/digital/p-override.png".to_string())
            .await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/products/p-override/display-image")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["url"], "/overrides/digital/p-override.png");
        assert_eq!(body["variation_type"], "digital");

        let req = test::TestRequest::get()
            .uri("/api/v1/products/p2/display-image?peek=true&fallback=/x.png")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["url"], "/x.png");
        assert_eq!(body["is_loading"], true);

        let req = test::TestRequest::get()
            .uri("/api/v1/products/p2/display-image")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["url"], "https://cdn/p2/canvas.png");
        assert_eq!(body["variation_type"], "canvas");

        let req = test::TestRequest::post()
            .uri("/api/v1/variations/invalidate")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cache_buster"], 1);
    }
}
