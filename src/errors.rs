// src/errors.rs
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::FailureClass;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Redis error: {0}")]
    Redis(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{message}")]
    Generation { class: FailureClass, message: String },
}

impl ResponseError for StudioError {
    fn error_response(&self) -> HttpResponse {
        match self {
            StudioError::Redis(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error",
                "message": self.to_string()
            })),
            StudioError::ImageProcessing(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Image processing error",
                    "message": self.to_string()
                }))
            }
            StudioError::Serialization(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Data processing error",
                    "message": self.to_string()
                }))
            }
            StudioError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Validation error",
                "message": self.to_string()
            })),
            StudioError::Storage(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Storage error",
                "message": self.to_string()
            })),
            StudioError::Config(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Configuration error",
                "message": self.to_string()
            })),
            StudioError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "Not found",
                "message": self.to_string()
            })),
            // Only the advisory text reaches the client, never the provider payload.
            StudioError::Generation { class, message } => {
                let status = match class {
                    FailureClass::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
                    FailureClass::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                    FailureClass::Generic => StatusCode::SERVICE_UNAVAILABLE,
                };
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Generation failed",
                    "reason": class,
                    "message": message
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn error_to_response(err: StudioError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn quota_failure_maps_to_402_with_advisory_only() {
        let err = StudioError::Generation {
            class: FailureClass::QuotaExhausted,
            message: "Generation limit reached.".to_string(),
        };
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(json["reason"], "quota-exhausted");
        assert_eq!(json["message"], "Generation limit reached.");
    }

    #[actix_web::test]
    async fn rate_limit_failure_maps_to_429() {
        let err = StudioError::Generation {
            class: FailureClass::RateLimited,
            message: "slow down".to_string(),
        };
        let (status, _) = error_to_response(err).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[actix_web::test]
    async fn validation_maps_to_400() {
        let (status, json) =
            error_to_response(StudioError::Validation("bad field".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Validation error: bad field");
    }

    #[actix_web::test]
    async fn not_found_maps_to_404() {
        let (status, _) = error_to_response(StudioError::NotFound("job".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
