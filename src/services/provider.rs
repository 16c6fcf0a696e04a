// src/services/provider.rs
use crate::services::prompt::ProviderRequest;
use crate::models::GenerationKind;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

/// Failure reported by the image provider. `status` is absent when the call
/// never produced an HTTP response.
#[derive(Error, Debug, Clone)]
#[error("provider failure (status {status:?}): {message}")]
pub struct ProviderError {
    pub status: Option<u16>,
    pub message: String,
}

impl ProviderError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Black box that turns one request into one base64 encoded image.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, request: &ProviderRequest) -> Result<String, ProviderError>;
}

pub struct HttpImageProvider {
    api_key: String,
    endpoint: String,
    model: String,
    client: Client,
}

impl HttpImageProvider {
    pub fn new(api_key: String, endpoint: String, model: String) -> Self {
        Self {
            api_key,
            endpoint,
            model,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ImageProvider for HttpImageProvider {
    async fn generate(&self, request: &ProviderRequest) -> Result<String, ProviderError> {
        let (size, quality) = match request.kind {
            GenerationKind::Preview => ("1024x1024", "standard"),
            GenerationKind::Final => ("1024x1792", "hd"),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "prompt": request.prompt,
                "n": 1,
                "size": size,
                "quality": quality,
                "response_format": "b64_json"
            }))
            .send()
            .await
            .map_err(|e| ProviderError::transport(format!("Image generation request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError {
                status: Some(status.as_u16()),
                message: error_text,
            });
        }

        let result: serde_json::Value = response.json().await.map_err(|e| {
            ProviderError::transport(format!("Failed to parse generation response: {}", e))
        })?;

        extract_image_b64(&result)
            .ok_or_else(|| ProviderError::transport("No image data in response"))
    }
}

/// Accepts both the images API shape (`data[0].b64_json`) and the chat
/// gateway shape that returns a data URL.
fn extract_image_b64(result: &serde_json::Value) -> Option<String> {
    if let Some(b64) = result["data"][0]["b64_json"].as_str() {
        return Some(b64.to_string());
    }
    let url = result["choices"][0]["message"]["images"][0]["image_url"]["url"].as_str()?;
    match url.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:image/") => Some(data.to_string()),
        _ => Some(url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_images_api_payload() {
        let body = json!({ "data": [{ "b64_json": "aGVsbG8=" }] });
        assert_eq!(extract_image_b64(&body).as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn extracts_gateway_data_url() {
        let body = json!({
            "choices": [{ "message": { "images": [{ "image_url": { "url": "data:image/png;base64,aGk=" } }] } }]
        });
        assert_eq!(extract_image_b64(&body).as_deref(), Some("aGk="));
    }

    #[test]
    fn missing_image_yields_none() {
        assert!(extract_image_b64(&json!({ "data": [] })).is_none());
    }
}
