// src/services/redis_service.rs
use crate::errors::StudioError;
use crate::models::*;
use crate::services::variation_resolver::VariationIndex;
use async_trait::async_trait;
use redis::aio::Connection;
use redis::{AsyncCommands, Client};
use uuid::Uuid;

const GENERATION_TTL_SECS: usize = 86400;

/// Archive of finished generation jobs.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    async fn store_generation(&self, job: &GenerationJob) -> Result<(), StudioError>;
    async fn get_generation(&self, job_id: &Uuid) -> Result<GenerationJob, StudioError>;
}

pub struct RedisService {
    client: Client,
}

impl RedisService {
    pub async fn new(redis_url: &str) -> Result<Self, StudioError> {
        let client = Client::open(redis_url).map_err(|e| StudioError::Redis(e.to_string()))?;

        let mut conn = client
            .get_async_connection()
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))?;

        Ok(Self { client })
    }

    async fn connection(&self) -> Result<Connection, StudioError> {
        self.client
            .get_async_connection()
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))
    }
}

#[async_trait]
impl GenerationStore for RedisService {
    /// Persists a finished job so its images can be fetched after the surface
    /// has moved on.
    async fn store_generation(&self, job: &GenerationJob) -> Result<(), StudioError> {
        let mut conn = self.connection().await?;

        let value =
            serde_json::to_string(job).map_err(|e| StudioError::Serialization(e.to_string()))?;

        conn.set_ex::<_, _, ()>(generation_key(&job.id), value, GENERATION_TTL_SECS)
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))?;

        Ok(())
    }

    async fn get_generation(&self, job_id: &Uuid) -> Result<GenerationJob, StudioError> {
        let mut conn = self.connection().await?;

        let value: Option<String> = conn
            .get(generation_key(job_id))
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))?;

        let value =
            value.ok_or_else(|| StudioError::NotFound(format!("Generation {}", job_id)))?;
        serde_json::from_str(&value).map_err(|e| StudioError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl VariationIndex for RedisService {
    async fn find(
        &self,
        product_id: &str,
        category: &str,
        variation: DisplayVariation,
    ) -> Result<Option<String>, StudioError> {
        let mut conn = self.connection().await?;
        conn.hget(variation_key(category, product_id), variation.as_str())
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))
    }

    async fn find_any(
        &self,
        product_id: &str,
        category: &str,
        choices: &[DisplayVariation],
    ) -> Result<Option<(DisplayVariation, String)>, StudioError> {
        if choices.is_empty() {
            return Ok(None);
        }
        let mut conn = self.connection().await?;

        let fields: Vec<&str> = choices.iter().map(|v| v.as_str()).collect();
        let urls: Vec<Option<String>> = redis::cmd("HMGET")
            .arg(variation_key(category, product_id))
            .arg(&fields)
            .query_async(&mut conn)
            .await
            .map_err(|e| StudioError::Redis(e.to_string()))?;

        Ok(choices
            .iter()
            .zip(urls)
            .find_map(|(variation, url)| url.map(|url| (*variation, url))))
    }
}

fn generation_key(job_id: &Uuid) -> String {
    format!("generation:{}", job_id)
}

/// Hash of variation type to image URL for one product.
fn variation_key(category: &str, product_id: &str) -> String {
    format!("product_images:{}:{}", category, product_id)
}
