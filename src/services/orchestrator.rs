// src/services/orchestrator.rs
// One live job per surface. Commits only land while the job's token is the
// surface's live token.

use crate::errors::StudioError;
use crate::models::*;
use crate::services::prompt::{PromptBuilder, ProviderRequest};
use crate::services::provider::{ImageProvider, ProviderError};
use base64::{Engine as _, engine::general_purpose};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Provider calls issued per job.
pub const FAN_OUT: usize = 4;

const PROGRESS_START: u8 = 10;
const PROGRESS_CEILING: u8 = 90;
const PROGRESS_SETTLED: u8 = 95;
const PROGRESS_DONE: u8 = 100;

const QUOTA_MESSAGE: &str =
    "Generation limit reached. Please check your account to continue creating.";
const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please wait a moment and try again.";
const PREVIEW_FAILED_MESSAGE: &str =
    "We're having trouble creating your preview. This usually resolves quickly - try again?";
const FINAL_FAILED_MESSAGE: &str = "We couldn't create your final images. Please try again.";

#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    /// Cadence of the cosmetic progress counter.
    pub progress_tick: Duration,
    pub progress_step: u8,
    /// Surfaces tracked before finished jobs are evicted.
    pub max_surfaces: usize,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            progress_tick: Duration::from_millis(1500),
            progress_step: 5,
            max_surfaces: 1024,
        }
    }
}

struct ActiveJob {
    job: GenerationJob,
    cancel: CancellationToken,
}

type Surfaces = Arc<RwLock<HashMap<String, ActiveJob>>>;

pub struct GenerationOrchestrator {
    provider: Arc<dyn ImageProvider>,
    prompts: PromptBuilder,
    settings: OrchestratorSettings,
    surfaces: Surfaces,
}

impl GenerationOrchestrator {
    pub fn new(provider: Arc<dyn ImageProvider>, settings: OrchestratorSettings) -> Self {
        Self {
            provider,
            prompts: PromptBuilder::new(),
            settings,
            surfaces: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn generate_preview(
        &self,
        surface: &str,
        spec: DesignSpec,
    ) -> Result<JobOutcome, StudioError> {
        self.run(surface, spec, GenerationKind::Preview).await
    }

    pub async fn generate_final(
        &self,
        surface: &str,
        spec: DesignSpec,
    ) -> Result<JobOutcome, StudioError> {
        self.run(surface, spec, GenerationKind::Final).await
    }

    /// Cancels the running job on `surface`. Returns false when nothing was
    /// running there.
    pub async fn cancel(&self, surface: &str) -> bool {
        let mut surfaces = self.surfaces.write().await;
        match surfaces.get_mut(surface) {
            Some(active) if is_live(active.job.status) => {
                active.cancel.cancel();
                mark_cancelled(&mut active.job);
                info!("Cancelled job {} on surface {}", active.job.id, surface);
                true
            }
            _ => false,
        }
    }

    /// Current state of the surface's most recent job. Finished jobs carry no
    /// images here; those travel with the outcome.
    pub async fn snapshot(&self, surface: &str) -> Option<GenerationJob> {
        self.surfaces
            .read()
            .await
            .get(surface)
            .map(|active| active.job.clone())
    }

    async fn run(
        &self,
        surface: &str,
        spec: DesignSpec,
        kind: GenerationKind,
    ) -> Result<JobOutcome, StudioError> {
        spec.validate()?;

        let job_id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let request = Arc::new(self.prompts.request_for(&spec, kind));

        {
            let mut surfaces = self.surfaces.write().await;
            if let Some(previous) = surfaces.get(surface) {
                if is_live(previous.job.status) {
                    info!(
                        "Job {} supersedes job {} on surface {}",
                        job_id, previous.job.id, surface
                    );
                    previous.cancel.cancel();
                }
            } else if surfaces.len() >= self.settings.max_surfaces {
                let before = surfaces.len();
                surfaces.retain(|_, active| is_live(active.job.status));
                debug!("Evicted {} finished surfaces", before - surfaces.len());
            }
            surfaces.insert(
                surface.to_string(),
                ActiveJob {
                    job: GenerationJob {
                        id: job_id,
                        surface: surface.to_string(),
                        kind,
                        spec,
                        status: JobStatus::Pending,
                        progress: 0,
                        images: Vec::new(),
                        message: None,
                        started_at: chrono::Utc::now(),
                        finished_at: None,
                    },
                    cancel: cancel.clone(),
                },
            );
        }
        let _settle = SettleOnDrop {
            surfaces: Arc::clone(&self.surfaces),
            surface: surface.to_string(),
            job_id,
        };

        self.commit(surface, job_id, |job| {
            job.status = JobStatus::Running;
            job.progress = PROGRESS_START;
        })
        .await;
        info!("Started {:?} job {} on surface {}", kind, job_id, surface);

        let settled = cancel.child_token();
        let calls = async {
            let results = self.fan_out(request, &cancel).await;
            settled.cancel();
            results
        };
        let (results, ()) = tokio::join!(calls, self.tick_progress(surface, job_id, &settled));

        let results = match results {
            Some(results) if !cancel.is_cancelled() => results,
            _ => {
                info!("Job {} on surface {} was cancelled", job_id, surface);
                return Ok(JobOutcome::Cancelled { job_id });
            }
        };

        self.commit(surface, job_id, |job| job.progress = PROGRESS_SETTLED)
            .await;

        let outcome = match aggregate(results, kind) {
            Ok(images) => {
                info!(
                    "Job {} produced {}/{} images",
                    job_id,
                    images.len(),
                    FAN_OUT
                );
                let finished = self
                    .commit(surface, job_id, |job| {
                        job.status = JobStatus::Succeeded;
                        job.progress = PROGRESS_DONE;
                        job.finished_at = Some(chrono::Utc::now());
                        job.clone()
                    })
                    .await;
                match finished {
                    Some(mut job) => {
                        job.images = images;
                        JobOutcome::Succeeded { job }
                    }
                    None => JobOutcome::Cancelled { job_id },
                }
            }
            Err((class, message)) => {
                warn!("Job {} failed on every call ({:?})", job_id, class);
                let committed = self
                    .commit(surface, job_id, |job| {
                        job.status = JobStatus::Failed;
                        job.message = Some(message.clone());
                        job.finished_at = Some(chrono::Utc::now());
                    })
                    .await;
                match committed {
                    Some(()) => JobOutcome::Failed {
                        job_id,
                        class,
                        message,
                    },
                    None => JobOutcome::Cancelled { job_id },
                }
            }
        };
        Ok(outcome)
    }

    /// Issues the provider calls as one task group. Returns `None` if the
    /// job is cancelled before every call has settled; outstanding calls are
    /// aborted in that case.
    async fn fan_out(
        &self,
        request: Arc<ProviderRequest>,
        cancel: &CancellationToken,
    ) -> Option<Vec<Result<GeneratedImage, ProviderError>>> {
        let mut calls = JoinSet::new();
        for _ in 0..FAN_OUT {
            let provider = Arc::clone(&self.provider);
            let request = Arc::clone(&request);
            calls.spawn(async move { provider.generate(&request).await });
        }

        let mut results = Vec::with_capacity(FAN_OUT);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    calls.abort_all();
                    return None;
                }
                next = calls.join_next() => match next {
                    Some(Ok(result)) => results.push(result.and_then(decode_image)),
                    Some(Err(e)) => results.push(Err(ProviderError::transport(format!(
                        "Provider task failed: {}",
                        e
                    )))),
                    None => break,
                }
            }
        }
        Some(results)
    }

    async fn tick_progress(&self, surface: &str, job_id: Uuid, settled: &CancellationToken) {
        loop {
            tokio::select! {
                _ = settled.cancelled() => break,
                _ = tokio::time::sleep(self.settings.progress_tick) => {
                    let step = self.settings.progress_step;
                    let live = self
                        .commit(surface, job_id, |job| {
                            job.progress = job.progress.saturating_add(step).min(PROGRESS_CEILING);
                        })
                        .await;
                    if live.is_none() {
                        break;
                    }
                }
            }
        }
    }

    /// Applies `apply` only while `job_id` is the surface's live job.
    async fn commit<F, R>(&self, surface: &str, job_id: Uuid, apply: F) -> Option<R>
    where
        F: FnOnce(&mut GenerationJob) -> R,
    {
        let mut surfaces = self.surfaces.write().await;
        match surfaces.get_mut(surface) {
            Some(active) if active.job.id == job_id && !active.cancel.is_cancelled() => {
                Some(apply(&mut active.job))
            }
            _ => None,
        }
    }
}

/// Marks the job cancelled if `run` is dropped before it settles, e.g. when
/// the caller goes away mid-request. No-op once the job is finished or
/// superseded.
struct SettleOnDrop {
    surfaces: Surfaces,
    surface: String,
    job_id: Uuid,
}

impl SettleOnDrop {
    fn settle(surfaces: &mut HashMap<String, ActiveJob>, surface: &str, job_id: Uuid) {
        if let Some(active) = surfaces.get_mut(surface) {
            if active.job.id == job_id && is_live(active.job.status) {
                active.cancel.cancel();
                mark_cancelled(&mut active.job);
                info!("Job {} on surface {} was abandoned", job_id, surface);
            }
        }
    }
}

impl Drop for SettleOnDrop {
    fn drop(&mut self) {
        if let Ok(mut surfaces) = self.surfaces.try_write() {
            Self::settle(&mut surfaces, &self.surface, self.job_id);
            return;
        }

        let surfaces = Arc::clone(&self.surfaces);
        let surface = std::mem::take(&mut self.surface);
        let job_id = self.job_id;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    let mut surfaces = surfaces.write().await;
                    Self::settle(&mut surfaces, &surface, job_id);
                });
            }
            Err(_) => warn!("Job {} dropped outside a runtime; left unsettled", job_id),
        }
    }
}

fn is_live(status: JobStatus) -> bool {
    matches!(status, JobStatus::Pending | JobStatus::Running)
}

fn mark_cancelled(job: &mut GenerationJob) {
    job.status = JobStatus::Cancelled;
    job.progress = 0;
    job.finished_at = Some(chrono::Utc::now());
}

fn decode_image(b64: String) -> Result<GeneratedImage, ProviderError> {
    let bytes = general_purpose::STANDARD
        .decode(b64.trim())
        .map_err(|e| ProviderError::transport(format!("Failed to decode image: {}", e)))?;
    if bytes.is_empty() {
        return Err(ProviderError::transport("Provider returned an empty image"));
    }
    Ok(GeneratedImage {
        id: Uuid::new_v4(),
        byte_len: bytes.len(),
        b64,
    })
}

/// Maps a provider failure to its class from the status code, falling back
/// to markers in the message text.
pub fn classify(error: &ProviderError) -> FailureClass {
    let message = error.message.to_lowercase();
    let mentions = |markers: &[&str]| markers.iter().any(|m| message.contains(m));

    if error.status == Some(402) || mentions(&["credits depleted", "payment", "quota"]) {
        FailureClass::QuotaExhausted
    } else if error.status == Some(429) || mentions(&["rate limit", "too many requests"]) {
        FailureClass::RateLimited
    } else {
        FailureClass::Generic
    }
}

pub fn advisory_message(class: FailureClass, kind: GenerationKind) -> &'static str {
    match (class, kind) {
        (FailureClass::QuotaExhausted, _) => QUOTA_MESSAGE,
        (FailureClass::RateLimited, _) => RATE_LIMIT_MESSAGE,
        (FailureClass::Generic, GenerationKind::Preview) => PREVIEW_FAILED_MESSAGE,
        (FailureClass::Generic, GenerationKind::Final) => FINAL_FAILED_MESSAGE,
    }
}

/// Splits settled calls into images and failures. Any image means success;
/// otherwise the most specific failure class picks the advisory message.
pub fn aggregate(
    results: Vec<Result<GeneratedImage, ProviderError>>,
    kind: GenerationKind,
) -> Result<Vec<GeneratedImage>, (FailureClass, String)> {
    let mut images = Vec::new();
    let mut worst: Option<FailureClass> = None;
    for result in results {
        match result {
            Ok(image) => images.push(image),
            Err(error) => {
                warn!("Provider call failed with status {:?}", error.status);
                let class = classify(&error);
                worst = Some(worst.map_or(class, |w| w.max(class)));
            }
        }
    }

    if images.is_empty() {
        let class = worst.unwrap_or(FailureClass::Generic);
        Err((class, advisory_message(class, kind).to_string()))
    } else {
        Ok(images)
    }
}
