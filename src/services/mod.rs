// src/services/mod.rs
pub mod catalog;
pub mod color_theory;
pub mod image_processor;
pub mod layout;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod redis_service;
pub mod spec_builder;
pub mod storage;
pub mod variation_resolver;

pub use color_theory::ColorTheoryTranslator;
pub use image_processor::ImageProcessor;
pub use orchestrator::{GenerationOrchestrator, OrchestratorSettings};
pub use provider::HttpImageProvider;
pub use redis_service::{GenerationStore, RedisService};
pub use spec_builder::DesignSpecBuilder;
pub use storage::{LocalObjectStore, ObjectStore};
pub use variation_resolver::ImageVariationResolver;
