//! Configuration loading

mod app_config;
mod knowledge_base_settings;

pub use app_config::{AppConfig, AwsConfig, LogFormat, LoggingConfig};
pub use knowledge_base_settings::{
    DATA_SOURCE_ID_VAR, IngestionSettings, KNOWLEDGE_BASE_ID_VAR, KnowledgeBaseSettings,
    MODEL_ARN_VAR, RetrievalSettings,
};
