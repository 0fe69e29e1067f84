//! Domain layer - Core entities, ports and errors

pub mod error;
pub mod knowledge_base;

pub use error::DomainError;
pub use knowledge_base::{
    GeneratedText, GenerationRequest, GenerationResult, IngestionClient, IngestionJob,
    IngestionJobResponse, IngestionJobStatus, IngestionStatistics, RetrievalClient,
};
