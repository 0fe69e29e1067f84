//! Knowledge Base domain - Ingestion jobs and retrieve-and-generate

mod generation;
mod ingestion_job;
mod provider;

pub use generation::{GeneratedText, GenerationRequest, GenerationResult};
pub use ingestion_job::{
    IngestionJob, IngestionJobResponse, IngestionJobStatus, IngestionStatistics,
};
pub use provider::{IngestionClient, RetrievalClient};

#[cfg(test)]
pub use provider::{MockIngestionClient, MockRetrievalClient};
