//! Knowledge base service ports

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::generation::{GenerationRequest, GenerationResult};
use super::ingestion_job::IngestionJobResponse;
use crate::domain::error::DomainError;

/// Starts re-indexing jobs for a knowledge base data source
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IngestionClient: Send + Sync {
    /// Submits an ingestion job; returns once the service acknowledges it
    async fn start_ingestion_job(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> Result<IngestionJobResponse, DomainError>;
}

/// Answers prompts using documents retrieved from a knowledge base
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RetrievalClient: Send + Sync {
    async fn retrieve_and_generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, DomainError>;
}
