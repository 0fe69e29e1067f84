//! AWS Bedrock Knowledge Base clients

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_bedrockagent::Client as BedrockAgentClient;
use aws_sdk_bedrockagentruntime::Client as BedrockAgentRuntimeClient;
use aws_smithy_types::DateTime;
use aws_smithy_types::date_time::Format;

use crate::domain::knowledge_base::{
    GeneratedText, GenerationRequest, GenerationResult, IngestionClient, IngestionJob,
    IngestionJobResponse, IngestionJobStatus, IngestionStatistics, RetrievalClient,
};
use crate::domain::DomainError;

const INGESTION_PROVIDER: &str = "bedrock-agent";
const RETRIEVAL_PROVIDER: &str = "bedrock-agent-runtime";

/// Ingestion client backed by the Bedrock Agent control-plane API
#[derive(Clone)]
pub struct BedrockIngestionClient {
    client: BedrockAgentClient,
}

impl Debug for BedrockIngestionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockIngestionClient").finish()
    }
}

impl BedrockIngestionClient {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: BedrockAgentClient::new(aws_config),
        }
    }
}

#[async_trait]
impl IngestionClient for BedrockIngestionClient {
    async fn start_ingestion_job(
        &self,
        knowledge_base_id: &str,
        data_source_id: &str,
    ) -> Result<IngestionJobResponse, DomainError> {
        let response = self
            .client
            .start_ingestion_job()
            .knowledge_base_id(knowledge_base_id)
            .data_source_id(data_source_id)
            .send()
            .await
            .map_err(|e| {
                DomainError::provider(
                    INGESTION_PROVIDER,
                    format!(
                        "Failed to start ingestion job: {}",
                        aws_sdk_bedrockagent::error::DisplayErrorContext(&e)
                    ),
                )
            })?;

        let job = response.ingestion_job().ok_or_else(|| {
            DomainError::invalid_response("Missing key in response: 'ingestionJob'")
        })?;

        Ok(IngestionJobResponse::new(ingestion_job_from_sdk(job)))
    }
}

/// Retrieval client backed by the Bedrock Agent runtime API
#[derive(Clone)]
pub struct BedrockRetrievalClient {
    client: BedrockAgentRuntimeClient,
}

impl Debug for BedrockRetrievalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BedrockRetrievalClient").finish()
    }
}

impl BedrockRetrievalClient {
    pub fn new(aws_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: BedrockAgentRuntimeClient::new(aws_config),
        }
    }
}

#[async_trait]
impl RetrievalClient for BedrockRetrievalClient {
    async fn retrieve_and_generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, DomainError> {
        use aws_sdk_bedrockagentruntime::types::{
            KnowledgeBaseRetrieveAndGenerateConfiguration, RetrieveAndGenerateConfiguration,
            RetrieveAndGenerateInput, RetrieveAndGenerateType,
        };

        let input = RetrieveAndGenerateInput::builder()
            .text(request.prompt)
            .build()
            .map_err(|e| build_error("input", e))?;

        let kb_config = KnowledgeBaseRetrieveAndGenerateConfiguration::builder()
            .knowledge_base_id(request.knowledge_base_id)
            .model_arn(request.model_arn)
            .build()
            .map_err(|e| build_error("knowledge base configuration", e))?;

        let config = RetrieveAndGenerateConfiguration::builder()
            .r#type(RetrieveAndGenerateType::KnowledgeBase)
            .knowledge_base_configuration(kb_config)
            .build()
            .map_err(|e| build_error("retrieve-and-generate configuration", e))?;

        let response = self
            .client
            .retrieve_and_generate()
            .input(input)
            .retrieve_and_generate_configuration(config)
            .send()
            .await
            .map_err(|e| {
                DomainError::provider(
                    RETRIEVAL_PROVIDER,
                    format!(
                        "Retrieve and generate failed: {}",
                        aws_sdk_bedrockagentruntime::error::DisplayErrorContext(&e)
                    ),
                )
            })?;

        Ok(GenerationResult {
            output: response.output().map(|o| GeneratedText {
                text: o.text().to_string(),
            }),
            session_id: Some(response.session_id().to_string()),
            citation_count: response.citations().len(),
        })
    }
}

fn build_error(what: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::provider(RETRIEVAL_PROVIDER, format!("Failed to build {}: {}", what, e))
}

/// Convert the SDK ingestion job into the domain entity
fn ingestion_job_from_sdk(job: &aws_sdk_bedrockagent::types::IngestionJob) -> IngestionJob {
    let mut result = IngestionJob::new(
        job.knowledge_base_id(),
        job.data_source_id(),
        job.ingestion_job_id(),
        IngestionJobStatus::from(job.status().as_str()),
    )
    .with_failure_reasons(job.failure_reasons().to_vec())
    .with_timestamps(
        format_timestamp(job.started_at()),
        format_timestamp(job.updated_at()),
    );

    if let Some(description) = job.description() {
        result = result.with_description(description);
    }

    if let Some(stats) = job.statistics() {
        result = result.with_statistics(IngestionStatistics {
            number_of_documents_scanned: stats.number_of_documents_scanned(),
            number_of_new_documents_indexed: stats.number_of_new_documents_indexed(),
            number_of_modified_documents_indexed: stats.number_of_modified_documents_indexed(),
            number_of_documents_deleted: stats.number_of_documents_deleted(),
            number_of_documents_failed: stats.number_of_documents_failed(),
        });
    }

    result
}

fn format_timestamp(value: &DateTime) -> String {
    value
        .fmt(Format::DateTime)
        .unwrap_or_else(|_| value.secs().to_string())
}
