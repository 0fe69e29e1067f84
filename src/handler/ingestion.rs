//! Ingestion trigger - submits a re-indexing job for the configured data source

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use super::response::HandlerResponse;
use crate::config::KnowledgeBaseSettings;
use crate::domain::{DomainError, IngestionClient};

/// Starts an ingestion job and classifies the acknowledgment.
///
/// Responsibility ends at submission; the job is never polled.
pub struct IngestionTrigger {
    client: Arc<dyn IngestionClient>,
}

impl IngestionTrigger {
    pub fn new(client: Arc<dyn IngestionClient>) -> Self {
        Self { client }
    }

    /// Configuration errors are returned as `Err` and abort the invocation;
    /// service failures become a 500 response.
    pub async fn handle(
        &self,
        event: &Value,
        settings: &KnowledgeBaseSettings,
    ) -> Result<HandlerResponse, DomainError> {
        info!(%event, "Received ingestion trigger event");

        let settings = settings.ingestion()?;

        info!(
            knowledge_base_id = %settings.knowledge_base_id,
            data_source_id = %settings.data_source_id,
            "Starting ingestion job"
        );

        let response = match self
            .client
            .start_ingestion_job(&settings.knowledge_base_id, &settings.data_source_id)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error starting ingestion job");
                return Ok(HandlerResponse::error_json(e.to_string()));
            }
        };

        let job = &response.ingestion_job;
        info!(
            ingestion_job_id = %job.ingestion_job_id,
            status = %job.status,
            "Ingestion job response"
        );

        if response.status().is_failed() {
            let message = job.failure_message();
            warn!(reason = %message, "Ingestion job failed");
            return Ok(HandlerResponse::error_json(message));
        }

        match serde_json::to_string(&response) {
            Ok(body) => {
                info!("Ingestion job submitted");
                Ok(HandlerResponse::ok(body))
            }
            Err(e) => {
                let e = DomainError::serialization(e.to_string());
                error!(error = %e, "Failed to serialize ingestion job response");
                Ok(HandlerResponse::error_json(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::MockIngestionClient;
    use crate::domain::{IngestionJob, IngestionJobResponse, IngestionJobStatus};

    fn settings() -> KnowledgeBaseSettings {
        KnowledgeBaseSettings {
            knowledge_base_id: Some("kb-1".to_string()),
            data_source_id: Some("ds-1".to_string()),
            model_arn: None,
        }
    }

    fn job_response(status: IngestionJobStatus) -> IngestionJobResponse {
        IngestionJobResponse::new(
            IngestionJob::new("kb-1", "ds-1", "job-42", status)
                .with_timestamps("2024-05-01T10:00:00Z", "2024-05-01T10:00:00Z"),
        )
    }

    fn trigger(mock: MockIngestionClient) -> IngestionTrigger {
        IngestionTrigger::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_missing_data_source_fails_before_calling_service() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job().times(0);

        let settings = KnowledgeBaseSettings {
            data_source_id: None,
            ..settings()
        };

        let result = trigger(mock).handle(&Value::Null, &settings).await;

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_missing_knowledge_base_fails_before_calling_service() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job().times(0);

        let settings = KnowledgeBaseSettings {
            knowledge_base_id: Some(String::new()),
            ..settings()
        };

        let err = trigger(mock)
            .handle(&Value::Null, &settings)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("KNOWLEDGEBASEID"));
    }

    #[tokio::test]
    async fn test_complete_job_returns_serialized_response() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job()
            .withf(|kb, ds| kb == "kb-1" && ds == "ds-1")
            .times(1)
            .returning(|_, _| Ok(job_response(IngestionJobStatus::Complete)));

        let response = trigger(mock)
            .handle(&serde_json::json!({"source": "aws.s3"}), &settings())
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);

        let body: IngestionJobResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, job_response(IngestionJobStatus::Complete));
    }

    #[tokio::test]
    async fn test_in_progress_job_is_success() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job()
            .returning(|_, _| Ok(job_response(IngestionJobStatus::InProgress)));

        let response = trigger(mock)
            .handle(&Value::Null, &settings())
            .await
            .unwrap();

        assert!(response.is_success());

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["ingestionJob"]["status"], "IN_PROGRESS");
    }

    #[tokio::test]
    async fn test_failed_job_returns_500_with_reason() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job().returning(|_, _| {
            let mut response = job_response(IngestionJobStatus::Failed);
            response.ingestion_job.failure_reasons = vec!["Bucket not found".to_string()];
            Ok(response)
        });

        let response = trigger(mock)
            .handle(&Value::Null, &settings())
            .await
            .unwrap();

        assert_eq!(response.status_code, 500);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Ingestion job job-42 failed: Bucket not found");
    }

    #[tokio::test]
    async fn test_service_error_returns_500_with_message() {
        let mut mock = MockIngestionClient::new();
        mock.expect_start_ingestion_job().returning(|_, _| {
            Err(DomainError::provider(
                "bedrock-agent",
                "ConflictException: an ingestion job is already running",
            ))
        });

        let response = trigger(mock)
            .handle(&Value::Null, &settings())
            .await
            .unwrap();

        assert_eq!(response.status_code, 500);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("an ingestion job is already running"));
    }
}
