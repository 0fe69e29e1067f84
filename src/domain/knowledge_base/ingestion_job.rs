//! Ingestion job entity returned by the knowledge base ingestion API

use serde::{Deserialize, Serialize};

/// Lifecycle status of an ingestion job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IngestionJobStatus {
    Starting,
    InProgress,
    Complete,
    Failed,
    Stopping,
    Stopped,
    /// Status value this crate does not know about, kept verbatim
    Unknown(String),
}

impl IngestionJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Starting => "STARTING",
            Self::InProgress => "IN_PROGRESS",
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
            Self::Stopping => "STOPPING",
            Self::Stopped => "STOPPED",
            Self::Unknown(value) => value,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl From<&str> for IngestionJobStatus {
    fn from(value: &str) -> Self {
        match value {
            "STARTING" => Self::Starting,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETE" => Self::Complete,
            "FAILED" => Self::Failed,
            "STOPPING" => Self::Stopping,
            "STOPPED" => Self::Stopped,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for IngestionJobStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<IngestionJobStatus> for String {
    fn from(status: IngestionJobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for IngestionJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document counters reported for an ingestion job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionStatistics {
    pub number_of_documents_scanned: i64,
    pub number_of_new_documents_indexed: i64,
    pub number_of_modified_documents_indexed: i64,
    pub number_of_documents_deleted: i64,
    pub number_of_documents_failed: i64,
}

/// A single ingestion job as acknowledged by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionJob {
    pub knowledge_base_id: String,
    pub data_source_id: String,
    pub ingestion_job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: IngestionJobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<IngestionStatistics>,
    #[serde(default)]
    pub failure_reasons: Vec<String>,
    /// RFC 3339 timestamp
    pub started_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl IngestionJob {
    pub fn new(
        knowledge_base_id: impl Into<String>,
        data_source_id: impl Into<String>,
        ingestion_job_id: impl Into<String>,
        status: IngestionJobStatus,
    ) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            data_source_id: data_source_id.into(),
            ingestion_job_id: ingestion_job_id.into(),
            description: None,
            status,
            statistics: None,
            failure_reasons: Vec::new(),
            started_at: String::new(),
            updated_at: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_statistics(mut self, statistics: IngestionStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn with_failure_reasons(mut self, reasons: Vec<String>) -> Self {
        self.failure_reasons = reasons;
        self
    }

    pub fn with_timestamps(
        mut self,
        started_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.started_at = started_at.into();
        self.updated_at = updated_at.into();
        self
    }

    /// Human readable reason for a failed job
    pub fn failure_message(&self) -> String {
        if self.failure_reasons.is_empty() {
            format!(
                "Ingestion job {} failed without a reported reason",
                self.ingestion_job_id
            )
        } else {
            format!(
                "Ingestion job {} failed: {}",
                self.ingestion_job_id,
                self.failure_reasons.join("; ")
            )
        }
    }
}

/// Response of a start-ingestion-job call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionJobResponse {
    pub ingestion_job: IngestionJob,
}

impl IngestionJobResponse {
    pub fn new(ingestion_job: IngestionJob) -> Self {
        Self { ingestion_job }
    }

    pub fn status(&self) -> &IngestionJobStatus {
        &self.ingestion_job.status
    }
}
