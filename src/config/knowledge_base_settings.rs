//! Per-invocation knowledge base configuration read from the environment

use serde::Deserialize;

use crate::domain::DomainError;

pub const KNOWLEDGE_BASE_ID_VAR: &str = "KNOWLEDGEBASEID";
pub const DATA_SOURCE_ID_VAR: &str = "DATASOURCEID";
pub const MODEL_ARN_VAR: &str = "MODELARN";

/// Raw settings; every value may be absent until a handler requires it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KnowledgeBaseSettings {
    #[serde(default, rename = "knowledgebaseid", alias = "KNOWLEDGEBASEID")]
    pub knowledge_base_id: Option<String>,
    #[serde(default, rename = "datasourceid", alias = "DATASOURCEID")]
    pub data_source_id: Option<String>,
    #[serde(default, rename = "modelarn", alias = "MODELARN")]
    pub model_arn: Option<String>,
}

/// Validated settings for triggering ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionSettings {
    pub knowledge_base_id: String,
    pub data_source_id: String,
}

/// Validated settings for retrieve-and-generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalSettings {
    pub knowledge_base_id: String,
    pub model_arn: String,
}

impl KnowledgeBaseSettings {
    /// Read the current process environment
    pub fn load() -> Result<Self, DomainError> {
        Self::from_environment(config::Environment::default())
    }

    pub fn from_environment(environment: config::Environment) -> Result<Self, DomainError> {
        config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DomainError::configuration(format!("Failed to read environment: {}", e)))
    }

    pub fn ingestion(&self) -> Result<IngestionSettings, DomainError> {
        match (
            present(&self.knowledge_base_id),
            present(&self.data_source_id),
        ) {
            (Some(kb), Some(ds)) => Ok(IngestionSettings {
                knowledge_base_id: kb.to_string(),
                data_source_id: ds.to_string(),
            }),
            (kb, ds) => Err(missing_vars(&[
                (KNOWLEDGE_BASE_ID_VAR, kb.is_none()),
                (DATA_SOURCE_ID_VAR, ds.is_none()),
            ])),
        }
    }

    pub fn retrieval(&self) -> Result<RetrievalSettings, DomainError> {
        match (present(&self.knowledge_base_id), present(&self.model_arn)) {
            (Some(kb), Some(arn)) => Ok(RetrievalSettings {
                knowledge_base_id: kb.to_string(),
                model_arn: arn.to_string(),
            }),
            (kb, arn) => Err(missing_vars(&[
                (KNOWLEDGE_BASE_ID_VAR, kb.is_none()),
                (MODEL_ARN_VAR, arn.is_none()),
            ])),
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn missing_vars(vars: &[(&str, bool)]) -> DomainError {
    let missing: Vec<&str> = vars
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(name, _)| *name)
        .collect();

    DomainError::configuration(format!(
        "Environment variables must be set: {}",
        missing.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> KnowledgeBaseSettings {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        KnowledgeBaseSettings::from_environment(config::Environment::default().source(Some(source)))
            .unwrap()
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = settings(&[
            ("KNOWLEDGEBASEID", "kb-1"),
            ("DATASOURCEID", "ds-1"),
            ("MODELARN", "arn:aws:bedrock:us-east-1::foundation-model/anthropic.claude-v2"),
            ("UNRELATED", "ignored"),
        ]);

        assert_eq!(settings.knowledge_base_id.as_deref(), Some("kb-1"));
        assert_eq!(settings.data_source_id.as_deref(), Some("ds-1"));
        assert!(settings.model_arn.unwrap().starts_with("arn:aws:bedrock"));
    }

    #[test]
    fn test_ingestion_settings() {
        let settings = settings(&[("KNOWLEDGEBASEID", "kb-1"), ("DATASOURCEID", "ds-1")]);

        let ingestion = settings.ingestion().unwrap();

        assert_eq!(ingestion.knowledge_base_id, "kb-1");
        assert_eq!(ingestion.data_source_id, "ds-1");
    }

    #[test]
    fn test_ingestion_missing_data_source() {
        let settings = settings(&[("KNOWLEDGEBASEID", "kb-1")]);

        let err = settings.ingestion().unwrap_err();

        assert!(matches!(err, DomainError::Configuration { .. }));
        assert_eq!(
            err.to_string(),
            "Configuration error: Environment variables must be set: DATASOURCEID"
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let settings = settings(&[("KNOWLEDGEBASEID", ""), ("DATASOURCEID", "ds-1")]);

        let err = settings.ingestion().unwrap_err();

        assert!(err.to_string().ends_with("KNOWLEDGEBASEID"));
    }

    #[test]
    fn test_retrieval_reports_every_missing_variable() {
        let err = KnowledgeBaseSettings::default().retrieval().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Environment variables must be set: KNOWLEDGEBASEID, MODELARN"
        );
    }

    #[test]
    fn test_retrieval_does_not_need_data_source() {
        let settings = settings(&[("KNOWLEDGEBASEID", "kb-1"), ("MODELARN", "arn:model")]);

        let retrieval = settings.retrieval().unwrap();

        assert_eq!(retrieval.knowledge_base_id, "kb-1");
        assert_eq!(retrieval.model_arn, "arn:model");
    }
}
