//! Knowledge base client factory

use std::sync::Arc;

use crate::domain::knowledge_base::{IngestionClient, RetrievalClient};

use super::aws::{BedrockIngestionClient, BedrockRetrievalClient};

/// Factory for creating knowledge base clients from a shared AWS configuration
#[derive(Debug)]
pub struct KnowledgeBaseClientFactory;

impl KnowledgeBaseClientFactory {
    /// Load the AWS SDK configuration, optionally pinned to a region
    pub async fn load_sdk_config(region: Option<&str>) -> aws_config::SdkConfig {
        if let Some(region) = region {
            aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(region.to_string()))
                .load()
                .await
        } else {
            aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await
        }
    }

    pub fn create_ingestion(aws_config: &aws_config::SdkConfig) -> Arc<dyn IngestionClient> {
        Arc::new(BedrockIngestionClient::new(aws_config))
    }

    pub fn create_retrieval(aws_config: &aws_config::SdkConfig) -> Arc<dyn RetrievalClient> {
        Arc::new(BedrockRetrievalClient::new(aws_config))
    }
}
