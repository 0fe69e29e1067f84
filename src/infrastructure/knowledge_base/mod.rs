//! Knowledge base infrastructure - AWS Bedrock clients

mod aws;
mod factory;

pub use aws::{BedrockIngestionClient, BedrockRetrievalClient};
pub use factory::KnowledgeBaseClientFactory;
