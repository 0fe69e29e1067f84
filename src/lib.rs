//! Knowledge Base Lambda handlers
//!
//! Two thin front doors over AWS Bedrock knowledge bases:
//! - `ingestion-trigger`: starts a re-indexing job for a data source
//! - `retrieval-chat`: answers a prompt with retrieve-and-generate

pub mod cli;
pub mod config;
pub mod domain;
pub mod handler;
pub mod infrastructure;

pub use config::AppConfig;
