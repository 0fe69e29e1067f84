//! Invocation handlers

mod chat;
mod ingestion;
mod response;

pub use chat::RetrievalChatHandler;
pub use ingestion::IngestionTrigger;
pub use response::HandlerResponse;
