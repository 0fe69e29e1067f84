//! Retrieval chat - answers a prompt from the configured knowledge base

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use super::response::HandlerResponse;
use crate::config::KnowledgeBaseSettings;
use crate::domain::{DomainError, GenerationRequest, RetrievalClient};

const PROMPT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct ChatEvent {
    #[serde(default)]
    prompt: Option<String>,
}

/// Forwards a prompt to retrieve-and-generate and returns the text verbatim.
pub struct RetrievalChatHandler {
    client: Arc<dyn RetrievalClient>,
}

impl RetrievalChatHandler {
    pub fn new(client: Arc<dyn RetrievalClient>) -> Self {
        Self { client }
    }

    /// Missing configuration or a missing `prompt` abort the invocation.
    /// The success body is the generated text itself, not JSON.
    pub async fn handle(
        &self,
        event: &Value,
        settings: &KnowledgeBaseSettings,
    ) -> Result<HandlerResponse, DomainError> {
        let settings = settings.retrieval()?;
        let prompt = extract_prompt(event)?;

        info!(prompt = %preview(&prompt), "Received user prompt");

        let request =
            GenerationRequest::new(prompt, settings.knowledge_base_id, settings.model_arn);

        let result = match self.client.retrieve_and_generate(request).await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Retrieve and generate failed");
                return Ok(HandlerResponse::internal_error(e.to_string()));
            }
        };

        info!(
            session_id = result.session_id.as_deref().unwrap_or("-"),
            citations = result.citation_count,
            "Retrieve and generate response"
        );

        match result.text() {
            Some(text) => {
                info!(response = %preview(text), "Generated response");
                Ok(HandlerResponse::ok(text))
            }
            None => {
                let e = DomainError::invalid_response("Missing key in response: 'output.text'");
                error!(error = %e, "Generated text missing");
                Ok(HandlerResponse::internal_error(e.to_string()))
            }
        }
    }
}

fn extract_prompt(event: &Value) -> Result<String, DomainError> {
    let event = ChatEvent::deserialize(event)
        .map_err(|e| DomainError::invalid_event(e.to_string()))?;

    event
        .prompt
        .ok_or_else(|| DomainError::missing_field("prompt"))
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PROMPT_PREVIEW_CHARS).collect();

    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
