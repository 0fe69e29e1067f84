//! Retrieve-and-generate request and result types

/// Prompt plus the knowledge base and model it should be answered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub knowledge_base_id: String,
    pub model_arn: String,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        knowledge_base_id: impl Into<String>,
        model_arn: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            knowledge_base_id: knowledge_base_id.into(),
            model_arn: model_arn.into(),
        }
    }
}

/// Text generated from retrieved knowledge base content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
}

/// Result of a retrieve-and-generate call
///
/// `output` mirrors the optional `output` block of the service response;
/// its absence is reported by the handler, not by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub output: Option<GeneratedText>,
    pub session_id: Option<String>,
    pub citation_count: usize,
}

impl GenerationResult {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            output: Some(GeneratedText { text: text.into() }),
            ..Default::default()
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_citation_count(mut self, count: usize) -> Self {
        self.citation_count = count;
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.output.as_ref().map(|o| o.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_present() {
        let result = GenerationResult::with_text("answer").with_session_id("session-1");

        assert_eq!(result.text(), Some("answer"));
        assert_eq!(result.session_id.as_deref(), Some("session-1"));
    }

    #[test]
    fn test_text_absent() {
        let result = GenerationResult::default().with_citation_count(2);

        assert_eq!(result.text(), None);
        assert_eq!(result.citation_count, 2);
    }
}
