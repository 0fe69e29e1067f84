//! Uniform `{statusCode, body}` output of both handlers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    /// 500 with the message as a plain string body
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            body: message.into(),
        }
    }

    /// 500 with a `{"error": message}` JSON body
    pub fn error_json(message: impl Into<String>) -> Self {
        let body = serde_json::json!({ "error": message.into() });
        Self::internal_error(body.to_string())
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
