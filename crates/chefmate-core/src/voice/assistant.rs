//! Conversational assistant backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CompanionError, Result};

/// Answer returned by the assistant.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssistantReply {
    /// Text of the answer
    pub answer: String,

    /// Server-side synthesized audio clip, if one was produced. The filename
    /// must be deleted once playback finishes or errors.
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    #[serde(rename = "userText")]
    user_text: &'a str,
    #[serde(rename = "systemContent")]
    system_content: &'a str,
}

/// The assistant endpoint the dispatcher forwards unclassified utterances to.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Ask a question with a system-context string.
    async fn ask(&self, user_text: &str, system_content: &str) -> Result<AssistantReply>;

    /// Delete a server-side synthesized audio file after playback.
    async fn delete_audio(&self, filename: &str) -> Result<()>;
}

/// Assistant backend talking to the companion backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAssistant {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssistant {
    /// Create a backend rooted at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl AssistantBackend for HttpAssistant {
    async fn ask(&self, user_text: &str, system_content: &str) -> Result<AssistantReply> {
        let url = format!("{}/api/ask", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&AskRequest {
                user_text,
                system_content,
            })
            .send()
            .await
            .map_err(|e| CompanionError::assistant(format!("ask request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(CompanionError::assistant(format!(
                "ask request returned {}",
                response.status()
            )));
        }
        response
            .json::<AssistantReply>()
            .await
            .map_err(|e| CompanionError::assistant(format!("ask response is not valid JSON: {e}")))
    }

    async fn delete_audio(&self, filename: &str) -> Result<()> {
        let url = format!("{}/api/delete_audio/{filename}", self.base_url);
        self.client
            .delete(&url)
            .send()
            .await
            .map_err(|e| CompanionError::assistant(format!("audio cleanup failed: {e}")))?;
        Ok(())
    }
}
