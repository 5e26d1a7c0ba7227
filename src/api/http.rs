use super::{ApiError, ApiResult, WellnessApi};
use crate::config::Config;
use crate::types::{ChatMessage, Quest, Role};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const QUEST_PATH: &str = "/api/quest/today";
const CHAT_PATH: &str = "/api/chat";

/// One prior turn in the shape the chat endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub parts: Vec<String>,
}

impl From<&ChatMessage> for HistoryTurn {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role,
            parts: vec![msg.text.clone()],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub chat_history: Vec<HistoryTurn>,
}

impl<'a> ChatRequest<'a> {
    pub fn new(message: &'a str, history: &[ChatMessage]) -> Self {
        Self {
            message,
            chat_history: history.iter().map(HistoryTurn::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// [`WellnessApi`] over plain HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            base_url: config.api_url.clone(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Reject non-success responses, keeping the body for diagnostics.
async fn read_body(response: reqwest::Response) -> ApiResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WellnessApi for HttpApi {
    async fn today_quest(&self) -> ApiResult<Quest> {
        let url = self.endpoint(QUEST_PATH);
        debug!(%url, "fetching today's quest");
        let response = self.client.get(&url).send().await?;
        let body = read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn chat(&self, message: &str, history: &[ChatMessage]) -> ApiResult<String> {
        let url = self.endpoint(CHAT_PATH);
        debug!(%url, history = history.len(), "sending chat message");
        let response = self
            .client
            .post(&url)
            .json(&ChatRequest::new(message, history))
            .send()
            .await?;
        let body = read_body(response).await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed.reply)
    }
}
