//! Client side of the Kelvin API.
//!
//! Views talk to the backend through [`WellnessApi`] so the transport can be
//! swapped for an in-process double in tests.
//!
//! # Usage
//!
//! ```rust,no_run
//! use kelvin::api::{HttpApi, WellnessApi};
//! use kelvin::config::Config;
//!
//! # async fn example() -> kelvin::api::ApiResult<()> {
//! let api = HttpApi::new(&Config::load());
//! let quest = api.today_quest().await?;
//! println!("{}", quest.text);
//! # Ok(())
//! # }
//! ```
mod http;

pub use http::{ChatRequest, ChatResponse, HistoryTurn, HttpApi};

use crate::types::{ChatMessage, Quest};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Kelvin API error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait WellnessApi {
    /// `GET /api/quest/today`
    async fn today_quest(&self) -> ApiResult<Quest>;

    /// `POST /api/chat`. `history` holds the turns before `message`.
    async fn chat(&self, message: &str, history: &[ChatMessage]) -> ApiResult<String>;
}
