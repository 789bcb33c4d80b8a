// Port for the chat endpoint the notifier delivers to.
//
// Purpose
// - Keep the delivery flow independent of the concrete messaging API.
//
// Testing guidance
// - An in memory implementation lives in test_support for tests.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatApiError {
    #[error("chat transport: {0}")]
    Transport(String),
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), ChatApiError>;

    /// Sends one file as an attachment message. Returns true when the remote
    /// accepted it with HTTP 200.
    async fn send_document(&self, path: &Path) -> Result<bool, ChatApiError>;
}
