// Telegram Bot API adapter for the ChatApi port.
//
// Responsibilities
// - sendMessage for the greeting text, sendDocument (multipart) for
//   attachments.
// - Calls are blocking per request, sequential and unretried.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::config::TelegramConfig;
use crate::modules::notifier::ports::{ChatApi, ChatApiError};

const API_BASE: &str = "https://api.telegram.org";

pub struct TelegramChat {
    bot_token: String,
    chat_id: String,
    client: reqwest::Client,
}

impl TelegramChat {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{API_BASE}/bot{}/{method}", self.bot_token)
    }
}

#[async_trait]
impl ChatApi for TelegramChat {
    async fn send_text(&self, text: &str) -> Result<(), ChatApiError> {
        self.client
            .post(self.endpoint("sendMessage"))
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await
            .map_err(|e| ChatApiError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, path: &Path) -> Result<bool, ChatApiError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ChatApiError::Transport(format!("read {}: {e}", path.display())))?;
        let form = Form::new()
            .text("chat_id", self.chat_id.clone())
            .part("document", Part::bytes(bytes).file_name(path.display().to_string()));

        let response = self
            .client
            .post(self.endpoint("sendDocument"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ChatApiError::Transport(e.to_string()))?;

        Ok(response.status() == reqwest::StatusCode::OK)
    }
}
