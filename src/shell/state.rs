use std::sync::Arc;

use crate::config::Config;
use crate::modules::notifier::ports::ChatApi;
use crate::modules::notifier::telegram::TelegramChat;

/// Shared handler state, built once at startup. The chat endpoint stays
/// unset when no credentials were configured and the delivery operation
/// reports the config failure instead.
#[derive(Clone)]
pub struct AppState {
    pub chat: Option<Arc<dyn ChatApi>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let chat = config
            .telegram
            .as_ref()
            .map(|telegram| Arc::new(TelegramChat::new(telegram)) as Arc<dyn ChatApi>);
        Self { chat }
    }
}
