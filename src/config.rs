// Process-wide configuration, read from the environment once at startup.
//
// Responsibilities
// - Resolve the bind address and the Telegram credentials.
// - Missing credentials are not a startup failure. They leave `telegram`
//   unset and surface as a config error when a delivery is requested.

use std::env;
use std::net::SocketAddr;

const ADDR_VAR: &str = "INVOICE_ASSISTANT_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = env::var(ADDR_VAR)
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()?;

        let telegram = match (env::var("TELEGRAM_BOT_TOKEN"), env::var("TELEGRAM_CHAT_ID")) {
            (Ok(bot_token), Ok(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        Ok(Self { addr, telegram })
    }
}
