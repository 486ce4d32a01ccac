use teloxide::{prelude::Requester, types::ChatId, Bot};

use crate::domain::{errors::AppError, ports::reply_sink::ReplySink};

/// Sends replies through the Bot API `sendMessage` method.
#[derive(Clone)]
pub struct TelegramRepository {
    bot: Bot,
}

impl TelegramRepository {
    /// `api_url` is the Bot API base, e.g. `https://api.telegram.org`.
    pub fn new(token: &str, api_url: &str) -> Result<Self, AppError> {
        let api_url: url::Url = api_url
            .parse()
            .map_err(|e| AppError::InvalidData(format!("telegram api url {api_url}: {e}")))?;
        Ok(Self {
            bot: Bot::new(token).set_api_url(api_url),
        })
    }
}

impl ReplySink for TelegramRepository {
    async fn reply(&self, chat_id: Option<i64>, text: &str) -> Result<(), AppError> {
        let chat_id = chat_id
            .ok_or_else(|| AppError::InvalidData("update has no chat to reply to".to_string()))?;

        if let Err(e) = self.bot.send_message(ChatId(chat_id), text).await {
            tracing::error!(chat_id, error = %e, "sendMessage was refused");
            return Err(e.into());
        }

        tracing::debug!(chat_id, "reply delivered");
        Ok(())
    }
}
