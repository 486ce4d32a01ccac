use std::collections::HashMap;

use teloxide::utils::command::parse_command;

use crate::domain::{errors::AppError, ports::reply_sink::ReplySink, telegram::Update};

/// Static command table: command name to fixed reply.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    replies: HashMap<String, String>,
    username: Option<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, name: &str, reply: &str) -> Self {
        self.replies.insert(name.to_string(), reply.to_string());
        self
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Resolves message text to `(command, reply)`. `/name@bot` only
    /// matches when `bot` is the configured username.
    pub fn reply_for<'a>(&'a self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let (name, _args) = parse_command(text, self.username.as_deref().unwrap_or_default())?;
        let reply = self.replies.get(name)?;
        Some((name, reply.as_str()))
    }
}

pub struct BotService<S: ReplySink> {
    commands: CommandRegistry,
    sink: S,
}

impl<S: ReplySink> BotService<S> {
    pub fn new(commands: CommandRegistry, sink: S) -> Self {
        Self { commands, sink }
    }

    /// Processes one raw webhook body. Updates that carry no registered
    /// command are acknowledged without a reply.
    pub async fn handle_update(&self, body: &[u8]) -> Result<(), AppError> {
        let update: Update = serde_json::from_slice(body)?;

        let Some(message) = update.message else {
            tracing::debug!(update_id = ?update.update_id, "update without message ignored");
            return Ok(());
        };
        let Some(text) = message.text.as_deref() else {
            return Ok(());
        };
        let Some((command, reply)) = self.commands.reply_for(text) else {
            tracing::debug!(text, "no registered command in message");
            return Ok(());
        };

        tracing::info!(command, update_id = ?update.update_id, "answering command");
        self.sink
            .reply(message.chat.map(|chat| chat.id), reply)
            .await
    }
}
