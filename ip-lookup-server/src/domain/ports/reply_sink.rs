use crate::domain::errors::AppError;
use std::future::Future;

/// Where the bot's answers go.
pub trait ReplySink: Send + Sync + 'static {
    fn reply(
        &self,
        chat_id: Option<i64>,
        text: &str,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}
