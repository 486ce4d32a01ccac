use serde::Deserialize;

/// The subset of a Telegram `Update` the bot reacts to. Fields the bot does
/// not need are ignored; fields it does need are optional so that sparse
/// updates still parse.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: Option<i64>,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Option<Chat>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}
