use std::time::Duration;

pub const SOFT_FAILURE_MESSAGE: &str = "Invalid IP address or API error";

pub const HARD_FAILURE_MESSAGE: &str = "Failed to fetch IP information";

pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

pub const START_GREETING: &str = "سلام";

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub const SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

pub const WEBHOOK_OK: &str = "ok";

pub const WEBHOOK_ERROR: &str = "error";
