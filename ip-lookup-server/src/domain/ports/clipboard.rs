/// Session clipboard. Writes are fire-and-forget and never fail.
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str);
    fn read_text(&self) -> Option<String>;
}
