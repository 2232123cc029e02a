/// Logging port for use cases. Upstream failure detail is only ever written
/// here, never returned to callers.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
