/// Logging port used by the use cases.
///
/// The domain never depends on a concrete logging backend; the binary wires in
/// the tracing adapter.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
