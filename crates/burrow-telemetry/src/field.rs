use std::error::Error;
use std::fmt::{Display, Formatter};

/// Renders an error and its `source()` chain as `outer: inner: root`.
///
/// Meant for the `error` field of an event:
///
/// ```ignore
/// tracing::warn!(error = %burrow_telemetry::err(&e), "failed to save url");
/// ```
pub struct ErrorChain<'a>(&'a (dyn Error + 'static));

pub fn err<'a, E: Error + 'static>(error: &'a E) -> ErrorChain<'a> {
    ErrorChain(error)
}

impl Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;

        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

impl std::fmt::Debug for ErrorChain<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
