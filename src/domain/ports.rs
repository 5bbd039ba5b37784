use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encodes records to JSON text and decodes JSON text back into records.
pub trait JsonCodec: Send + Sync {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String>;
    fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T>;
}

/// Destination for pre-formatted log lines.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warn(&self, message: &str) {
        (**self).warn(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
