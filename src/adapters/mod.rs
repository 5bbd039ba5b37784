// Adapters layer: concrete implementations of the domain ports.

pub mod codec;
pub mod log_sink;

pub use codec::SerdeJsonCodec;
pub use log_sink::{MemorySink, TracingSink};
