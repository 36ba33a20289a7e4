pub mod event;

pub use event::{EventError, decode_event, read_event};
