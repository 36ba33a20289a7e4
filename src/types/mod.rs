//! Domain types shared by the clients, the event reader and the formatter

pub mod event;
pub mod project;
pub mod pull_request;

pub use event::*;
pub use project::*;
pub use pull_request::*;
