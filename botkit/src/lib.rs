//! Botkit - host-side types shared between a chat-bot host and its plugins

// Private API modules
pub(crate) mod api;

// Public event module with re-exports
pub mod event {
    // Re-export types from internal API
    pub use crate::api::event::{MessageEvent, MessageId, SenderRole};
}

// Public react module with re-exports
pub mod react {
    // Re-export types and traits from internal API
    pub use crate::api::error::ApiError;
    pub use crate::api::react::ReactApi;
}

pub use event::{MessageEvent, MessageId, SenderRole};
pub use react::{ApiError, ReactApi};
