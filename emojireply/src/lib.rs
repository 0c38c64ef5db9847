//! Emojireply - automatic emoji reactions for messages from selected senders

pub mod catalog;
pub mod commands;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod plugin;
pub mod resolver;
pub mod state;
pub mod storages;

pub use dispatcher::{DispatchReport, dispatch};
pub use gate::should_dispatch;
pub use plugin::{EmojiReplyPlugin, PLUGIN_INFO, PluginInfo};
pub use resolver::{EmojiToken, resolve};
pub use state::EnablementState;
