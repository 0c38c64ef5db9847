use crate::{config::PluginConfig, state::EnablementState};

pub const ENABLED_REPLY: &str = "✅ 自动表情回复已开启";
pub const DISABLED_REPLY: &str = "☑️ 自动表情回复已关闭";

/// Admin commands of the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn automatic reactions on
    EnableReply,
    /// Turn automatic reactions off
    DisableReply,
}

impl Command {
    /// Match message text against the configured command strings.
    /// Surrounding whitespace and a leading '/' are ignored
    pub fn parse(text: &str, config: &PluginConfig) -> Option<Self> {
        let text = text.trim();
        let text = text.strip_prefix('/').unwrap_or(text).trim();
        if text.is_empty() {
            return None;
        }
        if text == config.enable_command {
            Some(Command::EnableReply)
        } else if text == config.disable_command {
            Some(Command::DisableReply)
        } else {
            None
        }
    }
}

/// Apply a command and return the confirmation for the chat.
/// The reply is the same whether or not the new status could be saved
pub async fn execute_command(state: &EnablementState, cmd: Command) -> String {
    match cmd {
        Command::EnableReply => {
            state.enable().await;
            ENABLED_REPLY.to_string()
        }
        Command::DisableReply => {
            state.disable().await;
            DISABLED_REPLY.to_string()
        }
    }
}
