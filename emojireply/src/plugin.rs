use std::sync::Arc;

use botkit::ReactApi;

use crate::{config::PluginConfig, state::EnablementState, storages::StatusStorageTrait};

/// Registration metadata reported to the host
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub repository: &'static str,
}

pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "admin_emoji_reply",
    author: "EraAsh",
    description: "为指定QQ号的消息自动添加表情回应",
    version: env!("CARGO_PKG_VERSION"),
    repository: "https://github.com/EraAsh/astrbot_plugin_admin_emoji_reply",
};

/// Everything a message handler needs: settings, the on/off switch and the
/// platform API. Built once and shared by all message tasks
pub struct EmojiReplyPlugin {
    config: PluginConfig,
    state: EnablementState,
    api: Arc<dyn ReactApi>,
}

impl EmojiReplyPlugin {
    pub async fn new(
        config: PluginConfig,
        storage: Arc<dyn StatusStorageTrait>,
        api: Arc<dyn ReactApi>,
    ) -> Self {
        log::info!(
            "Starting plugin {} v{}",
            PLUGIN_INFO.name,
            PLUGIN_INFO.version
        );
        let state = EnablementState::load(storage).await;
        Self { config, state, api }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn state(&self) -> &EnablementState {
        &self.state
    }

    pub fn api(&self) -> &dyn ReactApi {
        self.api.as_ref()
    }
}
