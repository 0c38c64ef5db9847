use botkit::MessageEvent;

use crate::{
    commands::{Command, execute_command},
    config::EXPECTED_PLATFORM,
    dispatcher::{DispatchReport, dispatch},
    error::HandlerError,
    gate::should_dispatch,
    plugin::EmojiReplyPlugin,
    resolver::resolve,
};

/// Handle one incoming message. Returns the text to reply with, if any.
///
/// Commands and automatic reactions are independent: an admin toggling the
/// plugin from an allow-listed account gets both the reply and the reactions.
pub async fn handle_message(plugin: &EmojiReplyPlugin, event: &MessageEvent) -> Option<String> {
    let reply = handle_command(plugin, event).await;
    auto_react(plugin, event).await;
    reply
}

/// Run an admin command contained in the message
pub async fn handle_command(plugin: &EmojiReplyPlugin, event: &MessageEvent) -> Option<String> {
    let cmd = Command::parse(&event.text, plugin.config())?;
    if !event.is_admin() {
        log::info!("Ignoring {:?} from non-admin sender {}", cmd, event.sender_id);
        return None;
    }
    log::info!("Executing {:?} for sender {}", cmd, event.sender_id);
    Some(execute_command(plugin.state(), cmd).await)
}

/// React to the message if it qualifies. Errors are logged here and never
/// reach the host
pub async fn auto_react(
    plugin: &EmojiReplyPlugin,
    event: &MessageEvent,
) -> Option<DispatchReport> {
    match try_auto_react(plugin, event).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("Unexpected error while adding reactions: {}", e);
            None
        }
    }
}

async fn try_auto_react(
    plugin: &EmojiReplyPlugin,
    event: &MessageEvent,
) -> Result<Option<DispatchReport>, HandlerError> {
    let config = plugin.config();
    // the flag is read once; toggles during a dispatch apply to the next message
    if !should_dispatch(
        plugin.state().is_enabled(),
        &event.sender_id,
        &config.target_qq_ids,
        &event.platform_name,
        EXPECTED_PLATFORM,
        &config.emoji_names,
    ) {
        return Ok(None);
    }

    let emoji_ids = resolve(&config.emoji_names);
    if emoji_ids.is_empty() {
        return Ok(None);
    }

    let message_id = event
        .message_id
        .as_ref()
        .ok_or_else(|| HandlerError::MissingMessageId {
            sender_id: event.sender_id.clone(),
            platform: event.platform_name.clone(),
        })?;

    let report = dispatch(plugin.api(), message_id, &emoji_ids, config.reply_delay()).await;
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use botkit::{MessageId, SenderRole};
    use tokio::time::Instant;

    use super::*;
    use crate::{
        commands::{DISABLED_REPLY, ENABLED_REPLY},
        config::PluginConfig,
        dispatcher::tests::RecordingReactApi,
        resolver::EmojiToken,
        storages::{StatusMemoryStorage, StatusStorageTrait},
    };

    fn config(tokens: &[&str]) -> PluginConfig {
        PluginConfig {
            target_qq_ids: vec!["10001".to_string()],
            emoji_names: tokens.iter().map(|s| EmojiToken::from(*s)).collect(),
            reply_delay: 0.0,
            admin_ids: vec!["90000".to_string()],
            ..PluginConfig::default()
        }
    }

    async fn plugin_with(
        config: PluginConfig,
        api: Arc<RecordingReactApi>,
    ) -> (EmojiReplyPlugin, Arc<StatusMemoryStorage>) {
        let storage = Arc::new(StatusMemoryStorage::new());
        let plugin = EmojiReplyPlugin::new(config, storage.clone(), api).await;
        (plugin, storage)
    }

    fn message(sender: &str, text: &str) -> MessageEvent {
        MessageEvent::new("aiocqhttp", sender, Some(MessageId::from(42)), text)
    }

    #[tokio::test]
    async fn test_target_message_gets_reactions() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, _) = plugin_with(config(&["赞", "x"]), api.clone()).await;

        let reply = handle_message(&plugin, &message("10001", "hello")).await;
        assert_eq!(reply, None);
        assert_eq!(api.emoji_ids().await, vec!["76"]);
        let calls = api.calls.lock().await;
        assert_eq!(calls[0].0, MessageId::from(42));
    }

    #[tokio::test]
    async fn test_other_senders_are_ignored() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, _) = plugin_with(config(&["赞"]), api.clone()).await;

        handle_message(&plugin, &message("10002", "hello")).await;
        handle_message(&plugin, &message("", "hello")).await;
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_numeric_allow_list_entry_gets_no_reaction() {
        let api = Arc::new(RecordingReactApi::default());
        let config = PluginConfig::from_yaml("target_qq_ids: [10001]\nemoji_names: [赞]\n")
            .expect("Failed to parse config");
        let (plugin, _) = plugin_with(config, api.clone()).await;

        handle_message(&plugin, &message("10001", "hello")).await;
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_other_platforms_are_ignored() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, _) = plugin_with(config(&["赞"]), api.clone()).await;

        let event = MessageEvent::new("telegram", "10001", Some(MessageId::from(1)), "hi");
        assert_eq!(auto_react(&plugin, &event).await, None);
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_nothing_to_dispatch_when_all_tokens_invalid() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, _) = plugin_with(config(&["a", "xyz"]), api.clone()).await;

        assert_eq!(auto_react(&plugin, &message("10001", "hi")).await, None);
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_message_id_is_swallowed() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, _) = plugin_with(config(&["赞"]), api.clone()).await;

        let event = MessageEvent::new("aiocqhttp", "10001", None, "hi");
        assert_eq!(handle_message(&plugin, &event).await, None);
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_reaction_does_not_stop_others() {
        let api = Arc::new(RecordingReactApi::failing_on(&["4"]));
        let (plugin, _) = plugin_with(config(&["得意", "赞", "😀"]), api.clone()).await;

        let report = auto_react(&plugin, &message("10001", "hi"))
            .await
            .expect("Target message must be dispatched");
        assert_eq!(report.attempted, 3);
        assert_eq!(report.failed, vec!["4"]);
        assert_eq!(api.emoji_ids().await, vec!["4", "76", "128512"]);
    }

    #[tokio::test]
    async fn test_admin_toggles_reactions() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, storage) = plugin_with(config(&["赞"]), api.clone()).await;
        let admin = |text: &str| message("90000", text).with_role(SenderRole::Admin);

        let reply = handle_message(&plugin, &admin("关闭表情回复")).await;
        assert_eq!(reply.as_deref(), Some(DISABLED_REPLY));
        assert!(!storage.load().await);

        handle_message(&plugin, &message("10001", "hi")).await;
        assert!(api.calls.lock().await.is_empty());

        let reply = handle_message(&plugin, &admin("/打开表情回复")).await;
        assert_eq!(reply.as_deref(), Some(ENABLED_REPLY));
        assert!(storage.load().await);

        handle_message(&plugin, &message("10001", "hi")).await;
        assert_eq!(api.emoji_ids().await, vec!["76"]);
    }

    #[tokio::test]
    async fn test_non_admin_cannot_toggle() {
        let api = Arc::new(RecordingReactApi::default());
        let (plugin, storage) = plugin_with(config(&["赞"]), api.clone()).await;

        let reply = handle_message(&plugin, &message("10001", "关闭表情回复")).await;
        assert_eq!(reply, None);
        assert!(plugin.state().is_enabled());
        assert!(storage.load().await);
        // the command text itself is still an ordinary target message
        assert_eq!(api.emoji_ids().await, vec!["76"]);
    }

    #[tokio::test]
    async fn test_plugin_starts_with_persisted_status() {
        let storage = Arc::new(StatusMemoryStorage::new());
        storage.save(false).await;
        let api = Arc::new(RecordingReactApi::default());
        let plugin = EmojiReplyPlugin::new(config(&["赞"]), storage, api.clone()).await;

        assert!(!plugin.state().is_enabled());
        handle_message(&plugin, &message("10001", "hi")).await;
        assert!(api.calls.lock().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_messages_do_not_wait_for_each_other() {
        let api = Arc::new(RecordingReactApi::default());
        let mut config = config(&["得意", "赞", "😀"]);
        config.reply_delay = 0.3;
        let (plugin, _) = plugin_with(config, api.clone()).await;

        let first = MessageEvent::new("aiocqhttp", "10001", Some(MessageId::from(1)), "a");
        let second = MessageEvent::new("aiocqhttp", "10001", Some(MessageId::from(2)), "b");
        let start = Instant::now();
        tokio::join!(
            handle_message(&plugin, &first),
            handle_message(&plugin, &second)
        );

        // both messages are paced independently, so the total is one message's worth
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(600) && elapsed < Duration::from_millis(900));
        assert_eq!(api.calls.lock().await.len(), 6);
    }
}
