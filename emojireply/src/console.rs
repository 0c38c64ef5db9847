//
// Line-based stand-in for a chat host. Each stdin line is one message event:
//
//   <platform> <sender_id> <message_id> <text...>
//
// A message id of "-" means the platform did not report one. Reaction calls
// are only logged, nothing is sent anywhere.
//

use botkit::{ApiError, MessageEvent, MessageId, ReactApi, SenderRole};

use crate::config::PluginConfig;

/// ReactApi that logs the `set_msg_emoji_like` calls it receives
#[derive(Debug, Default)]
pub struct ConsoleReactApi;

#[async_trait::async_trait]
impl ReactApi for ConsoleReactApi {
    async fn set_msg_emoji_like(
        &self,
        message_id: &MessageId,
        emoji_id: &str,
    ) -> Result<(), ApiError> {
        log::info!(
            "set_msg_emoji_like message_id={} emoji_id={}",
            message_id,
            emoji_id
        );
        println!("👍 message {} <- emoji {}", message_id, emoji_id);
        Ok(())
    }
}

/// Parse one input line into a message event. The sender gets the admin role
/// when listed in `admin_ids`
pub fn parse_event_line(line: &str, config: &PluginConfig) -> Result<MessageEvent, String> {
    let line = line.trim();
    let mut fields = line.split_whitespace();
    let (Some(platform), Some(sender_id), Some(message_id)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!(
            "Expected '<platform> <sender_id> <message_id> <text>', got '{}'",
            line
        ));
    };
    // text is the rest of the line after the third field, inner spacing kept
    let mut rest = line;
    for field in [platform, sender_id, message_id] {
        rest = rest.trim_start();
        rest = &rest[field.len()..];
    }
    let text = rest.trim();

    let message_id = match message_id {
        "-" => None,
        id => Some(MessageId::from(id)),
    };
    let role = if config.is_admin(sender_id) {
        SenderRole::Admin
    } else {
        SenderRole::Member
    };
    Ok(MessageEvent::new(platform, sender_id, message_id, text).with_role(role))
}
