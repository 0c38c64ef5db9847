use crate::api::{error::ApiError, event::MessageId};

/// Platform operation attaching an emoji reaction to an existing message
///
/// On OneBot v11 (aiocqhttp) this is the `set_msg_emoji_like` action.
#[async_trait::async_trait]
pub trait ReactApi: Send + Sync {
    /// Attach the emoji with numeric id `emoji_id` to the message
    async fn set_msg_emoji_like(
        &self,
        message_id: &MessageId,
        emoji_id: &str,
    ) -> Result<(), ApiError>;
}
