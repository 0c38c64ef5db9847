use std::time::Duration;

use botkit::{MessageId, ReactApi};

/// Outcome of reacting to one message
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    /// Number of reaction calls made
    pub attempted: usize,
    /// Emoji ids whose reaction call failed, in call order
    pub failed: Vec<String>,
}

/// Attach every emoji in `emoji_ids` to the message, one call at a time.
///
/// A failing call is logged and the remaining ids are still attempted. After a
/// successful call, and unless it was the last one, the task sleeps for
/// `delay` to stay under the platform rate limit. Nothing is retried.
pub async fn dispatch(
    api: &dyn ReactApi,
    message_id: &MessageId,
    emoji_ids: &[String],
    delay: Duration,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for (idx, emoji_id) in emoji_ids.iter().enumerate() {
        report.attempted += 1;
        match api.set_msg_emoji_like(message_id, emoji_id).await {
            Ok(()) => {
                let is_last = idx + 1 == emoji_ids.len();
                if !delay.is_zero() && !is_last {
                    tokio::time::sleep(delay).await;
                }
            }
            Err(e) => {
                log::error!(
                    "Failed to add reaction {} to message {}: {}",
                    emoji_id,
                    message_id,
                    e
                );
                report.failed.push(emoji_id.clone());
            }
        }
    }

    if !emoji_ids.is_empty() {
        log::info!(
            "Reacted to message {} with {} of {} emoji",
            message_id,
            report.attempted - report.failed.len(),
            report.attempted
        );
    }

    report
}
