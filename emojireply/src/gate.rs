use crate::resolver::EmojiToken;

/// Decide whether a message should receive reactions at all.
///
/// Every negative answer here is the normal case for most traffic, so nothing
/// is logged.
pub fn should_dispatch(
    enabled: bool,
    sender_id: &str,
    allow_list: &[String],
    platform_name: &str,
    expected_platform: &str,
    tokens: &[EmojiToken],
) -> bool {
    if !enabled {
        return false;
    }
    if allow_list.is_empty() || sender_id.is_empty() {
        return false;
    }
    if !allow_list.iter().any(|id| id == sender_id) {
        return false;
    }
    if platform_name != expected_platform {
        return false;
    }
    !tokens.is_empty()
}
