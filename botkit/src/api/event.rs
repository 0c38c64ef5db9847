use std::fmt::Display;

/// Platform message identifier. Opaque to plugins, only passed back to the host
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageId {
    fn from(id: &str) -> Self {
        MessageId(id.to_string())
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        MessageId(id.to_string())
    }
}

/// Permission level the host assigned to the sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SenderRole {
    #[default]
    Member,
    Admin,
}

/// A single incoming chat message as delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    /// Name of the platform integration that delivered the message, e.g. "aiocqhttp"
    pub platform_name: String,
    /// Sender identifier, empty when the platform did not report one
    pub sender_id: String,
    /// Identifier of the message itself, used to attach reactions
    pub message_id: Option<MessageId>,
    /// Plain text content
    pub text: String,
    pub role: SenderRole,
}

impl MessageEvent {
    pub fn new(
        platform_name: impl Into<String>,
        sender_id: impl Into<String>,
        message_id: Option<MessageId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            platform_name: platform_name.into(),
            sender_id: sender_id.into(),
            message_id,
            text: text.into(),
            role: SenderRole::Member,
        }
    }

    /// Mark the sender as admin
    pub fn with_role(mut self, role: SenderRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == SenderRole::Admin
    }
}
