use chrono::{DateTime, Utc};

/// Represents one inbound SMS delivered by the webhook collaborator
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    pub sender: String,
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl InboundMessage {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: sender.into(),
            body: body.into(),
            received_at: Utc::now(),
        }
    }
}

/// The single outbound message produced for an inbound one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    pub body: String,
}

impl ReplyMessage {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl std::fmt::Display for ReplyMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}
