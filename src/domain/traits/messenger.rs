use async_trait::async_trait;

use crate::application::errors::SendError;
use crate::domain::entities::ReplyMessage;

/// Messaging-send collaborator. Transport, authentication and delivery
/// tracking belong to the implementation, not to this crate.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a reply to the given phone number
    async fn send(&self, to: &str, reply: &ReplyMessage) -> Result<(), SendError>;
}
