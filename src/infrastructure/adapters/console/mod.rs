//! Console adapter for development/testing

use async_trait::async_trait;
use std::io::Write;

use crate::application::errors::SendError;
use crate::domain::entities::ReplyMessage;
use crate::domain::traits::Messenger;

/// Console messenger for local development: prints replies instead of
/// delivering them
pub struct ConsoleMessenger;

impl ConsoleMessenger {
    pub fn new() -> Self {
        Self
    }

    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        std::io::stdout().flush().ok()?;
        let mut input = String::new();
        let read = std::io::stdin().read_line(&mut input).ok()?;
        if read == 0 {
            return None; // EOF
        }
        Some(input.trim().to_string())
    }
}

impl Default for ConsoleMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn send(&self, to: &str, reply: &ReplyMessage) -> Result<(), SendError> {
        tracing::debug!("Sending reply to {}", to);
        println!("[BOT] {}", reply.body);
        Ok(())
    }
}
