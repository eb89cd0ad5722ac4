//! Reply formatting - Renders a vegetarian item list as one SMS body

use crate::domain::entities::{MenuItem, ReplyMessage};

/// Fixed reply when a menu has no vegetarian items
pub const NO_MATCHES: &str = "No vegetarian items found on this menu.";

/// Carrier limit for a single SMS body
pub const MAX_MESSAGE_LEN: usize = 1600;

/// Headroom kept when hard-truncating an oversized reply
const TRUNCATION_RESERVE: usize = 100;

/// Formats a filtered item list into a reply that fits in one message
pub struct ReplyFormatter {
    max_len: usize,
}

impl ReplyFormatter {
    pub fn new() -> Self {
        Self {
            max_len: MAX_MESSAGE_LEN,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Format vegetarian items into a reply: one item name per line, no
    /// trailing whitespace. Replies over the carrier limit are truncated
    /// on a character boundary and marked with an ellipsis.
    pub fn format(&self, items: &[MenuItem]) -> ReplyMessage {
        if items.is_empty() {
            return ReplyMessage::new(NO_MATCHES);
        }

        let body = items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if body.len() <= self.max_len {
            return ReplyMessage::new(body);
        }

        tracing::debug!("Reply too long ({} bytes), truncating", body.len());
        ReplyMessage::new(self.truncate(&body))
    }

    fn truncate(&self, body: &str) -> String {
        let cutoff = self.max_len.saturating_sub(TRUNCATION_RESERVE);
        let mut end = cutoff.min(body.len());
        while end > 0 && !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{} ...", body[..end].trim_end())
    }
}

impl Default for ReplyFormatter {
    fn default() -> Self {
        Self::new()
    }
}
