//! Request interpreter - Transforms one inbound message into one reply
//!
//! The pipeline is a single linear pass: parse the body, resolve a location
//! from the sender's area code when none was given, fetch the menu, keep the
//! vegetarian items and format them. Every typed failure is recovered here
//! and mapped to a user-visible sentence, so `handle` always has a reply.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::sync::Arc;

use crate::application::errors::{InterpreterError, MenuLookupError};
use crate::application::messaging::{MessageParser, ReplyFormatter};
use crate::domain::entities::{InboundMessage, Menu, MenuItem, Region, ReplyMessage, RestaurantQuery};
use crate::domain::traits::{MenuSource, RegionLookup};

/// NANP number in digits-only form: optional country code 1, then the
/// three-digit area code (which never starts with 0 or 1), then 7 digits.
static AREA_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1?([2-9]\d{2})\d{7}$").unwrap()
});

/// Extract the area code from a sender phone number
pub fn area_code(sender: &str) -> Option<String> {
    let digits: String = sender.chars().filter(|c| c.is_ascii_digit()).collect();
    AREA_CODE
        .captures(&digits)
        .map(|caps| caps[1].to_string())
}

/// Keep vegetarian items, preserving input order. Pure and idempotent.
pub fn filter_vegetarian(items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.into_iter().filter(|item| item.is_vegetarian).collect()
}

/// The request/reply pipeline with its two lookup collaborators injected.
///
/// No state is shared between invocations; the hosting framework may run
/// any number of them concurrently.
pub struct RequestInterpreter {
    parser: MessageParser,
    formatter: ReplyFormatter,
    regions: Arc<dyn RegionLookup>,
    menus: Arc<dyn MenuSource>,
    default_region: Option<Region>,
}

impl RequestInterpreter {
    pub fn new(regions: Arc<dyn RegionLookup>, menus: Arc<dyn MenuSource>) -> Self {
        Self {
            parser: MessageParser::new(),
            formatter: ReplyFormatter::new(),
            regions,
            menus,
            default_region: None,
        }
    }

    /// Region to fall back on when the sender's area code is unmapped
    pub fn with_default_region(mut self, region: Region) -> Self {
        self.default_region = Some(region);
        self
    }

    pub fn with_formatter(mut self, formatter: ReplyFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Handle one inbound message. Never fails: every error becomes a
    /// user-visible reply for the messaging collaborator to deliver.
    pub async fn handle(&self, message: &InboundMessage) -> ReplyMessage {
        match self.run(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Request {} failed: {}", message.id, e);
                reply_for(&e)
            }
        }
    }

    async fn run(&self, message: &InboundMessage) -> Result<ReplyMessage, InterpreterError> {
        let query = self.parser.parse(&message.body)?;
        let query = self.resolve_location(query, &message.sender).await?;
        let menu = self.fetch_menu(&query).await?;
        tracing::info!(
            "Matched '{}' with {} items for request {}",
            menu.restaurant,
            menu.items.len(),
            message.id
        );

        if menu.is_empty() {
            return Ok(no_menu_reply(&menu));
        }

        let vegetarian = filter_vegetarian(menu.items);
        Ok(self.formatter.format(&vegetarian))
    }

    /// Fill in city/state from the sender's area code when the body gave none
    async fn resolve_location(
        &self,
        query: RestaurantQuery,
        sender: &str,
    ) -> Result<RestaurantQuery, InterpreterError> {
        if query.has_location() {
            return Ok(query);
        }

        let region = match area_code(sender) {
            Some(code) => self.regions.lookup(&code).await,
            None => None,
        };

        match region.or_else(|| self.default_region.clone()) {
            Some(region) => {
                tracing::debug!("Resolved sender {} to {}", sender, region);
                Ok(query.with_region(region))
            }
            None => Err(InterpreterError::LocationUnresolved(sender.to_string())),
        }
    }

    async fn fetch_menu(&self, query: &RestaurantQuery) -> Result<Menu, InterpreterError> {
        // resolve_location ran first, so both parts are present
        let city = query.city.as_deref().unwrap_or_default();
        let state = query.state.as_deref().unwrap_or_default();

        self.menus
            .lookup(&query.name, city, state)
            .await
            .map_err(|e| match e {
                MenuLookupError::NotFound(name) => InterpreterError::RestaurantNotFound(name),
                MenuLookupError::Unavailable(msg) => InterpreterError::Upstream(msg),
            })
    }
}

/// Success-path reply for a restaurant with no published menu
fn no_menu_reply(menu: &Menu) -> ReplyMessage {
    let mut body = format!(
        "Unfortunately, {} does not have a menu. Visit the restaurant for a full menu!",
        menu.restaurant
    );
    if !menu.address.is_empty() {
        body.push('\n');
        body.push_str(&menu.address);
    }
    ReplyMessage::new(body)
}

/// Map a typed failure to the sentence the sender sees
fn reply_for(error: &InterpreterError) -> ReplyMessage {
    let body = match error {
        InterpreterError::Parse(_) => {
            "Please text a restaurant name, optionally followed by '@ City, State'.".to_string()
        }
        InterpreterError::LocationUnresolved(_) => {
            "We couldn't determine your location. Please include it like 'Restaurant @ City, State'."
                .to_string()
        }
        InterpreterError::RestaurantNotFound(_) => {
            "No Results Found: We could not find any restaurants with the text you sent. Please try again."
                .to_string()
        }
        InterpreterError::Upstream(_) => {
            "We could not reach the menu service. Please try again later.".to_string()
        }
    };
    ReplyMessage::new(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_area_code_with_country_prefix() {
        assert_eq!(area_code("+14155551234").as_deref(), Some("415"));
        assert_eq!(area_code("14155551234").as_deref(), Some("415"));
    }

    #[test]
    fn extracts_area_code_without_country_prefix() {
        assert_eq!(area_code("4155551234").as_deref(), Some("415"));
        assert_eq!(area_code("(212) 555-0100").as_deref(), Some("212"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(area_code(""), None);
        assert_eq!(area_code("12345"), None);
        assert_eq!(area_code("+441632960961"), None);
        assert_eq!(area_code("1155551234"), None);
    }

    #[test]
    fn filter_keeps_only_vegetarian_in_order() {
        let items = vec![
            MenuItem::new("Veggie Burger", true),
            MenuItem::new("Steak", false),
            MenuItem::new("Salad", true),
        ];
        let filtered = filter_vegetarian(items);
        let names: Vec<&str> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Veggie Burger", "Salad"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let items = vec![
            MenuItem::new("Veggie Burger", true),
            MenuItem::new("Steak", false),
        ];
        let once = filter_vegetarian(items);
        let twice = filter_vegetarian(once.clone());
        assert_eq!(once, twice);
    }
}
