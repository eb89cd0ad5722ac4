//! Message parser - Turns a raw SMS body into a RestaurantQuery

use crate::application::errors::InterpreterError;
use crate::domain::entities::RestaurantQuery;

/// Separator between restaurant name and location in a message body
const LOCATION_SEPARATOR: char = '@';

/// Parses inbound message bodies of the form `NAME` or `NAME @ CITY, STATE`
pub struct MessageParser;

impl MessageParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a message body.
    ///
    /// The body is split on the first `@`. The left side, trimmed, is the
    /// restaurant name. When a right side exists it must be `city, state`,
    /// both non-empty after trimming. A body with no `@` yields a query
    /// with no location; the caller resolves one from the sender's number.
    pub fn parse(&self, body: &str) -> Result<RestaurantQuery, InterpreterError> {
        if body.trim().is_empty() {
            return Err(InterpreterError::Parse("empty message body".to_string()));
        }

        let (name_part, location_part) = match body.split_once(LOCATION_SEPARATOR) {
            Some((left, right)) => (left, Some(right)),
            None => (body, None),
        };

        let name = name_part.trim();
        if name.is_empty() {
            return Err(InterpreterError::Parse(
                "missing restaurant name before '@'".to_string(),
            ));
        }

        let mut query = RestaurantQuery::new(name);

        if let Some(location) = location_part {
            let (city, state) = location.split_once(',').ok_or_else(|| {
                InterpreterError::Parse("location must be 'city, state'".to_string())
            })?;
            let city = city.trim();
            let state = state.trim();
            if city.is_empty() || state.is_empty() {
                return Err(InterpreterError::Parse(
                    "location must be 'city, state'".to_string(),
                ));
            }
            query.city = Some(city.to_string());
            query.state = Some(state.to_string());
        }

        Ok(query)
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_only() {
        let query = MessageParser::new().parse("Joe's Diner").unwrap();
        assert_eq!(query.name, "Joe's Diner");
        assert_eq!(query.city, None);
        assert_eq!(query.state, None);
    }

    #[test]
    fn parses_name_with_location() {
        let query = MessageParser::new()
            .parse("Joe's Diner @ Berkeley, CA")
            .unwrap();
        assert_eq!(query.name, "Joe's Diner");
        assert_eq!(query.city.as_deref(), Some("Berkeley"));
        assert_eq!(query.state.as_deref(), Some("CA"));
    }

    #[test]
    fn trims_all_segments() {
        let query = MessageParser::new()
            .parse("  Taqueria Luz  @  San Jose ,  CA  ")
            .unwrap();
        assert_eq!(query.name, "Taqueria Luz");
        assert_eq!(query.city.as_deref(), Some("San Jose"));
        assert_eq!(query.state.as_deref(), Some("CA"));
    }

    #[test]
    fn rejects_empty_body() {
        assert!(MessageParser::new().parse("").is_err());
        assert!(MessageParser::new().parse("   ").is_err());
    }

    #[test]
    fn rejects_missing_name() {
        assert!(MessageParser::new().parse("@ Berkeley, CA").is_err());
        assert!(MessageParser::new().parse("  @ Berkeley, CA").is_err());
    }

    #[test]
    fn rejects_incomplete_location() {
        assert!(MessageParser::new().parse("Joe's @ Berkeley").is_err());
        assert!(MessageParser::new().parse("Joe's @ , CA").is_err());
        assert!(MessageParser::new().parse("Joe's @ Berkeley,").is_err());
        assert!(MessageParser::new().parse("Joe's @").is_err());
    }

    #[test]
    fn splits_on_first_at_only() {
        // A second '@' is just part of the location text
        let query = MessageParser::new().parse("Cafe @ Home @ Oakland, CA").unwrap();
        assert_eq!(query.name, "Cafe");
        assert_eq!(query.city.as_deref(), Some("Home @ Oakland"));
        assert_eq!(query.state.as_deref(), Some("CA"));
    }
}
