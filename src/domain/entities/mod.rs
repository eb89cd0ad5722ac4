//! Domain entities - Request-scoped business objects

pub mod menu;
pub mod message;
pub mod query;

pub use menu::{Menu, MenuItem};
pub use message::{InboundMessage, ReplyMessage};
pub use query::{Region, RestaurantQuery};
