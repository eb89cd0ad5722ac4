//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Request-scoped objects (InboundMessage, RestaurantQuery, Menu)
//! - Traits: Abstractions for collaborators (RegionLookup, MenuSource, Messenger)

pub mod entities;
pub mod traits;
