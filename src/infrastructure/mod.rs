//! Infrastructure layer - Concrete collaborators
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Regions: Static area-code table
//! - Menus: JSON menu store and vegetarian word classifier
//! - Adapters: Messenger implementations (console)

pub mod adapters;
pub mod config;
pub mod menus;
pub mod regions;
