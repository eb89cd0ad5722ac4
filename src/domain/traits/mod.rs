//! Domain traits - Abstractions for external collaborators

pub mod menu_source;
pub mod messenger;
pub mod region;

pub use menu_source::MenuSource;
pub use messenger::Messenger;
pub use region::RegionLookup;
