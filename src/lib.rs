//! veggie-bot - SMS bot that replies with a restaurant's vegetarian menu
//!
//! One inbound text (`Restaurant`, optionally `@ City, State`) becomes one
//! outbound text listing the vegetarian items on that restaurant's menu.
//! The request pipeline lives in [`application::messaging`]; the external
//! collaborators it needs (area-code lookup, menu data, message delivery)
//! are traits in [`domain::traits`] with reference implementations in
//! [`infrastructure`].

pub mod application;
pub mod domain;
pub mod infrastructure;
