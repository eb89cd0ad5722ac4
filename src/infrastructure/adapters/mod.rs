//! Messenger adapters

pub mod console;
