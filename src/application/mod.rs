//! Application layer - The request/reply pipeline
//!
//! This layer contains:
//! - Errors: The typed failure taxonomy
//! - Messaging: Parsing, reply formatting and the request interpreter

pub mod errors;
pub mod messaging;
