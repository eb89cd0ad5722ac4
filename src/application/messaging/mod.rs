//! Message handling - Parse, interpret, format

pub mod formatter;
pub mod interpreter;
pub mod parser;

pub use formatter::ReplyFormatter;
pub use interpreter::RequestInterpreter;
pub use parser::MessageParser;
