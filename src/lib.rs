pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Document, Table, Value};
pub use error::TomlError;
pub use config::TomlConfig;
pub use parser::convert_value;

/// Parse TOML text into a fresh [`Document`].
pub fn parse(input: &str) -> Result<Document, TomlError> {
    parser::Parser::new(input).parse_document()
}
