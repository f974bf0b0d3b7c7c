// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use crate::ast::{Document, Value};
use crate::parser;
use crate::TomlError;

mod access;
mod validation;
mod conversion;
mod helpers;

/// Main configuration struct: one parsed document plus the text it came from
/// (kept for pointing errors at source lines).
#[derive(Debug, Clone, Default)]
pub struct TomlConfig {
    document: Document,
    raw_content: String,
}

impl TomlConfig {
    /// An empty config; every lookup fails until [`TomlConfig::parse`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML config from a string.
    ///
    /// Reading the text from disk or elsewhere is up to the caller.
    ///
    /// # Example
    /// ```
    /// use tomlet::TomlConfig;
    ///
    /// let config = TomlConfig::from_str("[database]\nserver = \"192.168.1.1\"").unwrap();
    /// let server: String = config.get_as("database.server").unwrap();
    /// assert_eq!(server, "192.168.1.1");
    /// ```
    pub fn from_str(content: &str) -> Result<Self, TomlError> {
        let mut config = Self::new();
        config.parse(content)?;
        Ok(config)
    }

    /// Parse `content` and replace the stored document with the result.
    ///
    /// On error the previously stored document is left untouched.
    pub fn parse(&mut self, content: &str) -> Result<&Document, TomlError> {
        let mut parser = parser::Parser::new(content);
        let document = parser.parse_document()?;

        debug!("Replacing document ({} -> {} top-level keys)", self.document.root().len(), document.root().len());
        self.document = document;
        self.raw_content = content.to_string();
        Ok(&self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}

#[cfg(test)]
mod tests;
