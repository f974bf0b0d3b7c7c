use log::{debug, trace};

use crate::TomlError;
use crate::ast::Document;

pub(crate) mod reference;
mod statement;
mod value;

pub use statement::{State, Statement, StatementAssembler};
pub use value::convert_value;

/// Line-oriented parser: feeds every physical line through the statement
/// assembler and stores each completed statement in a fresh document.
pub struct Parser<'a> {
    input: &'a str,
    assembler: StatementAssembler,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            assembler: StatementAssembler::new(),
        }
    }

    pub fn parse_document(&mut self) -> Result<Document, TomlError> {
        let mut document = Document::new();

        for (idx, raw) in self.input.lines().enumerate() {
            if let Some(statement) = self.assembler.push_line(idx + 1, raw) {
                apply_statement(&mut document, statement)?;
            }
        }

        // Input ended inside an array; let the converter report it.
        if let Some(statement) = self.assembler.finish() {
            apply_statement(&mut document, statement)?;
        }

        debug!("Parsed document with {} top-level keys", document.root().len());
        Ok(document)
    }
}

fn apply_statement(document: &mut Document, statement: Statement) -> Result<(), TomlError> {
    trace!("line {}: {} = {}", statement.line, statement.path, statement.literal);
    let value = convert_value(&statement.literal).map_err(|e| e.at_line(statement.line))?;
    document.set(&statement.path, value);
    Ok(())
}
