use log::{debug, trace, warn};

use crate::lexer::{self, bracket_balance, Line};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Idle,
    AccumulatingArray { start_line: usize },
}

/// A complete `key = value` assignment, group prefix already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub path: String,
    pub literal: String,
    pub line: usize,
}

/// Joins physical lines into statements and tracks the active `[group]`.
#[derive(Debug, Default)]
pub struct StatementAssembler {
    state: State,
    group: String,
    buffer: String,
    start_line: usize,
}

impl StatementAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Feed one raw line (1-based `line_no`). Returns a statement once one is complete.
    pub fn push_line(&mut self, line_no: usize, raw: &str) -> Option<Statement> {
        let line = lexer::classify(raw);
        trace!("line {}: {:?}", line_no, line);

        if line == Line::Blank {
            return None;
        }

        if let State::AccumulatingArray { start_line } = self.state {
            self.buffer.push(' ');
            self.buffer.push_str(line.text());
            if bracket_balance(&self.buffer) > 0 {
                return None;
            }
            debug!("Array started on line {} closed on line {}", start_line, line_no);
            self.state = State::Idle;
            return self.emit();
        }

        match line {
            Line::Group { name, .. } => {
                debug!("Entering group '{}'", name);
                self.group = name.to_string();
                None
            }
            Line::Assignment { value, text, .. } => {
                self.buffer = text.to_string();
                self.start_line = line_no;
                if value.starts_with('[') && bracket_balance(text) > 0 {
                    debug!("Array value spans lines, starting on line {}", line_no);
                    self.state = State::AccumulatingArray { start_line: line_no };
                    return None;
                }
                self.emit()
            }
            Line::Other(text) => {
                warn!("Skipping line {}: '{}' is not a key/value pair", line_no, text);
                None
            }
            Line::Blank => None,
        }
    }

    /// Flush a statement still waiting for its closing bracket at end of input.
    pub fn finish(&mut self) -> Option<Statement> {
        match self.state {
            State::AccumulatingArray { start_line } => {
                warn!("Input ended inside the array started on line {}", start_line);
                self.state = State::Idle;
                self.emit()
            }
            State::Idle => None,
        }
    }

    fn emit(&mut self) -> Option<Statement> {
        let buffer = std::mem::take(&mut self.buffer);
        let (key, literal) = buffer.split_once('=')?;
        let key = key.trim();

        let path = if self.group.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.group, key)
        };

        Some(Statement {
            path,
            literal: literal.trim().to_string(),
            line: self.start_line,
        })
    }
}
