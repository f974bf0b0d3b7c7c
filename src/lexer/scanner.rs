use crate::TomlError;

/// Character-level splitter for one bracketed array literal.
///
/// Works on the whole literal at once; multi-line arrays are joined before
/// they get here. Items come back as raw, trimmed text with their quotes
/// intact so the value converter can classify them (and recurse into nested
/// arrays) afterwards.
#[derive(Debug, Default)]
pub struct ArrayScanner {
    level: i32,
    quote: Option<char>,
    escaped: bool,
    item: String,
    items: Vec<String>,
}

impl ArrayScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character.
    pub fn bump(&mut self, ch: char) {
        let escaped = std::mem::take(&mut self.escaped);

        if let Some(quote) = self.quote {
            if ch == quote && !escaped {
                self.quote = None;
            } else if ch == '\\' && !escaped {
                self.escaped = true;
            }
            self.item.push(ch);
            return;
        }

        if ch.is_whitespace() {
            return;
        }

        match ch {
            '"' | '\'' if !escaped => {
                self.quote = Some(ch);
                self.item.push(ch);
            }
            '[' => {
                self.level += 1;
                if self.level > 1 {
                    self.item.push(ch);
                }
            }
            ']' => {
                self.level -= 1;
                if self.level > 0 {
                    self.item.push(ch);
                }
            }
            ',' if self.level == 1 => {
                let item = std::mem::take(&mut self.item);
                self.items.push(item.trim().to_string());
            }
            '\\' => {
                self.escaped = true;
                self.item.push(ch);
            }
            _ => self.item.push(ch),
        }
    }

    /// Bracket depth so far; brackets inside quoted strings don't count.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Close the scan, failing if the brackets never balanced. A trailing
    /// item is only kept when it has content, so `[1, 2,]` has two items.
    pub fn finish(mut self) -> Result<Vec<String>, TomlError> {
        let item = self.item.trim();
        if self.level != 0 {
            return Err(TomlError::unterminated_array(item));
        }
        if !item.is_empty() {
            let item = item.to_string();
            self.items.push(item);
        }
        Ok(self.items)
    }
}

pub fn split_array_items(literal: &str) -> Result<Vec<String>, TomlError> {
    let mut scanner = ArrayScanner::new();
    for ch in literal.chars() {
        scanner.bump(ch);
    }
    scanner.finish()
}

/// Count of `[` minus count of `]` as the array scanner sees them, so quotes
/// and escapes are read the same way on both sides.
pub fn bracket_balance(text: &str) -> i32 {
    let mut scanner = ArrayScanner::new();
    for ch in text.chars() {
        scanner.bump(ch);
    }
    scanner.level()
}
