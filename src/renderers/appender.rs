//! Text sink handed to state renderers

use std::fmt::{Display, Write};

/// Appends attribute tokens to the current node line.
///
/// The first token is preceded by a space (it follows the opening brace),
/// later ones by `", "`.
pub struct AttributeAppender<'a> {
    out: &'a mut String,
    count: usize,
}

impl<'a> AttributeAppender<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self { out, count: 0 }
    }

    /// Append a bare token such as `focused`.
    pub fn append(&mut self, attribute: impl Display) {
        self.separator();
        // Writing to a String cannot fail.
        let _ = write!(self.out, "{}", attribute);
    }

    /// Append a `key:value` token.
    pub fn append_key_value(&mut self, key: &str, value: impl Display) {
        self.separator();
        let _ = write!(self.out, "{}:{}", key, value);
    }

    fn separator(&mut self) {
        if self.count == 0 {
            self.out.push(' ');
        } else {
            self.out.push_str(", ");
        }
        self.count += 1;
    }
}
