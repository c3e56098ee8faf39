//! Text content attributes

use crate::error::Result;
use crate::view::View;

use super::{AttributeAppender, StateRenderer};

/// Renders `text-length` for text-bearing views, and the text itself when
/// `include_text` is set. Views without text are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    include_text: bool,
    text_max_length: Option<usize>,
}

impl TextRenderer {
    pub fn new(include_text: bool, text_max_length: Option<usize>) -> Self {
        Self {
            include_text,
            text_max_length,
        }
    }
}

impl StateRenderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()> {
        let Some(text) = view.text() else {
            return Ok(());
        };
        if self.include_text {
            let shown = match self.text_max_length {
                Some(max) => ellipsize(text, max),
                None => text.to_string(),
            };
            out.append_key_value("text", format!("\"{}\"", escape_text(&shown)));
        }
        out.append_key_value("text-length", text.chars().count());
        if view.is_ime_target() {
            out.append("ime-target");
        }
        Ok(())
    }
}

/// Cut `text` to at most `max_length` characters, ending in `…` when cut.
pub fn ellipsize(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max_length - 1).collect();
    cut.push('…');
    cut
}

/// Escape quotes and line breaks so the value stays on one line.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
