//! Checked state

use crate::error::Result;
use crate::view::View;

use super::{AttributeAppender, StateRenderer};

/// Renders `checked` for checkable views that are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckableRenderer;

impl StateRenderer for CheckableRenderer {
    fn name(&self) -> &'static str {
        "checkable"
    }

    fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()> {
        if view.checked() == Some(true) {
            out.append("checked");
        }
        Ok(())
    }
}
