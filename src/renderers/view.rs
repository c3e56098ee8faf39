//! Attributes shared by every view

use crate::error::Result;
use crate::view::{View, Visibility};

use super::{AttributeAppender, StateRenderer};

/// Renders id, size, visibility and the focused/selected/disabled flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewRenderer;

impl StateRenderer for ViewRenderer {
    fn name(&self) -> &'static str {
        "view"
    }

    fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()> {
        if let Some(id) = view.id() {
            out.append_key_value("id", id);
        }
        if let Some(size) = view.size() {
            out.append(size);
        }
        match view.visibility() {
            Visibility::Visible => {}
            Visibility::Invisible => out.append("INVISIBLE"),
            Visibility::Gone => out.append("GONE"),
        }
        if view.is_focused() {
            out.append("focused");
        }
        if view.is_selected() {
            out.append("selected");
        }
        if !view.is_enabled() {
            out.append("disabled");
        }
        Ok(())
    }
}
