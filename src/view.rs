//! The node contract a UI tree implements to be scanned
//!
//! `View` is the only place concrete widget knowledge enters the crate. Every
//! accessor except `type_name` and `as_any` has a default, so a leaf type that
//! knows nothing about children or focus is still a valid, childless view.

use std::any::Any;
use std::fmt;

use serde::Deserialize;

use crate::error::Result;

/// Measured size of a view in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}px", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Invisible,
    Gone,
}

/// One node of a live UI hierarchy.
pub trait View: Any {
    /// Fully qualified type name, e.g. `ui::widget::Button`.
    fn type_name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    /// Type name without its module path.
    fn simple_type_name(&self) -> &str {
        simple_name(self.type_name())
    }

    fn child_count(&self) -> Result<usize> {
        Ok(0)
    }

    /// Child at `index`, or `None` if the slot is out of range or vacant.
    fn child_at(&self, index: usize) -> Result<Option<&dyn View>> {
        let _ = index;
        Ok(None)
    }

    /// Resource identifier, if the view has one.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Title of the window this view roots, if it is a window root.
    fn window_title(&self) -> Option<&str> {
        None
    }

    fn has_window_focus(&self) -> bool {
        false
    }

    fn size(&self) -> Option<Size> {
        None
    }

    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    fn is_focused(&self) -> bool {
        false
    }

    fn is_selected(&self) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        true
    }

    /// Text content for text-bearing views. May contain user data.
    fn text(&self) -> Option<&str> {
        None
    }

    fn is_ime_target(&self) -> bool {
        false
    }

    /// Checked state for checkable views.
    fn checked(&self) -> Option<bool> {
        None
    }
}

/// Strip the module path (`::` or `.` separated) from a type name.
pub fn simple_name(type_name: &str) -> &str {
    let after_colons = type_name.rsplit("::").next().unwrap_or(type_name);
    after_colons.rsplit('.').next().unwrap_or(after_colons)
}
