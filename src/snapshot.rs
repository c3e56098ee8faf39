//! JSON hierarchy snapshots
//!
//! A captured hierarchy that can be scanned offline. The format is a list of
//! window roots, each a nested view:
//!
//! ```json
//! {
//!   "windows": [
//!     {
//!       "type": "ui.DecorView",
//!       "title": "Main",
//!       "window_focus": true,
//!       "width": 1080,
//!       "height": 1920,
//!       "children": [
//!         { "type": "ui.EditText", "id": "username", "text": "jdoe", "focused": true }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Every field except `type` is optional.

use std::any::Any;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::discovery::RootDiscovery;
use crate::error::{Result, SnapshotError};
use crate::view::{Size, View, Visibility};

#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    windows: Vec<SnapshotView>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> std::result::Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        for (i, window) in snapshot.windows.iter().enumerate() {
            window.validate(&format!("windows[{}]", i))?;
        }
        Ok(snapshot)
    }

    pub fn load(path: &Path) -> std::result::Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn windows(&self) -> &[SnapshotView] {
        &self.windows
    }

    pub fn window(&self, index: usize) -> Option<&SnapshotView> {
        self.windows.get(index)
    }
}

impl RootDiscovery for Snapshot {
    fn root_views(&self) -> Result<Vec<&dyn View>> {
        Ok(self.windows.iter().map(|w| w as &dyn View).collect())
    }
}

/// One captured view.
#[derive(Debug, Deserialize)]
pub struct SnapshotView {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    window_focus: bool,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    visibility: Visibility,
    #[serde(default)]
    focused: bool,
    #[serde(default)]
    selected: bool,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    ime_target: bool,
    #[serde(default)]
    checked: Option<bool>,
    #[serde(default)]
    children: Vec<SnapshotView>,
}

fn default_enabled() -> bool {
    true
}

impl SnapshotView {
    pub fn children(&self) -> &[SnapshotView] {
        &self.children
    }

    fn validate(&self, location: &str) -> std::result::Result<(), SnapshotError> {
        if self.type_name.trim().is_empty() {
            return Err(SnapshotError::EmptyTypeName(location.to_string()));
        }
        for (i, child) in self.children.iter().enumerate() {
            child.validate(&format!("{}.children[{}]", location, i))?;
        }
        Ok(())
    }
}

impl View for SnapshotView {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn child_count(&self) -> Result<usize> {
        Ok(self.children.len())
    }

    fn child_at(&self, index: usize) -> Result<Option<&dyn View>> {
        Ok(self.children.get(index).map(|c| c as &dyn View))
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn window_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn has_window_focus(&self) -> bool {
        self.window_focus
    }

    fn size(&self) -> Option<Size> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            _ => None,
        }
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn is_ime_target(&self) -> bool {
        self.ime_target
    }

    fn checked(&self) -> Option<bool> {
        self.checked
    }
}
