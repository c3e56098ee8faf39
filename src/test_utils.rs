//! Fixture views for tests and benchmarks.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use std::any::Any;

use crate::error::{Result, ScanError};
use crate::view::{Size, View, Visibility};

/// How a [`TestView`] misbehaves when its children are enumerated.
#[derive(Debug, Clone)]
enum Fault {
    Error(String),
    Panic(String),
}

/// A configurable in-memory view.
///
/// Children are boxed trait objects so fixtures can mix in other view types.
pub struct TestView {
    type_name: String,
    id: Option<String>,
    title: Option<String>,
    window_focus: bool,
    size: Option<Size>,
    visibility: Visibility,
    focused: bool,
    selected: bool,
    enabled: bool,
    text: Option<String>,
    ime_target: bool,
    checked: Option<bool>,
    children: Vec<Box<dyn View>>,
    fault: Option<Fault>,
}

impl TestView {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            id: None,
            title: None,
            window_focus: false,
            size: None,
            visibility: Visibility::Visible,
            focused: false,
            selected: false,
            enabled: true,
            text: None,
            ime_target: false,
            checked: None,
            children: Vec::new(),
            fault: None,
        }
    }

    /// A window root with a title and focus state.
    pub fn window(title: &str, has_focus: bool) -> Self {
        let mut view = Self::new("test.window.DecorView");
        view.title = Some(title.to_string());
        view.window_focus = has_focus;
        view
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn ime_target(mut self) -> Self {
        self.ime_target = true;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_child(mut self, child: impl View) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Enumerating children returns an error with `message`.
    pub fn failing(mut self, message: &str) -> Self {
        self.fault = Some(Fault::Error(message.to_string()));
        self
    }

    /// Enumerating children panics with `message`.
    pub fn panicking(mut self, message: &str) -> Self {
        self.fault = Some(Fault::Panic(message.to_string()));
        self
    }
}

impl View for TestView {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn child_count(&self) -> Result<usize> {
        match &self.fault {
            Some(Fault::Error(message)) => Err(ScanError::Detached(message.clone())),
            Some(Fault::Panic(message)) => panic!("{}", message),
            None => Ok(self.children.len()),
        }
    }

    fn child_at(&self, index: usize) -> Result<Option<&dyn View>> {
        Ok(self.children.get(index).map(|child| child.as_ref()))
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
        self.size
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

/// A view type with its own state, for exercising type-specific renderers.
pub struct Slider {
    pub value: u8,
}

impl View for Slider {
    fn type_name(&self) -> &str {
        "test.widget.Slider"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Build a balanced tree `depth` levels deep with `fanout` children per node.
pub fn balanced_tree(depth: usize, fanout: usize) -> TestView {
    let mut view = TestView::new("test.widget.Container").with_size(100, 100);
    if depth > 0 {
        for i in 0..fanout {
            let child = balanced_tree(depth - 1, fanout).with_id(&format!("node_{}_{}", depth, i));
            view = view.with_child(child);
        }
    } else {
        view = view.with_text("leaf");
    }
    view
}
