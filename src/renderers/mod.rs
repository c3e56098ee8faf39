//! Attribute extraction pipeline
//!
//! Each node line is `Type { attr, attr }`. The attributes come from an
//! ordered list of [`StateRenderer`]s, each of which may append zero or more
//! tokens for the current view. Renderers run in registration order and never
//! see each other's output.
//!
//! # Built-in renderers
//!
//! - [`ViewRenderer`]: id, size, visibility and focus flags common to all views
//! - [`TextRenderer`]: text length, and the text itself when PII is allowed
//! - [`CheckableRenderer`]: checked state
//! - [`TypedRenderer`]: runs a closure only for one concrete view type

mod appender;
mod checkable;
mod config;
mod text;
mod typed;
mod view;

pub use appender::AttributeAppender;
pub use checkable::CheckableRenderer;
pub use config::RendererConfig;
pub use text::{TextRenderer, ellipsize, escape_text};
pub use typed::{TypedRenderer, renderer_for};
pub use view::ViewRenderer;

use crate::error::Result;
use crate::view::View;

/// Appends attributes describing one view.
///
/// An absent attribute means appending nothing, never an error. Errors are
/// reserved for a view that cannot be read at all.
pub trait StateRenderer {
    /// Short name used in error messages.
    fn name(&self) -> &'static str;

    fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()>;
}

/// An ordered list of renderers.
pub struct RendererPipeline {
    renderers: Vec<Box<dyn StateRenderer>>,
}

impl RendererPipeline {
    /// An empty pipeline: every node renders as `Type { }`.
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Renderers that never surface text content.
    pub fn defaults_no_pii() -> Self {
        Self::new()
            .with(ViewRenderer)
            .with(TextRenderer::new(false, None))
            .with(CheckableRenderer)
    }

    /// Same as [`defaults_no_pii`](Self::defaults_no_pii), plus literal text
    /// content capped at `text_max_length` characters.
    pub fn defaults_including_pii(text_max_length: Option<usize>) -> Self {
        Self::new()
            .with(ViewRenderer)
            .with(TextRenderer::new(true, text_max_length))
            .with(CheckableRenderer)
    }

    pub fn from_config(config: &RendererConfig) -> Self {
        if config.include_pii {
            Self::defaults_including_pii(config.text_max_length)
        } else {
            Self::defaults_no_pii()
        }
    }

    pub fn with(mut self, renderer: impl StateRenderer + 'static) -> Self {
        self.push(Box::new(renderer));
        self
    }

    pub fn push(&mut self, renderer: Box<dyn StateRenderer>) {
        self.renderers.push(renderer);
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    /// Run every renderer, in order, against `view`.
    pub fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()> {
        for renderer in &self.renderers {
            renderer.append_attributes(out, view)?;
        }
        Ok(())
    }

    /// Write the full node line body: `Type { attr, attr }`.
    pub fn render_view(&self, out: &mut String, view: &dyn View) -> Result<()> {
        out.push_str(view.simple_type_name());
        out.push_str(" {");
        let mut appender = AttributeAppender::new(out);
        self.append_attributes(&mut appender, view)?;
        out.push_str(" }");
        Ok(())
    }
}

impl Default for RendererPipeline {
    fn default() -> Self {
        Self::defaults_no_pii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::test_utils::TestView;

    struct Fixed(&'static str, &'static str);

    impl StateRenderer for Fixed {
        fn name(&self) -> &'static str {
            self.0
        }

        fn append_attributes(&self, out: &mut AttributeAppender<'_>, _view: &dyn View) -> Result<()> {
            out.append(self.1);
            Ok(())
        }
    }

    struct Failing;

    impl StateRenderer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn append_attributes(&self, _out: &mut AttributeAppender<'_>, _view: &dyn View) -> Result<()> {
            Err(ScanError::Attribute {
                renderer: self.name(),
                reason: "unreadable".to_string(),
            })
        }
    }

    fn render(pipeline: &RendererPipeline, view: &TestView) -> String {
        let mut out = String::new();
        pipeline.render_view(&mut out, view).unwrap();
        out
    }

    #[test]
    fn test_empty_pipeline_renders_empty_body() {
        let out = render(&RendererPipeline::new(), &TestView::new("ui.Frame"));
        assert_eq!(out, "Frame { }");
    }

    #[test]
    fn test_pipeline_preserves_order() {
        let pipeline = RendererPipeline::new()
            .with(Fixed("first", "e1"))
            .with(Fixed("second", "e2"));
        let out = render(&pipeline, &TestView::new("Frame"));
        assert_eq!(out, "Frame { e1, e2 }");
    }

    #[test]
    fn test_pipeline_error_propagates() {
        let pipeline = RendererPipeline::new().with(Fixed("first", "e1")).with(Failing);
        let mut out = String::new();
        let err = pipeline
            .render_view(&mut out, &TestView::new("Frame"))
            .unwrap_err();
        assert_eq!(err.to_string(), "failing failed: unreadable");
    }

    #[test]
    fn test_default_is_no_pii() {
        let pipeline = RendererPipeline::default();
        assert_eq!(pipeline.names(), ["view", "text", "checkable"]);
        let out = render(&pipeline, &TestView::new("Label").with_text("secret"));
        assert!(!out.contains("secret"));
        assert!(out.contains("text-length:6"));
    }

    #[test]
    fn test_including_pii_shows_text() {
        let pipeline = RendererPipeline::defaults_including_pii(None);
        let out = render(&pipeline, &TestView::new("Label").with_text("hello"));
        assert_eq!(out, "Label { text:\"hello\", text-length:5 }");
    }

    #[test]
    fn test_from_config_selects_preset() {
        let config = RendererConfig {
            include_pii: true,
            text_max_length: Some(3),
        };
        let pipeline = RendererPipeline::from_config(&config);
        let out = render(&pipeline, &TestView::new("Label").with_text("hello"));
        assert!(out.contains("text:\"he…\""));

        let pipeline = RendererPipeline::from_config(&RendererConfig::default());
        let out = render(&pipeline, &TestView::new("Label").with_text("hello"));
        assert!(!out.contains("text:"));
    }

    #[test]
    fn test_full_default_line() {
        let view = TestView::new("ui.CheckBox")
            .with_id("remember_me")
            .with_size(200, 48)
            .focused()
            .with_text("Remember me")
            .with_checked(true);
        let out = render(&RendererPipeline::default(), &view);
        assert_eq!(
            out,
            "CheckBox { id:remember_me, 200×48px, focused, text-length:11, checked }"
        );
    }
}
