//! Scanning view hierarchies into text
//!
//! A scan resolves the roots to render (one explicit root, or every root a
//! [`RootDiscovery`] reports), lets the filter pick among them, and renders
//! each survivor into its own titled section:
//!
//! ```text
//! Main window:
//! window-focus:true
//! DecorView { 1080×1920px }
//! ├── Toolbar { id:toolbar, 1080×160px }
//! └── Label { id:greeting, text-length:5 }
//! ```
//!
//! Sections are separated by a blank line. A root whose rendering fails, by
//! error or by panic, gets an `Exception when going through view hierarchy`
//! line at the top of its section and the scan moves on to the next root.

use std::any::Any;
use std::fmt::Write;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, trace};

use crate::discovery::RootDiscovery;
use crate::error::{Result, ScanError};
use crate::filter::{AllViews, ViewFilter};
use crate::renderers::RendererPipeline;
use crate::tree::{TreeAdapter, TreeRenderer};
use crate::view::View;

/// Start of the line reporting a failed root.
pub const EXCEPTION_PREFIX: &str = "Exception when going through view hierarchy: ";

/// Connects views to the generic tree renderer.
struct ViewTreeAdapter<'s> {
    renderers: &'s RendererPipeline,
    filter: &'s dyn ViewFilter,
}

impl<'a> TreeAdapter<&'a dyn View> for ViewTreeAdapter<'_> {
    fn child_count(&self, node: &'a dyn View) -> Result<usize> {
        node.child_count()
    }

    fn child_at(&self, node: &'a dyn View, index: usize) -> Result<Option<&'a dyn View>> {
        node.child_at(index)
    }

    fn matches(&self, node: &'a dyn View) -> bool {
        self.filter.matches(node)
    }

    fn render_node(&self, out: &mut String, node: &'a dyn View) -> Result<()> {
        self.renderers.render_view(out, node)
    }
}

/// Scans view hierarchies with a fixed renderer pipeline and filter.
///
/// Holds no state between scans; the same scanner can be reused.
///
/// A panic inside a `View` or an extractor is caught at the root boundary
/// and reported in the text like any other failure. The process panic hook
/// still runs first, so hosts that want a quiet stderr install their own
/// hook around the scan, e.g. with [`with_silenced_panics`].
pub struct Scanner {
    renderers: RendererPipeline,
    filter: Box<dyn ViewFilter>,
}

impl Scanner {
    /// Scanner with the no-PII renderers and no filtering.
    pub fn new() -> Self {
        Self {
            renderers: RendererPipeline::defaults_no_pii(),
            filter: Box::new(AllViews),
        }
    }

    pub fn with_renderers(mut self, renderers: RendererPipeline) -> Self {
        self.renderers = renderers;
        self
    }

    pub fn with_filter(mut self, filter: impl ViewFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Scan `root` if given, otherwise every root `discovery` reports.
    ///
    /// Only a discovery failure is returned as an error.
    pub fn scan(&self, root: Option<&dyn View>, discovery: &dyn RootDiscovery) -> Result<String> {
        match root {
            Some(root) => Ok(self.scan_view(root)),
            None => self.scan_discovered(discovery),
        }
    }

    pub fn scan_discovered(&self, discovery: &dyn RootDiscovery) -> Result<String> {
        let roots = discovery.root_views()?;
        Ok(self.scan_roots(roots))
    }

    pub fn scan_view(&self, root: &dyn View) -> String {
        self.scan_roots(vec![root])
    }

    /// Render the roots the filter selects, in order. Never fails.
    pub fn scan_roots(&self, roots: Vec<&dyn View>) -> String {
        let candidates = roots.len();
        let selected = self.filter.select_roots(roots);
        debug!(
            "scanning {} of {} root views with renderers {:?}",
            selected.len(),
            candidates,
            self.renderers.names()
        );

        let renderer = TreeRenderer::new(ViewTreeAdapter {
            renderers: &self.renderers,
            filter: self.filter.as_ref(),
        });

        let mut out = String::new();
        for root in selected {
            if !out.is_empty() {
                out.push('\n');
            }
            render_section(&mut out, &renderer, root);
        }
        out
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan with explicit renderers and filter.
///
/// When `root` is `None` the roots come from `discovery`; its error is the
/// only one this returns.
pub fn scan(
    root: Option<&dyn View>,
    discovery: &dyn RootDiscovery,
    renderers: RendererPipeline,
    filter: impl ViewFilter + 'static,
) -> Result<String> {
    Scanner::new()
        .with_renderers(renderers)
        .with_filter(filter)
        .scan(root, discovery)
}

/// Scan a single root with the default no-PII renderers and no filtering.
pub fn scan_view(root: &dyn View) -> String {
    Scanner::new().scan_view(root)
}

/// Title line for a root: its window title, or its full type name.
pub fn section_title(root: &dyn View) -> &str {
    match root.window_title() {
        Some(title) if !title.is_empty() => title,
        _ => root.type_name(),
    }
}

/// Run `f` with the process panic hook silenced, restoring it afterwards.
///
/// Panics caught during a scan then show up only in the scan text. The hook
/// is process-wide, so other threads panicking meanwhile are silenced too.
pub fn with_silenced_panics<T>(f: impl FnOnce() -> T) -> T {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    panic::set_hook(previous);
    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

fn render_section(out: &mut String, renderer: &TreeRenderer<ViewTreeAdapter<'_>>, root: &dyn View) {
    let title = section_title(root);
    trace!("rendering section '{}'", title);
    out.push_str(title);
    out.push_str(":\n");

    let start = out.len();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let _ = writeln!(out, "window-focus:{}", root.has_window_focus());
        renderer.render(out, root)
    }));

    let failure = match outcome {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e),
        Err(payload) => Some(ScanError::Panicked(panic_message(payload.as_ref()))),
    };
    if let Some(e) = failure {
        // An extractor can fail halfway through a node line.
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.insert_str(start, &format!("{}{}\n", EXCEPTION_PREFIX, e));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
