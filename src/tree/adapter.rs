//! Capability contract between the renderer and a concrete node type

use crate::error::Result;

/// Everything [`TreeRenderer`](super::TreeRenderer) needs to know about a node type.
///
/// `N` is a cheap handle to a node (typically a shared reference). Adapters
/// must treat nodes they do not understand as childless rather than failing.
pub trait TreeAdapter<N: Copy> {
    fn child_count(&self, node: N) -> Result<usize>;

    /// Child at `index`, or `None` when the slot is out of range or vacant.
    fn child_at(&self, node: N, index: usize) -> Result<Option<N>>;

    /// Whether `node` and its subtree should be rendered.
    fn matches(&self, node: N) -> bool;

    /// Append the node's own text (no prefix, no trailing newline).
    fn render_node(&self, out: &mut String, node: N) -> Result<()>;
}
