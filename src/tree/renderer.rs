//! Recursive tree pretty-printer

use crate::error::Result;

use super::adapter::TreeAdapter;
use super::utils::{child_prefix, connector};

/// Renders a tree into indented text, one line per matching node.
///
/// The root line carries no prefix. Each child line is prefixed with the
/// inherited prefix plus a `├── ` or `└── ` connector, where "last" is decided
/// among the children that survive filtering. A child that fails
/// [`TreeAdapter::matches`] is skipped together with its whole subtree.
pub struct TreeRenderer<A> {
    adapter: A,
}

impl<A> TreeRenderer<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Render `root` and its matching descendants into `out`.
    ///
    /// Errors from the adapter abort the walk; whatever was written before the
    /// failure stays in `out`.
    pub fn render<N: Copy>(&self, out: &mut String, root: N) -> Result<()>
    where
        A: TreeAdapter<N>,
    {
        if !self.adapter.matches(root) {
            return Ok(());
        }
        self.render_recursive(out, root, "", None)
    }

    /// `position` is `None` for the root and `Some(is_last)` for children.
    fn render_recursive<N: Copy>(
        &self,
        out: &mut String,
        node: N,
        prefix: &str,
        position: Option<bool>,
    ) -> Result<()>
    where
        A: TreeAdapter<N>,
    {
        out.push_str(prefix);
        if let Some(is_last) = position {
            out.push_str(connector(is_last));
        }
        self.adapter.render_node(out, node)?;
        out.push('\n');

        let children = self.matching_children(node)?;
        let next_prefix = match position {
            Some(is_last) => child_prefix(prefix, is_last),
            None => String::new(),
        };

        let total = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.render_recursive(out, child, &next_prefix, Some(i + 1 == total))?;
        }
        Ok(())
    }

    fn matching_children<N: Copy>(&self, node: N) -> Result<Vec<N>>
    where
        A: TreeAdapter<N>,
    {
        let count = self.adapter.child_count(node)?;
        let mut children = Vec::with_capacity(count);
        for index in 0..count {
            if let Some(child) = self.adapter.child_at(node, index)? {
                if self.adapter.matches(child) {
                    children.push(child);
                }
            }
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;

    /// Minimal node type unrelated to views, to keep the renderer honest.
    struct Node {
        name: &'static str,
        hidden: bool,
        broken: bool,
        children: Vec<Node>,
    }

    fn node(name: &'static str, children: Vec<Node>) -> Node {
        Node {
            name,
            hidden: false,
            broken: false,
            children,
        }
    }

    fn hidden(name: &'static str, children: Vec<Node>) -> Node {
        Node {
            hidden: true,
            ..node(name, children)
        }
    }

    fn broken(name: &'static str) -> Node {
        Node {
            broken: true,
            ..node(name, Vec::new())
        }
    }

    struct NodeAdapter;

    impl<'a> TreeAdapter<&'a Node> for NodeAdapter {
        fn child_count(&self, node: &'a Node) -> Result<usize> {
            if node.broken {
                return Err(ScanError::Detached(node.name.to_string()));
            }
            Ok(node.children.len())
        }

        fn child_at(&self, node: &'a Node, index: usize) -> Result<Option<&'a Node>> {
            Ok(node.children.get(index))
        }

        fn matches(&self, node: &'a Node) -> bool {
            !node.hidden
        }

        fn render_node(&self, out: &mut String, node: &'a Node) -> Result<()> {
            out.push_str(node.name);
            Ok(())
        }
    }

    fn render(root: &Node) -> Result<String> {
        let mut out = String::new();
        TreeRenderer::new(NodeAdapter).render(&mut out, root)?;
        Ok(out)
    }

    #[test]
    fn test_single_node_renders_one_line() {
        let out = render(&node("root", vec![])).unwrap();
        assert_eq!(out, "root\n");
    }

    #[test]
    fn test_nested_connectors() {
        let tree = node(
            "root",
            vec![
                node("a", vec![node("a1", vec![]), node("a2", vec![])]),
                node("b", vec![node("b1", vec![])]),
            ],
        );
        let out = render(&tree).unwrap();
        assert_eq!(
            out,
            "root\n\
             ├── a\n\
             │   ├── a1\n\
             │   └── a2\n\
             └── b\n\
             \u{20}   └── b1\n"
        );
    }

    #[test]
    fn test_hidden_node_drops_whole_subtree() {
        let tree = node(
            "root",
            vec![
                node("kept", vec![]),
                hidden("gone", vec![node("would_match", vec![])]),
            ],
        );
        let out = render(&tree).unwrap();
        assert!(out.contains("kept"));
        assert!(!out.contains("gone"));
        assert!(!out.contains("would_match"));
    }

    #[test]
    fn test_last_marker_ignores_filtered_siblings() {
        let tree = node("root", vec![node("a", vec![]), hidden("b", vec![])]);
        let out = render(&tree).unwrap();
        assert_eq!(out, "root\n└── a\n");
    }

    #[test]
    fn test_hidden_root_renders_nothing() {
        let out = render(&hidden("root", vec![node("a", vec![])])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_keeps_partial_output() {
        let tree = node("root", vec![node("a", vec![]), broken("b")]);
        let mut out = String::new();
        let result = TreeRenderer::new(NodeAdapter).render(&mut out, &tree);
        assert_eq!(result, Err(ScanError::Detached("b".to_string())));
        assert_eq!(out, "root\n├── a\n└── b\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let tree = node("root", vec![node("a", vec![node("x", vec![])]), node("b", vec![])]);
        assert_eq!(render(&tree).unwrap(), render(&tree).unwrap());
    }
}
