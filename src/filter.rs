//! Subtree filters
//!
//! A filter has two scopes. [`ViewFilter::select_roots`] decides which root
//! views a scan enters at all; [`ViewFilter::matches`] is asked for every node
//! during the walk, and a node that fails it is dropped together with its
//! entire subtree, whatever its descendants would answer.

use std::collections::HashSet;

use glob::Pattern;

use crate::view::View;

pub trait ViewFilter {
    /// Whether `view` and its subtree should be rendered.
    fn matches(&self, view: &dyn View) -> bool;

    /// Select which root views to scan, preserving discovery order.
    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        roots.into_iter().filter(|root| self.matches(*root)).collect()
    }

    /// Whether [`matches`](Self::matches) actually rejects nodes. Root-only
    /// filters return `false`, and inverting them leaves the walk alone.
    fn filters_nodes(&self) -> bool {
        true
    }
}

impl<F: ViewFilter + ?Sized> ViewFilter for Box<F> {
    fn matches(&self, view: &dyn View) -> bool {
        (**self).matches(view)
    }

    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        (**self).select_roots(roots)
    }

    fn filters_nodes(&self) -> bool {
        (**self).filters_nodes()
    }
}

/// Matches every view.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllViews;

impl ViewFilter for AllViews {
    fn matches(&self, _view: &dyn View) -> bool {
        true
    }

    fn filters_nodes(&self) -> bool {
        false
    }
}

/// Rejects views whose id is blocked. Views without an id always pass.
#[derive(Debug, Clone, Default)]
pub struct SkipIdsFilter {
    ids: HashSet<String>,
    patterns: Vec<Pattern>,
}

impl SkipIdsFilter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            patterns: Vec::new(),
        }
    }

    /// Also reject ids matching a glob pattern such as `debug_*`.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, glob::PatternError> {
        self.patterns.push(Pattern::new(pattern)?);
        Ok(self)
    }

    /// Build from mixed specs: entries containing glob metacharacters become
    /// patterns, everything else is an exact id.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, glob::PatternError> {
        let mut filter = Self::default();
        for spec in specs {
            let spec = spec.as_ref();
            if spec.contains(['*', '?', '[']) {
                filter = filter.with_pattern(spec)?;
            } else {
                filter.ids.insert(spec.to_string());
            }
        }
        Ok(filter)
    }

    pub fn is_blocked(&self, id: &str) -> bool {
        self.ids.contains(id) || self.patterns.iter().any(|p| p.matches(id))
    }
}

impl ViewFilter for SkipIdsFilter {
    fn matches(&self, view: &dyn View) -> bool {
        view.id().is_none_or(|id| !self.is_blocked(id))
    }
}

/// Keeps only the root view holding window focus.
///
/// When no root is focused every root is kept, so the scan never comes back
/// empty just because focus is momentarily elsewhere. Below the root level
/// every node matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusedWindowFilter;

impl ViewFilter for FocusedWindowFilter {
    fn matches(&self, _view: &dyn View) -> bool {
        true
    }

    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        if !roots.iter().any(|root| root.has_window_focus()) {
            return roots;
        }
        roots
            .into_iter()
            .filter(|root| root.has_window_focus())
            .collect()
    }

    fn filters_nodes(&self) -> bool {
        false
    }
}

/// Both filters must match. Root selection narrows through `A` then `B`.
#[derive(Debug, Clone)]
pub struct And<A, B>(pub A, pub B);

impl<A: ViewFilter, B: ViewFilter> ViewFilter for And<A, B> {
    fn matches(&self, view: &dyn View) -> bool {
        self.0.matches(view) && self.1.matches(view)
    }

    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        self.1.select_roots(self.0.select_roots(roots))
    }

    fn filters_nodes(&self) -> bool {
        self.0.filters_nodes() || self.1.filters_nodes()
    }
}

/// Either filter must match.
#[derive(Debug, Clone)]
pub struct Or<A, B>(pub A, pub B);

impl<A: ViewFilter, B: ViewFilter> ViewFilter for Or<A, B> {
    fn matches(&self, view: &dyn View) -> bool {
        self.0.matches(view) || self.1.matches(view)
    }

    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        let left = self.0.select_roots(roots.clone());
        let right = self.1.select_roots(roots.clone());
        roots
            .into_iter()
            .filter(|root| contains(&left, *root) || contains(&right, *root))
            .collect()
    }

    fn filters_nodes(&self) -> bool {
        self.0.filters_nodes() && self.1.filters_nodes()
    }
}

/// Inverts a filter.
///
/// Root selection keeps the roots `F` would not select. Node matching is only
/// inverted when `F` filters nodes at all; otherwise every node matches.
#[derive(Debug, Clone)]
pub struct Not<F>(pub F);

impl<F: ViewFilter> ViewFilter for Not<F> {
    fn matches(&self, view: &dyn View) -> bool {
        !self.0.filters_nodes() || !self.0.matches(view)
    }

    fn select_roots<'a>(&self, roots: Vec<&'a dyn View>) -> Vec<&'a dyn View> {
        let selected = self.0.select_roots(roots.clone());
        roots
            .into_iter()
            .filter(|root| !contains(&selected, *root))
            .collect()
    }

    fn filters_nodes(&self) -> bool {
        self.0.filters_nodes()
    }
}

/// Combinators available on every filter.
pub trait ViewFilterExt: ViewFilter + Sized {
    fn and<F: ViewFilter>(self, other: F) -> And<Self, F> {
        And(self, other)
    }

    fn or<F: ViewFilter>(self, other: F) -> Or<Self, F> {
        Or(self, other)
    }

    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ViewFilter> ViewFilterExt for T {}

/// Identity check by address; views have no equality of their own.
fn contains(views: &[&dyn View], view: &dyn View) -> bool {
    views
        .iter()
        .any(|candidate| std::ptr::addr_eq(*candidate, view))
}
