//! Treeshot - pretty-print live UI hierarchies for debugging
//!
//! A scan turns one or more view trees into indented text, one titled section
//! per root:
//!
//! ```text
//! Login:
//! window-focus:true
//! DecorView { 1080×1920px }
//! ├── EditText { id:username, focused, text-length:4, ime-target }
//! └── CheckBox { id:remember, checked }
//! ```
//!
//! Hosts implement [`View`] for their node type and either pass a root to
//! [`scan_view`] or register roots with a [`RootDiscovery`].

pub mod discovery;
pub mod error;
pub mod filter;
pub mod output;
pub mod renderers;
pub mod scan;
pub mod snapshot;
pub mod tree;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use discovery::{RootDiscovery, WindowRegistry};
pub use error::{ScanError, SnapshotError};
pub use filter::{AllViews, FocusedWindowFilter, SkipIdsFilter, ViewFilter, ViewFilterExt};
pub use output::{ColorWhen, OutputConfig, print_scan, write_scan};
pub use renderers::{
    AttributeAppender, RendererConfig, RendererPipeline, StateRenderer, renderer_for,
};
pub use scan::{Scanner, scan, scan_view, with_silenced_panics};
pub use snapshot::{Snapshot, SnapshotView};
pub use tree::{TreeAdapter, TreeRenderer};
pub use view::{Size, View, Visibility};
