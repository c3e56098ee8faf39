//! Type-agnostic tree pretty-printing
//!
//! This module knows nothing about views. It walks any tree exposed through a
//! [`TreeAdapter`] and writes one line per node:
//!
//! - `TreeAdapter`: the capability contract (children, filtering, node line)
//! - `TreeRenderer`: depth-first, pre-order rendering with box-drawing connectors

mod adapter;
mod renderer;
mod utils;

pub use adapter::TreeAdapter;
pub use renderer::TreeRenderer;
pub use utils::{child_prefix, connector};
