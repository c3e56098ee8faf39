//! Root view discovery
//!
//! A scan without an explicit root asks a [`RootDiscovery`] for every live
//! root. How roots are found is platform business; [`WindowRegistry`] is the
//! explicit-registry version for hosts that simply know their windows.

use crate::error::Result;
use crate::view::View;

pub trait RootDiscovery {
    /// All currently live root views, in a stable order. May be empty.
    ///
    /// An error here is returned from the scan as is: it happens before any
    /// per-root isolation exists.
    fn root_views(&self) -> Result<Vec<&dyn View>>;
}

/// An ordered list of window roots registered by the host.
#[derive(Default)]
pub struct WindowRegistry {
    windows: Vec<Box<dyn View>>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, root: impl View) {
        self.windows.push(Box::new(root));
    }

    pub fn with(mut self, root: impl View) -> Self {
        self.register(root);
        self
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl RootDiscovery for WindowRegistry {
    fn root_views(&self) -> Result<Vec<&dyn View>> {
        Ok(self.windows.iter().map(|window| window.as_ref()).collect())
    }
}
