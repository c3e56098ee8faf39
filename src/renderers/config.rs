//! Renderer configuration

/// Selects the renderer preset used for a scan.
#[derive(Debug, Clone, Default)]
pub struct RendererConfig {
    /// Render literal text content, which may contain personal data.
    pub include_pii: bool,
    /// Ellipsize rendered text longer than this many characters.
    pub text_max_length: Option<usize>,
}
