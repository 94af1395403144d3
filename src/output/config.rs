//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Render sizes as `1.5K` instead of `1536 bytes`.
    pub human_sizes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            human_sizes: false,
        }
    }
}
