//! Configuration types for the tree builder

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Abort on the first unreadable entry instead of skipping it.
    pub strict: bool,
}
