//! Configuration types for directory walking

/// What to do when an entry cannot be classified or a subdirectory cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatErrorPolicy {
    /// Fail the whole render with the underlying error.
    #[default]
    Abort,
    /// Leave the entry out, log a warning and keep walking.
    Skip,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub on_stat_error: StatErrorPolicy,
    /// Refuse to descend into a directory that is already one of its own ancestors.
    /// Only effective on platforms that expose inode numbers.
    pub cycle_guard: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            on_stat_error: StatErrorPolicy::Abort,
            cycle_guard: true,
        }
    }
}
