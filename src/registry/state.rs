use std::fmt;

/// Lifecycle of an [`super::ItemRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistryState {
    /// Nothing loaded yet, or disposed
    #[default]
    Uninitialized,
    Loading,
    Ready,
    /// Last load failed with this message; items are left as they were
    Failed(String),
}

impl RegistryState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, RegistryState::Ready)
    }
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryState::Uninitialized => f.write_str("uninitialized"),
            RegistryState::Loading => f.write_str("loading"),
            RegistryState::Ready => f.write_str("ready"),
            RegistryState::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}
