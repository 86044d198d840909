/// Convenience result type used across Scenery.
pub type SceneryResult<T> = Result<T, SceneryError>;

/// Top-level error taxonomy for the IO-facing surfaces of the crate.
///
/// The config validator and manifest loader are total and never produce
/// an error; only the hot-reload watcher does.
#[derive(thiserror::Error, Debug)]
pub enum SceneryError {
    /// Problems starting or driving the hot-reload watcher.
    #[error("watch error: {0}")]
    Watch(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneryError {
    /// Build a [`SceneryError::Watch`] value.
    pub fn watch(msg: impl Into<String>) -> Self {
        Self::Watch(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
