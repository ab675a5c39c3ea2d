use thiserror::Error;

/// Errors raised by the host-side models.
///
/// Missing DOM elements are not represented here: a widget whose markup is absent
/// is skipped, not failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown entity type `{0}`")]
    UnknownEntity(String),

    #[error("unknown surface `{0}`")]
    UnknownSurface(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
