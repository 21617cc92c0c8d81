use json_mapper_key_path::KeyPathError;
use thiserror::Error;

/// Reasons a top-level mapping call produced nothing.
///
/// Field-level problems never surface here; they are collected in
/// [`Diagnostics`](crate::Diagnostics) and the call still succeeds.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("no JSON source was given")]
    Absent,
    #[error("json codec error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{type_name} could not be constructed from the source object")]
    Construction { type_name: &'static str },
    #[error(transparent)]
    KeyPath(#[from] KeyPathError),
}
