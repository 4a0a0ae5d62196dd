//! Errors raised while loading and building scenes.
//!
//! Intersection and shading never fail; only I/O and scene assembly do.

use thiserror::Error;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OBJ load error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Mesh has no triangles: {0}")]
    EmptyMesh(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
