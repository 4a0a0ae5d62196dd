//! Wavefront OBJ loading.
//!
//! All models in a file are merged into a single [`Mesh`]. Faces are
//! triangulated and vertices re-indexed so positions and normals share one
//! index buffer.

use std::io::BufReader;
use std::path::Path;

use glam::Vec3;

use crate::error::{SceneError, SceneResult};
use crate::mesh::Mesh;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ..Default::default()
    }
}

/// Load an OBJ file from disk.
pub fn load_obj(path: impl AsRef<Path>) -> SceneResult<Mesh> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    mesh_from_models(models, &path.display().to_string())
}

/// Load OBJ data held in memory. Material libraries are ignored.
pub fn load_obj_from_str(source: &str) -> SceneResult<Mesh> {
    let mut reader = BufReader::new(source.as_bytes());
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;
    mesh_from_models(models, "<memory>")
}

fn mesh_from_models(models: Vec<tobj::Model>, name: &str) -> SceneResult<Mesh> {
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();
    let mut all_have_normals = true;

    for model in &models {
        let mesh = &model.mesh;
        let offset = positions.len() as u32;

        positions.extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(mesh.indices.iter().map(|i| i + offset));

        if mesh.normals.len() == mesh.positions.len() {
            normals.extend(mesh.normals.chunks_exact(3).map(Vec3::from_slice));
        } else {
            all_have_normals = false;
        }
    }

    if indices.len() < 3 {
        return Err(SceneError::EmptyMesh(name.to_string()));
    }

    let normals = (all_have_normals && normals.len() == positions.len()).then_some(normals);

    log::debug!(
        "Loaded OBJ {}: {} models, {} vertices, {} triangles, normals: {}",
        name,
        models.len(),
        positions.len(),
        indices.len() / 3,
        normals.is_some()
    );

    Ok(Mesh::new(positions, indices, normals))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    #[test]
    fn test_load_quad_triangulates() {
        let mesh = load_obj_from_str(QUAD).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn test_load_with_normals() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 1
f 1//1 2//1 3//1
";
        let mesh = load_obj_from_str(source).unwrap();

        assert_eq!(mesh.triangle_count(), 1);
        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals.len(), mesh.vertex_count());
        assert!(normals.iter().all(|n| *n == Vec3::Z));
    }

    #[test]
    fn test_load_empty_is_error() {
        let result = load_obj_from_str("v 0 0 0\n");
        assert!(matches!(result, Err(SceneError::EmptyMesh(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_obj("does/not/exist.obj");
        assert!(matches!(result, Err(SceneError::Obj(_))));
    }
}
