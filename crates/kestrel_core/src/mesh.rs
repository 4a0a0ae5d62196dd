//! Indexed triangle meshes.
//!
//! Meshes are populated by a loader (see [`crate::obj`]) or built by hand and
//! turned into triangle primitives by the renderer.

use glam::Vec3;

/// Shared vertices plus a flat index list, three indices per face.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// World-space vertex positions
    pub positions: Vec<Vec3>,

    /// Per-vertex shading normals, parallel to `positions`
    pub normals: Option<Vec<Vec3>>,

    /// Counter-clockwise faces
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Build a mesh. Missing normals stay missing until
    /// [`Mesh::ensure_normals`] is called.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>, normals: Option<Vec<Vec3>>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Area-weighted average of the faces around each vertex.
    ///
    /// Face normals are left unnormalized before accumulation so larger
    /// faces weigh more. Winding is counter-clockwise, matching the flat
    /// normal `(p1 - p0) x (p2 - p0)` of a triangle primitive.
    pub fn smooth_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for [i0, i1, i2] in self.triangles() {
            let p0 = self.positions[i0];
            let face_normal = (self.positions[i1] - p0).cross(self.positions[i2] - p0);

            normals[i0] += face_normal;
            normals[i1] += face_normal;
            normals[i2] += face_normal;
        }

        for normal in &mut normals {
            // Isolated vertices and fully degenerate fans get an arbitrary up
            *normal = normal.try_normalize().unwrap_or(Vec3::Y);
        }

        normals
    }

    /// Replace the normals with [`Mesh::smooth_normals`].
    pub fn compute_normals(&mut self) {
        self.normals = Some(self.smooth_normals());
    }

    /// Compute normals unless there is already exactly one per vertex.
    pub fn ensure_normals(&mut self) {
        let count = self.normals.as_ref().map(Vec::len);
        if count != Some(self.positions.len()) {
            if let Some(count) = count {
                log::debug!(
                    "Mesh has {} normals for {} vertices, recomputing",
                    count,
                    self.positions.len()
                );
            }
            self.compute_normals();
        }
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Faces described by the index list, valid or not.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex index triplets of every well-formed triangle.
    ///
    /// Triangles referencing vertices out of range are skipped with a warning,
    /// as is a trailing partial triangle.
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let vertex_count = self.positions.len();
        let mut triangles = Vec::with_capacity(self.triangle_count());

        let chunks = self.indices.chunks_exact(3);
        if !chunks.remainder().is_empty() {
            log::warn!(
                "Ignoring {} trailing indices that do not form a triangle",
                chunks.remainder().len()
            );
        }

        for chunk in chunks {
            let face = [chunk[0] as usize, chunk[1] as usize, chunk[2] as usize];

            if face.iter().any(|&i| i >= vertex_count) {
                log::warn!(
                    "Invalid triangle indices: {:?}, vertex count: {}",
                    face,
                    vertex_count
                );
                continue;
            }

            triangles.push(face);
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        Mesh::new(positions, vec![0, 1, 2, 1, 3, 2], None)
    }

    #[test]
    fn test_mesh_creation() {
        let mesh = quad();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.has_normals());
    }

    #[test]
    fn test_compute_normals_ccw() {
        let mut mesh = quad();
        mesh.compute_normals();

        // CCW triangles in the XY plane face +Z
        for normal in mesh.normals.as_ref().unwrap() {
            assert!((*normal - Vec3::Z).length() < 0.001);
        }
    }

    #[test]
    fn test_smooth_normals_leaves_mesh_alone() {
        let mut mesh = quad();
        mesh.normals = Some(vec![Vec3::X; 4]);

        let normals = mesh.smooth_normals();
        assert_eq!(normals.len(), 4);
        assert!(normals.iter().all(|n| (*n - Vec3::Z).length() < 0.001));
        assert_eq!(mesh.normals.as_ref().unwrap()[0], Vec3::X);
    }

    #[test]
    fn test_smooth_normals_isolated_vertex() {
        let mut mesh = quad();
        mesh.positions.push(Vec3::new(5.0, 5.0, 5.0));

        assert_eq!(mesh.smooth_normals()[4], Vec3::Y);
    }

    #[test]
    fn test_ensure_normals_replaces_mismatched() {
        let mut mesh = quad();
        mesh.normals = Some(vec![Vec3::X]);
        mesh.ensure_normals();

        let normals = mesh.normals.as_ref().unwrap();
        assert_eq!(normals.len(), 4);
        assert!((normals[0] - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_ensure_normals_keeps_matching() {
        let mut mesh = quad();
        mesh.normals = Some(vec![Vec3::X; 4]);
        mesh.ensure_normals();

        assert_eq!(mesh.normals.as_ref().unwrap()[0], Vec3::X);
    }

    #[test]
    fn test_triangles_skips_invalid() {
        let mut mesh = quad();
        mesh.indices.extend_from_slice(&[0, 1, 9, 2]);

        let triangles = mesh.triangles();
        assert_eq!(triangles, vec![[0, 1, 2], [1, 3, 2]]);
    }
}
