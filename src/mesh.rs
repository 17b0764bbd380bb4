/// Vertex format shared by every mesh: position, texture coordinates,
/// face normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn vertex(position: [f32; 3], uv: [f32; 2], normal: [f32; 3]) -> Vertex {
    Vertex {
        position,
        uv,
        normal,
    }
}

/// CPU-side mesh data, ready for buffer upload.
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Unit cube centered on the origin: four vertices per face so each face
/// carries its own normal and UVs, 36 indices.
pub fn cube() -> MeshData {
    let vertices = vec![
        // -Z face
        vertex([0.5, 0.5, -0.5], [0.0, 1.0], [0.0, 0.0, -1.0]),
        vertex([0.5, -0.5, -0.5], [0.0, 0.0], [0.0, 0.0, -1.0]),
        vertex([-0.5, -0.5, -0.5], [1.0, 0.0], [0.0, 0.0, -1.0]),
        vertex([-0.5, 0.5, -0.5], [1.0, 1.0], [0.0, 0.0, -1.0]),
        // +Z face
        vertex([0.5, 0.5, 0.5], [1.0, 1.0], [0.0, 0.0, 1.0]),
        vertex([0.5, -0.5, 0.5], [1.0, 0.0], [0.0, 0.0, 1.0]),
        vertex([-0.5, -0.5, 0.5], [0.0, 0.0], [0.0, 0.0, 1.0]),
        vertex([-0.5, 0.5, 0.5], [0.0, 1.0], [0.0, 0.0, 1.0]),
        // +X face
        vertex([0.5, 0.5, -0.5], [1.0, 1.0], [1.0, 0.0, 0.0]),
        vertex([0.5, -0.5, -0.5], [1.0, 0.0], [1.0, 0.0, 0.0]),
        vertex([0.5, -0.5, 0.5], [0.0, 0.0], [1.0, 0.0, 0.0]),
        vertex([0.5, 0.5, 0.5], [0.0, 1.0], [1.0, 0.0, 0.0]),
        // -X face
        vertex([-0.5, 0.5, -0.5], [0.0, 1.0], [-1.0, 0.0, 0.0]),
        vertex([-0.5, -0.5, -0.5], [0.0, 0.0], [-1.0, 0.0, 0.0]),
        vertex([-0.5, -0.5, 0.5], [1.0, 0.0], [-1.0, 0.0, 0.0]),
        vertex([-0.5, 0.5, 0.5], [1.0, 1.0], [-1.0, 0.0, 0.0]),
        // -Y face
        vertex([0.5, -0.5, -0.5], [1.0, 0.0], [0.0, -1.0, 0.0]),
        vertex([-0.5, -0.5, -0.5], [0.0, 0.0], [0.0, -1.0, 0.0]),
        vertex([-0.5, -0.5, 0.5], [0.0, 1.0], [0.0, -1.0, 0.0]),
        vertex([0.5, -0.5, 0.5], [1.0, 1.0], [0.0, -1.0, 0.0]),
        // +Y face
        vertex([0.5, 0.5, -0.5], [0.0, 0.0], [0.0, 1.0, 0.0]),
        vertex([-0.5, 0.5, -0.5], [1.0, 0.0], [0.0, 1.0, 0.0]),
        vertex([-0.5, 0.5, 0.5], [1.0, 1.0], [0.0, 1.0, 0.0]),
        vertex([0.5, 0.5, 0.5], [0.0, 1.0], [0.0, 1.0, 0.0]),
    ];

    let indices = vec![
        0, 1, 3, 1, 2, 3, // -Z
        4, 5, 7, 5, 6, 7, // +Z
        8, 9, 10, 8, 10, 11, // +X
        12, 13, 14, 12, 14, 15, // -X
        16, 17, 18, 16, 18, 19, // -Y
        20, 21, 22, 20, 22, 23, // +Y
    ];

    MeshData { vertices, indices }
}

/// Ground quad at y = -1, extent +-5, UVs running to 10 so a repeat-wrapped
/// texture tiles ten times across it.
pub fn ground_plane() -> MeshData {
    let vertices = vec![
        vertex([5.0, -1.0, 5.0], [10.0, 10.0], [0.0, 1.0, 0.0]),
        vertex([5.0, -1.0, -5.0], [10.0, 0.0], [0.0, 1.0, 0.0]),
        vertex([-5.0, -1.0, -5.0], [0.0, 0.0], [0.0, 1.0, 0.0]),
        vertex([-5.0, -1.0, 5.0], [0.0, 10.0], [0.0, 1.0, 0.0]),
    ];

    let indices = vec![0, 1, 3, 1, 2, 3];

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_per_face_vertices() {
        let mesh = cube();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn test_cube_indices_in_range() {
        let mesh = cube();
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_cube_normals_are_axis_aligned_unit() {
        let mesh = cube();
        for v in &mesh.vertices {
            let [x, y, z] = v.normal;
            let len_sq = x * x + y * y + z * z;
            assert!((len_sq - 1.0).abs() < 1e-6);
            // Exactly one non-zero component per face normal.
            let non_zero = [x, y, z].iter().filter(|c| **c != 0.0).count();
            assert_eq!(non_zero, 1);
        }
    }

    #[test]
    fn test_ground_plane_lies_at_floor_height() {
        let mesh = ground_plane();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert!(mesh.vertices.iter().all(|v| v.position[1] == -1.0));
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn test_ground_uvs_tile() {
        let mesh = ground_plane();
        let max_u = mesh.vertices.iter().map(|v| v.uv[0]).fold(0.0, f32::max);
        assert_eq!(max_u, 10.0);
    }
}
