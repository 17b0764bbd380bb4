use crate::math::{Mat4, Vec3};

/// Per-frame uniform data: view/projection transforms plus the fixed
/// ambient + diffuse light rig.
///
/// Matrices are transposed to column-major on the way in ([`Mat4::to_gpu`]);
/// vec3 fields are padded out to vec4 for WGSL alignment.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub ambient: [f32; 4],
    pub light_pos: [f32; 4],
    pub light_color: [f32; 4],
}

impl FrameUniform {
    pub fn new(view: &Mat4, projection: &Mat4, ambient: Vec3, light_pos: Vec3, light_color: Vec3) -> Self {
        Self {
            view: view.to_gpu(),
            projection: projection.to_gpu(),
            ambient: pad(ambient),
            light_pos: pad(light_pos),
            light_color: pad(light_color),
        }
    }
}

/// Per-object uniform data: model transform and the lighting toggle (the
/// light marker cube renders unlit).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
    pub lit: u32,
    pub _pad: [u32; 3],
}

impl ModelUniform {
    pub fn new(model: &Mat4, lit: bool) -> Self {
        Self {
            model: model.to_gpu(),
            lit: lit as u32,
            _pad: [0; 3],
        }
    }
}

fn pad(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<FrameUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<ModelUniform>() % 16, 0);
    }

    #[test]
    fn test_model_uniform_carries_transposed_matrix() {
        let model = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let uniform = ModelUniform::new(&model, true);

        // Row-major column 3 becomes column-major column 3's first entries.
        assert_eq!(uniform.model[3][0], 1.0);
        assert_eq!(uniform.model[3][1], 2.0);
        assert_eq!(uniform.model[3][2], 3.0);
        assert_eq!(uniform.lit, 1);
    }
}
