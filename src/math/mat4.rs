use super::Vec3;

/// 4x4 float matrix, row-major: entry (row, col) lives at `row * 4 + col`.
///
/// All transform helpers here follow the same storage convention, so a chain
/// of [`Mat4::mul_in_place`] calls composes transforms with the rightmost
/// matrix applied to a vertex first.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Mat4 = Mat4 { m: [0.0; 16] };

    pub const fn from_rows(m: [f32; 16]) -> Self {
        Self { m }
    }

    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.m[row * 4 + col] = value;
    }

    pub fn as_rows(&self) -> &[f32; 16] {
        &self.m
    }

    /// In-place matrix product: `self <- self * rhs`.
    ///
    /// Each destination row is copied before being overwritten, so the
    /// destination aliasing itself is safe. `rhs` must not alias `self`;
    /// Rust's borrow rules already rule that out for this signature, and the
    /// non-mutating [`Mat4::mul`] exists for callers that want a fresh value.
    pub fn mul_in_place(&mut self, rhs: &Mat4) {
        for row in 0..4 {
            let mut row_copy = [0.0f32; 4];
            row_copy.copy_from_slice(&self.m[row * 4..row * 4 + 4]);
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += row_copy[k] * rhs.m[k * 4 + col];
                }
                self.m[row * 4 + col] = sum;
            }
        }
    }

    /// Non-mutating product: returns `self * rhs`.
    pub fn mul(&self, rhs: &Mat4) -> Mat4 {
        let mut out = *self;
        out.mul_in_place(rhs);
        out
    }

    /// Symmetric perspective projection for the given viewport and vertical
    /// field of view (radians).
    ///
    /// Degenerate parameters (`near == far`, `fov` of 0 or pi, zero height)
    /// divide by zero and produce Inf/NaN entries; callers validate camera
    /// configuration once at startup instead of paying for checks per frame.
    pub fn perspective(width: f32, height: f32, fov: f32, near_clip: f32, far_clip: f32) -> Mat4 {
        let aspect_ratio = width / height;
        let y_scale = 1.0 / (fov / 2.0).tan();
        let x_scale = y_scale / aspect_ratio;
        let frustum_length = far_clip - near_clip;

        let mut mat = Mat4::ZERO;
        mat.set(0, 0, x_scale);
        mat.set(1, 1, y_scale);
        mat.set(2, 2, -(far_clip + near_clip) / frustum_length);
        mat.set(2, 3, -(2.0 * near_clip * far_clip) / frustum_length);
        mat.set(3, 2, -1.0);
        mat
    }

    /// View matrix from camera position and orthonormal basis.
    ///
    /// Rows 0..2 of the rotation part are `right`, `up`, `look`; the
    /// translation part moves the camera position to the origin. Composed as
    /// rotation * translation so world space is translated first, then
    /// rotated into the camera frame.
    pub fn look_at(position: Vec3, right: Vec3, up: Vec3, look: Vec3) -> Mat4 {
        let mut rotation = Mat4::IDENTITY;
        for (row, axis) in [right, up, look].into_iter().enumerate() {
            rotation.set(row, 0, axis.x);
            rotation.set(row, 1, axis.y);
            rotation.set(row, 2, axis.z);
        }

        let mut translation = Mat4::IDENTITY;
        translation.set(0, 3, -position.x);
        translation.set(1, 3, -position.y);
        translation.set(2, 3, -position.z);

        rotation.mul_in_place(&translation);
        rotation
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Mat4 {
        let (sin, cos) = angle.sin_cos();
        let mut mat = Mat4::IDENTITY;
        mat.set(1, 1, cos);
        mat.set(1, 2, -sin);
        mat.set(2, 1, sin);
        mat.set(2, 2, cos);
        mat
    }

    pub fn translation(offset: Vec3) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        mat.set(0, 3, offset.x);
        mat.set(1, 3, offset.y);
        mat.set(2, 3, offset.z);
        mat
    }

    pub fn scale_uniform(factor: f32) -> Mat4 {
        let mut mat = Mat4::IDENTITY;
        mat.set(0, 0, factor);
        mat.set(1, 1, factor);
        mat.set(2, 2, factor);
        mat
    }

    /// Transforms a point (w = 1), returning the xyzw result.
    pub fn transform_point(&self, p: Vec3) -> [f32; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0f32; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            for (col, component) in v.iter().enumerate() {
                *slot += self.at(row, col) * component;
            }
        }
        out
    }

    /// Column-major 2D array for GPU upload.
    ///
    /// WGSL `mat4x4<f32>` uniforms are column-major, so the row-major storage
    /// is transposed here (the same job the GL transpose flag used to do).
    pub fn to_gpu(&self) -> [[f32; 4]; 4] {
        let mut cols = [[0.0f32; 4]; 4];
        for (col, out) in cols.iter_mut().enumerate() {
            for (row, slot) in out.iter_mut().enumerate() {
                *slot = self.at(row, col);
            }
        }
        cols
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
