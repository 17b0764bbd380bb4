use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 3-component float vector.
///
/// Direction vectors are unit length after [`Vec3::normalized`]. Normalizing
/// a zero vector divides by zero and the resulting NaN/Inf components
/// propagate to the caller; a NaN showing up in a matrix downstream means a
/// broken camera configuration, not something to recover from here.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Fixed world-space up axis used to derive camera bases.
    pub const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product. Parallel or zero operands yield the zero
    /// vector silently.
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scales to unit length. The division is unguarded: a zero-length input
    /// produces NaN components.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        Vec3::new(self.x / len, self.y / len, self.z / len)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f32) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_normalized_has_unit_length() {
        let cases = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 3.0),
            Vec3::new(-2.5, 4.0, 0.1),
            Vec3::new(0.001, 0.001, 0.001),
            Vec3::new(1000.0, -2000.0, 500.0),
        ];

        for v in cases {
            let n = v.normalized();
            assert!(
                (n.length() - 1.0).abs() < TOLERANCE,
                "expected unit length for {:?}, got {}",
                v,
                n.length()
            );
        }
    }

    #[test]
    fn test_normalized_zero_vector_propagates_nan() {
        let n = Vec3::ZERO.normalized();
        assert!(n.x.is_nan());
        assert!(n.y.is_nan());
        assert!(n.z.is_nan());
    }

    #[test]
    fn test_cross_is_orthogonal_to_operands() {
        let u = Vec3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(-4.0, 0.5, 2.0);
        let c = u.cross(v);

        assert!(c.dot(u).abs() < TOLERANCE);
        assert!(c.dot(v).abs() < TOLERANCE);
    }

    #[test]
    fn test_cross_is_anticommutative() {
        let u = Vec3::new(0.3, -1.2, 5.0);
        let v = Vec3::new(2.0, 2.0, -0.7);

        let uv = u.cross(v);
        let vu = v.cross(u);

        assert!((uv.x + vu.x).abs() < TOLERANCE);
        assert!((uv.y + vu.y).abs() < TOLERANCE);
        assert!((uv.z + vu.z).abs() < TOLERANCE);
    }

    #[test]
    fn test_cross_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = x.cross(y);

        assert!((z.x).abs() < TOLERANCE);
        assert!((z.y).abs() < TOLERANCE);
        assert!((z.z - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_cross_of_parallel_vectors_is_zero() {
        let u = Vec3::new(2.0, -1.0, 4.0);
        let c = u.cross(u * 3.0);

        assert_eq!(c, Vec3::ZERO);
    }

    #[test]
    fn test_scalar_multiply_and_add() {
        let mut pos = Vec3::new(1.0, 2.0, 3.0);
        pos += Vec3::new(0.5, 0.0, -1.0) * 2.0;

        assert_eq!(pos, Vec3::new(2.0, 2.0, 1.0));
    }

    #[test]
    fn test_negation() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));
    }
}
