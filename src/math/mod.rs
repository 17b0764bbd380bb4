mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
