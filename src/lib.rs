pub mod camera;
pub mod cli;
pub mod config;
pub mod frame;
pub mod math;
pub mod mesh;
pub mod renderer;
pub mod texture;
pub mod types;

pub use camera::{compute_basis, Basis, BasisInput, Camera};
pub use math::{Mat4, Vec3};
