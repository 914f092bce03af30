//! Small linear algebra core for feeding camera and model matrices to a renderer.
//!
//! [`Mat4`] is column-major and exposes its elements as a flat `[f32; 16]`
//! ([`Mat4::as_cols_array`]) or raw bytes ([`Mat4::as_bytes`]) for uniform uploads.

pub mod errors;
pub mod matrix;
pub mod transform;
pub mod vector;

pub use errors::MathError;
pub use matrix::Mat4;
pub use transform::{make_look_at, make_ortho_2d, rotate_x, rotate_z, translate};
pub use vector::{cross, dot, Vec3};
