use cube_math::Mat4;
use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// Name of the view matrix uniform in the cube shader
pub const VIEW_UNIFORM: &str = "lookat";
/// Name of the model matrix uniform in the cube shader
pub const MODEL_UNIFORM: &str = "model";
/// Name of the optional orthographic projection uniform
pub const PROJECTION_UNIFORM: &str = "projection";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, IntoStaticStr, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UniformKind {
    Mat4,
}

impl UniformKind {
    /// Number of `f32`s the uniform occupies
    pub fn component_count(&self) -> usize {
        match self {
            Self::Mat4 => 16,
        }
    }
}

/// A uniform value ready to be written into a shader program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformUpload {
    pub name: String,
    pub kind: UniformKind,
    pub data: [f32; 16],
}

impl UniformUpload {
    pub fn mat4(name: impl Into<String>, matrix: &Mat4) -> Self {
        UniformUpload {
            name: name.into(),
            kind: UniformKind::Mat4,
            data: matrix.to_cols_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data[..self.kind.component_count()])
    }
}
