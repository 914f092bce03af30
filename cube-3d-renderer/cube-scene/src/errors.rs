use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("Camera eye and target are the same point")]
    CoincidentEyeAndTarget,
    #[error("Camera up vector has zero length")]
    ZeroLengthUp,
    #[error("Camera up vector is parallel to the view direction")]
    UpParallelToView,
    #[error("Viewport must not be zero-sized (got {0}x{1})")]
    ZeroSizedViewport(u32, u32),
    #[error("Orthographic half height must be a positive finite number (got {0})")]
    InvalidOrthographicHalfHeight(f32),
    #[error("Uniform {0} is not known by the backend")]
    UnknownUniform(String),
    #[error("Mesh has not been uploaded to the backend")]
    MeshNotUploaded,
}

pub type Result<T> = std::result::Result<T, SceneError>;
