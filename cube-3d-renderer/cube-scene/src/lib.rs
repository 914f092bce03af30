//! Scene state for the spinning cube demo, expressed as plain data fed to a [`RenderBackend`].

pub mod animation;
pub mod backend;
pub mod camera;
pub mod errors;
pub mod primitives;
pub mod scene;
pub mod uniform;
pub mod viewport;

pub(crate) mod utils;

pub use animation::{FrameInput, ModelRotation};
pub use backend::{DrawCommand, RecordingBackend, RenderBackend};
pub use camera::LookAtCamera;
pub use errors::SceneError;
pub use scene::CubeScene;
pub use viewport::Size;

// Re-export the math core so users don't need to depend on it separately
pub use cube_math;
