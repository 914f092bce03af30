use derive_more::Deref;
use serde::Serialize;
use tracing::trace;

use crate::errors::{Result, SceneError};
use crate::primitives::vertex::{ColoredVertex, VertexAttribute};
use crate::uniform::UniformUpload;
use crate::viewport::Size;

/// The graphics API the scene renders through.
///
/// Implementations own every GPU resource; the scene only hands them plain data.
pub trait RenderBackend {
    /// Uploads the vertex and index buffers used by subsequent draws.
    fn upload_mesh(&mut self, vertices: &[ColoredVertex], indices: &[u32]) -> Result<()>;

    fn resize(&mut self, size: Size) -> Result<()>;

    fn clear(&mut self, color: [f32; 4]) -> Result<()>;

    fn set_uniform(&mut self, upload: &UniformUpload) -> Result<()>;

    /// Draws `index_count` indices of the uploaded mesh as triangles.
    fn draw_indexed(&mut self, index_count: u32) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum DrawCommand {
    UploadMesh {
        vertex_count: usize,
        stride: usize,
        attributes: Vec<VertexAttribute>,
        index_count: usize,
    },
    Resize(Size),
    Clear {
        color: [f32; 4],
    },
    SetUniform(UniformUpload),
    DrawIndexed {
        index_count: u32,
    },
}

/// A backend that draws nothing and remembers every command it was given.
#[derive(Debug, Default, Deref)]
pub struct RecordingBackend {
    #[deref]
    commands: Vec<DrawCommand>,
    known_uniforms: Option<Vec<String>>,
    uploaded_indices: Option<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept uniforms with the given names, like a linked shader program would.
    pub fn with_known_uniforms<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordingBackend {
            known_uniforms: Some(names.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn record(&mut self, command: DrawCommand) {
        trace!(?command, "Recording command");
        self.commands.push(command);
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_mesh(&mut self, vertices: &[ColoredVertex], indices: &[u32]) -> Result<()> {
        self.uploaded_indices = Some(indices.len());

        self.record(DrawCommand::UploadMesh {
            vertex_count: vertices.len(),
            stride: ColoredVertex::STRIDE,
            attributes: ColoredVertex::ATTRIBUTES.to_vec(),
            index_count: indices.len(),
        });

        Ok(())
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        self.record(DrawCommand::Resize(size));
        Ok(())
    }

    fn clear(&mut self, color: [f32; 4]) -> Result<()> {
        self.record(DrawCommand::Clear { color });
        Ok(())
    }

    fn set_uniform(&mut self, upload: &UniformUpload) -> Result<()> {
        if let Some(known) = &self.known_uniforms {
            if !known.iter().any(|name| *name == upload.name) {
                return Err(SceneError::UnknownUniform(upload.name.clone()));
            }
        }

        self.record(DrawCommand::SetUniform(upload.clone()));
        Ok(())
    }

    fn draw_indexed(&mut self, index_count: u32) -> Result<()> {
        if self.uploaded_indices.is_none() {
            return Err(SceneError::MeshNotUploaded);
        }

        self.record(DrawCommand::DrawIndexed { index_count });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use cube_math::Mat4;

    use super::{DrawCommand, RecordingBackend, RenderBackend};
    use crate::errors::SceneError;
    use crate::uniform::UniformUpload;

    #[test]
    fn drawing_requires_an_uploaded_mesh() {
        let mut backend = RecordingBackend::new();

        assert_eq!(backend.draw_indexed(36), Err(SceneError::MeshNotUploaded));

        backend.upload_mesh(&[], &[0, 1, 2]).unwrap();
        backend.draw_indexed(3).unwrap();

        assert_eq!(backend.last(), Some(&DrawCommand::DrawIndexed { index_count: 3 }));
    }

    #[test]
    fn unknown_uniforms_are_rejected() {
        let mut backend = RecordingBackend::with_known_uniforms(["lookat"]);

        backend
            .set_uniform(&UniformUpload::mat4("lookat", &Mat4::IDENTITY))
            .unwrap();

        assert_eq!(
            backend.set_uniform(&UniformUpload::mat4("mvp", &Mat4::IDENTITY)),
            Err(SceneError::UnknownUniform("mvp".to_string()))
        );
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn take_commands_drains_the_log() {
        let mut backend = RecordingBackend::new();
        backend.clear([0.0, 0.0, 0.0, 1.0]).unwrap();

        assert_eq!(backend.take_commands().len(), 1);
        assert!(backend.is_empty());
    }
}
