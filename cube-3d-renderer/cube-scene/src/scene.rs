use cube_math::{Mat4, Vec3};
use tracing::{debug, instrument, trace};

use crate::animation::{FrameInput, ModelRotation};
use crate::backend::RenderBackend;
use crate::camera::LookAtCamera;
use crate::errors::{Result, SceneError};
use crate::primitives::cube::{Cube, DEFAULT_COLOR_SEED};
use crate::primitives::mesh::Mesh;
use crate::primitives::primitive::Primitive;
use crate::uniform::{UniformUpload, MODEL_UNIFORM, PROJECTION_UNIFORM, VIEW_UNIFORM};
use crate::viewport::Size;

pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.3, 0.5, 0.9, 1.0];

/// The spinning cube: one coloured cube, a look-at camera and the model rotation driven by input.
#[derive(Debug)]
pub struct CubeScene {
    camera: LookAtCamera,
    rotation: ModelRotation,
    mesh: Mesh,
    clear_color: [f32; 4],
    size: Size,
    /// Half height of the orthographic view volume, no projection is uploaded when unset
    ortho_half_height: Option<f32>,
    frame: u64,
}

impl CubeScene {
    pub fn new(camera: LookAtCamera, size: Size) -> Self {
        CubeScene {
            camera,
            rotation: ModelRotation::default(),
            mesh: Self::cube_mesh(DEFAULT_COLOR_SEED),
            clear_color: DEFAULT_CLEAR_COLOR,
            size,
            ortho_half_height: None,
            frame: 0,
        }
    }

    pub fn with_rotation(mut self, rotation: ModelRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.mesh = Self::cube_mesh(seed);
        self
    }

    /// Uploads an orthographic projection every frame. `half_height` must be positive and finite.
    pub fn with_orthographic_projection(mut self, half_height: f32) -> Result<Self> {
        if !half_height.is_finite() || half_height <= 0.0 {
            return Err(SceneError::InvalidOrthographicHalfHeight(half_height));
        }

        self.ortho_half_height = Some(half_height);
        Ok(self)
    }

    fn cube_mesh(seed: u64) -> Mesh {
        Mesh::new(vec![Box::new(Cube::new(Vec3::ZERO, 1.0, seed))])
    }

    pub fn get_camera(&self) -> &LookAtCamera {
        &self.camera
    }

    pub fn get_camera_mut(&mut self) -> &mut LookAtCamera {
        &mut self.camera
    }

    pub fn get_rotation(&self) -> &ModelRotation {
        &self.rotation
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_frame(&self) -> u64 {
        self.frame
    }

    pub fn index_count(&self) -> u32 {
        self.mesh.get_indices().len() as u32
    }

    /// Uploads the cube and sets the initial viewport. Must be called once before rendering.
    pub fn init(&self, backend: &mut impl RenderBackend) -> Result<()> {
        ensure_not_empty(self.size)?;

        let vertices = self.mesh.get_vertices();
        let indices = self.mesh.get_indices();

        debug!(
            vertices = vertices.len(),
            indices = indices.len(),
            "Uploading cube mesh"
        );

        backend.upload_mesh(&vertices, &indices)?;
        backend.resize(self.size)
    }

    /// Handles a framebuffer size change.
    pub fn resize(&mut self, size: Size, backend: &mut impl RenderBackend) -> Result<()> {
        ensure_not_empty(size)?;

        debug!(width = size.width, height = size.height, "Resizing viewport");

        self.size = size;
        backend.resize(size)
    }

    /// The orthographic projection for the current viewport, if one was requested.
    pub fn projection_matrix(&self) -> Option<Mat4> {
        self.ortho_half_height.map(|half_height| {
            let half_width = half_height * self.size.aspect_ratio();

            Mat4::ortho_2d(
                -half_width,
                half_width,
                -half_height,
                half_height,
                -100.0,
                100.0,
            )
        })
    }

    #[instrument(level = "debug", skip(self, backend), fields(frame = self.frame))]
    pub fn render_frame(&mut self, input: FrameInput, backend: &mut impl RenderBackend) -> Result<()> {
        // Nothing may change before both checks pass
        ensure_not_empty(self.size)?;
        self.camera.validate()?;

        self.rotation.apply(input);

        backend.clear(self.clear_color)?;

        let view = self.camera.get_view_matrix();
        trace!(view = ?view.as_cols_array(), "Computed view matrix");

        backend.set_uniform(&UniformUpload::mat4(VIEW_UNIFORM, &view))?;
        backend.set_uniform(&UniformUpload::mat4(
            MODEL_UNIFORM,
            &self.rotation.model_matrix(),
        ))?;

        if let Some(projection) = self.projection_matrix() {
            backend.set_uniform(&UniformUpload::mat4(PROJECTION_UNIFORM, &projection))?;
        }

        backend.draw_indexed(self.index_count())?;

        debug!(angle = self.rotation.get_angle(), "Rendered frame");
        self.frame += 1;

        Ok(())
    }
}

fn ensure_not_empty(size: Size) -> Result<()> {
    if size.is_empty() {
        return Err(SceneError::ZeroSizedViewport(size.width, size.height));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use cube_math::{Mat4, Vec3};

    use super::{CubeScene, DEFAULT_CLEAR_COLOR};
    use crate::animation::{FrameInput, ModelRotation};
    use crate::backend::{DrawCommand, RecordingBackend};
    use crate::camera::LookAtCamera;
    use crate::errors::SceneError;
    use crate::uniform::UniformUpload;
    use crate::viewport::Size;

    fn demo_scene() -> CubeScene {
        let camera = LookAtCamera::new(Vec3::new(5.0, 10.0, 5.0), Vec3::ZERO, Vec3::Y);
        CubeScene::new(camera, Size::new(800, 600))
    }

    fn initialized(scene: &CubeScene) -> RecordingBackend {
        let mut backend = RecordingBackend::new();
        scene.init(&mut backend).unwrap();
        backend.take_commands();
        backend
    }

    #[test]
    fn init_uploads_the_cube_and_viewport() {
        let scene = demo_scene();
        let mut backend = RecordingBackend::new();
        scene.init(&mut backend).unwrap();

        assert!(matches!(
            backend[0],
            DrawCommand::UploadMesh {
                vertex_count: 8,
                stride: 24,
                index_count: 36,
                ..
            }
        ));
        assert_eq!(backend[1], DrawCommand::Resize(Size::new(800, 600)));
    }

    #[test]
    fn frame_clears_uploads_and_draws() {
        let mut scene = demo_scene();
        let mut backend = initialized(&scene);

        scene.render_frame(FrameInput::default(), &mut backend).unwrap();

        let view = Mat4::look_at(Vec3::ZERO, Vec3::new(5.0, 10.0, 5.0), Vec3::Y);

        assert_eq!(
            backend.take_commands(),
            vec![
                DrawCommand::Clear {
                    color: DEFAULT_CLEAR_COLOR
                },
                DrawCommand::SetUniform(UniformUpload::mat4("lookat", &view)),
                DrawCommand::SetUniform(UniformUpload::mat4("model", &Mat4::IDENTITY)),
                DrawCommand::DrawIndexed { index_count: 36 },
            ]
        );
        assert_eq!(scene.get_frame(), 1);
    }

    #[test]
    fn rotate_input_changes_model_uniform() {
        let mut scene = demo_scene().with_rotation(ModelRotation::new(0.5));
        let mut backend = initialized(&scene);

        let input = FrameInput {
            rotate: true,
            reset: false,
        };
        scene.render_frame(input, &mut backend).unwrap();

        assert_eq!(
            backend[2],
            DrawCommand::SetUniform(UniformUpload::mat4("model", &Mat4::from_rotation_z(0.5)))
        );
    }

    #[test]
    fn orthographic_projection_is_uploaded_when_requested() {
        let mut scene = demo_scene().with_orthographic_projection(2.0).unwrap();
        let mut backend = initialized(&scene);

        scene.render_frame(FrameInput::default(), &mut backend).unwrap();

        let half_width = 2.0 * Size::new(800, 600).aspect_ratio();
        let projection = Mat4::ortho_2d(-half_width, half_width, -2.0, 2.0, -100.0, 100.0);
        assert_eq!(
            backend[3],
            DrawCommand::SetUniform(UniformUpload::mat4("projection", &projection))
        );
        assert_eq!(backend.len(), 5);
    }

    #[test]
    fn degenerate_camera_stops_the_frame() {
        let mut scene = demo_scene().with_rotation(ModelRotation::new(0.5));
        let mut backend = initialized(&scene);

        scene.get_camera_mut().set_target(Vec3::new(5.0, 10.0, 5.0));

        let input = FrameInput {
            rotate: true,
            reset: false,
        };
        assert_eq!(
            scene.render_frame(input, &mut backend),
            Err(SceneError::CoincidentEyeAndTarget)
        );
        assert!(backend.is_empty());
        assert_eq!(scene.get_frame(), 0);
        assert_eq!(scene.get_rotation().get_angle(), 0.0);
    }

    #[test]
    fn zero_sized_scene_is_rejected_before_upload() {
        let camera = LookAtCamera::new(Vec3::new(5.0, 10.0, 5.0), Vec3::ZERO, Vec3::Y);
        let mut scene = CubeScene::new(camera, Size::new(0, 600))
            .with_orthographic_projection(2.0)
            .unwrap();
        let mut backend = RecordingBackend::new();

        assert_eq!(
            scene.init(&mut backend),
            Err(SceneError::ZeroSizedViewport(0, 600))
        );
        assert_eq!(
            scene.render_frame(FrameInput::default(), &mut backend),
            Err(SceneError::ZeroSizedViewport(0, 600))
        );
        assert!(backend.is_empty());
        assert_eq!(scene.get_frame(), 0);
    }

    #[test]
    fn non_positive_half_height_is_rejected() {
        for half_height in [0.0, -1.0, f32::INFINITY] {
            assert_eq!(
                demo_scene().with_orthographic_projection(half_height).err(),
                Some(SceneError::InvalidOrthographicHalfHeight(half_height))
            );
        }

        assert!(matches!(
            demo_scene().with_orthographic_projection(f32::NAN),
            Err(SceneError::InvalidOrthographicHalfHeight(value)) if value.is_nan()
        ));
    }

    #[test]
    fn zero_sized_resize_is_rejected() {
        let mut scene = demo_scene();
        let mut backend = initialized(&scene);

        assert_eq!(
            scene.resize(Size::new(0, 600), &mut backend),
            Err(SceneError::ZeroSizedViewport(0, 600))
        );

        scene.resize(Size::new(1024, 768), &mut backend).unwrap();
        assert_eq!(scene.get_size(), Size::new(1024, 768));
        assert_eq!(backend[0], DrawCommand::Resize(Size::new(1024, 768)));
    }
}
