use cube_math::Mat4;

/// How far the model turns per frame while rotation is requested, in radians
pub const DEFAULT_ANGLE_DELTA: f32 = 0.02;

/// The input a frame was rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Keep turning the model
    pub rotate: bool,
    /// Snap the model back to its starting orientation
    pub reset: bool,
}

/// Rotation of the model around the Z axis, advanced one step per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelRotation {
    angle: f32,
    delta: f32,
}

impl Default for ModelRotation {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_DELTA)
    }
}

impl ModelRotation {
    pub fn new(delta: f32) -> Self {
        ModelRotation { angle: 0.0, delta }
    }

    pub fn get_angle(&self) -> f32 {
        self.angle
    }

    pub fn get_delta(&self) -> f32 {
        self.delta
    }

    /// Advances the rotation for one frame. A reset wins over rotation requested in the same frame.
    pub fn apply(&mut self, input: FrameInput) {
        if input.rotate {
            self.angle += self.delta;
        }

        if input.reset {
            self.angle = 0.0;
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.angle)
    }
}
