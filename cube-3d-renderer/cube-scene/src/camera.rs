use cube_math::{cross, Mat4, Vec3};

use crate::errors::{Result, SceneError};
use crate::utils::camera_getters_setters;

const DEGENERATE_EPSILON: f32 = 1e-6;

/// A camera placed at `position`, looking at `target`, with `up` pointing roughly upwards.
///
/// The view matrix is cached and only rebuilt after one of the parameters changes.
#[derive(Clone, Copy, Debug)]
pub struct LookAtCamera {
    position: Vec3,
    target: Vec3,
    up: Vec3,

    dirty: bool,
    cached_view_matrix: Mat4,
}

impl LookAtCamera {
    pub fn new(position: Vec3, target: Vec3, up: Vec3) -> Self {
        LookAtCamera {
            position,
            target,
            up,
            dirty: true,
            cached_view_matrix: Mat4::IDENTITY,
        }
    }

    camera_getters_setters!(position: Vec3, target: Vec3, up: Vec3);

    /// Checks that the parameters describe a usable view basis.
    ///
    /// [`cube_math::make_look_at`] happily produces NaNs for degenerate input, so this has to be
    /// called before the view matrix is handed to a backend.
    pub fn validate(&self) -> Result<()> {
        let forward = self.position - self.target;
        if forward.length() <= DEGENERATE_EPSILON {
            return Err(SceneError::CoincidentEyeAndTarget);
        }

        if self.up.length() <= DEGENERATE_EPSILON {
            return Err(SceneError::ZeroLengthUp);
        }

        if cross(self.up.normalized(), forward.normalized()).length() <= DEGENERATE_EPSILON {
            return Err(SceneError::UpParallelToView);
        }

        Ok(())
    }

    pub fn get_cached_view_matrix(&self) -> Mat4 {
        self.cached_view_matrix
    }

    pub fn update_view(&mut self) {
        self.dirty = false;
        self.cached_view_matrix = Mat4::look_at(self.target, self.position, self.up);
    }

    pub fn get_view_matrix(&mut self) -> Mat4 {
        if self.dirty {
            self.update_view();
        }

        self.cached_view_matrix
    }
}
