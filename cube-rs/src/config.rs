use std::path::Path;

use cube_scene::animation::DEFAULT_ANGLE_DELTA;
use cube_scene::cube_math::Vec3;
use cube_scene::primitives::cube::DEFAULT_COLOR_SEED;
use cube_scene::scene::DEFAULT_CLEAR_COLOR;
use serde::{Deserialize, Serialize};
use twelf::{config, Layer};

#[config]
#[derive(Debug)]
pub struct CubeConfiguration {
    pub camera: CameraConfiguration,
    pub window: WindowConfiguration,
    pub animation: AnimationConfiguration,
    pub scene: SceneConfiguration,

    /// How many frames to render when not overridden on the command line.
    pub frames: u32,
}

impl Default for CubeConfiguration {
    fn default() -> Self {
        CubeConfiguration {
            camera: CameraConfiguration::default(),
            window: WindowConfiguration::default(),
            animation: AnimationConfiguration::default(),
            scene: SceneConfiguration::default(),
            frames: 1,
        }
    }
}

impl CubeConfiguration {
    /// Loads the configuration from the defaults, then the optional TOML file, then environment
    /// variables prefixed with `CUBE_`. Later layers override earlier ones.
    pub fn load(path: Option<&Path>) -> Result<Self, twelf::Error> {
        let mut layers = vec![Layer::DefaultTrait];

        if let Some(path) = path {
            layers.push(Layer::Toml(path.to_path_buf()));
        }

        layers.push(Layer::Env(Some("CUBE_".to_string())));

        Self::with_layers(&layers)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CameraConfiguration {
    /// Where the camera sits.
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],

    /// The point the camera looks at.
    #[serde(default)]
    pub target: [f32; 3],

    /// Approximate up direction, does not need to be normalized.
    #[serde(default = "default_camera_up")]
    pub up: [f32; 3],
}

impl CameraConfiguration {
    pub fn position(&self) -> Vec3 {
        self.position.into()
    }

    pub fn target(&self) -> Vec3 {
        self.target.into()
    }

    pub fn up(&self) -> Vec3 {
        self.up.into()
    }
}

impl Default for CameraConfiguration {
    fn default() -> Self {
        CameraConfiguration {
            position: default_camera_position(),
            target: [0.0; 3],
            up: default_camera_up(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfiguration {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

impl Default for WindowConfiguration {
    fn default() -> Self {
        WindowConfiguration {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnimationConfiguration {
    /// How far the cube turns per frame while rotating, in radians.
    #[serde(default = "default_angle_delta")]
    pub angle_delta: f32,
}

impl Default for AnimationConfiguration {
    fn default() -> Self {
        AnimationConfiguration {
            angle_delta: default_angle_delta(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SceneConfiguration {
    /// RGBA colour the framebuffer is cleared to every frame.
    #[serde(default = "default_clear_color")]
    pub clear_color: [f32; 4],

    /// Seed for the cube's corner colours.
    #[serde(default = "default_color_seed")]
    pub color_seed: u64,

    /// Half height of an orthographic view volume. No projection uniform is uploaded when unset.
    #[serde(default)]
    pub ortho_half_height: Option<f32>,
}

impl Default for SceneConfiguration {
    fn default() -> Self {
        SceneConfiguration {
            clear_color: default_clear_color(),
            color_seed: default_color_seed(),
            ortho_half_height: None,
        }
    }
}

fn default_camera_position() -> [f32; 3] {
    [5.0, 10.0, 5.0]
}

fn default_camera_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

fn default_angle_delta() -> f32 {
    DEFAULT_ANGLE_DELTA
}

fn default_clear_color() -> [f32; 4] {
    DEFAULT_CLEAR_COLOR
}

fn default_color_seed() -> u64 {
    DEFAULT_COLOR_SEED
}
