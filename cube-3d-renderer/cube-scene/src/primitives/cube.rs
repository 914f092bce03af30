use cube_math::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::primitives::primitive::Primitive;
use crate::primitives::vertex::ColoredVertex;

/// Seed used for the corner colours unless another one is requested
pub const DEFAULT_COLOR_SEED: u64 = 123;

// Two triangles per face, wound against the corner order produced by `corner_positions`
const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, //
    3, 6, 2, //
    7, 4, 6, //
    5, 0, 4, //
    6, 0, 2, //
    3, 5, 7, //
    1, 3, 2, //
    3, 7, 6, //
    7, 5, 4, //
    5, 1, 0, //
    6, 4, 0, //
    3, 1, 5,
];

/// An indexed cube made of its eight shared corners, each with its own colour.
#[derive(Debug, Clone)]
pub struct Cube {
    vertices: [ColoredVertex; 8],
}

impl Cube {
    /// Create a new cube centered at `center` with edges `size` long.
    /// Corner colours are drawn from a RNG seeded with `color_seed`.
    pub fn new(center: Vec3, size: f32, color_seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(color_seed);

        let vertices = corner_positions(center, size / 2.0).map(|position| {
            ColoredVertex::new(position, random_color(&mut rng))
        });

        Cube { vertices }
    }

    /// The unit cube around the origin with the default colours
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, 1.0, DEFAULT_COLOR_SEED)
    }
}

impl Primitive for Cube {
    fn get_vertices(&self) -> Vec<ColoredVertex> {
        self.vertices.to_vec()
    }

    fn get_indices(&self) -> Vec<u32> {
        CUBE_INDICES.to_vec()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

// Corners ordered by x, then z (front first), then y
fn corner_positions(center: Vec3, half: f32) -> [Vec3; 8] {
    let x_left = center.x - half;
    let x_right = center.x + half;

    let y_down = center.y - half;
    let y_up = center.y + half;

    let z_back = center.z - half;
    let z_front = center.z + half;

    [
        Vec3::new(x_left, y_down, z_front),
        Vec3::new(x_left, y_up, z_front),
        Vec3::new(x_left, y_down, z_back),
        Vec3::new(x_left, y_up, z_back),
        Vec3::new(x_right, y_down, z_front),
        Vec3::new(x_right, y_up, z_front),
        Vec3::new(x_right, y_down, z_back),
        Vec3::new(x_right, y_up, z_back),
    ]
}

fn random_color(rng: &mut StdRng) -> Vec3 {
    let mut channel = || rng.random_range(0..255u8) as f32 / 255.0;

    Vec3::new(channel(), channel(), channel())
}
