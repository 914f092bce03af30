use cube_math::Mat4;

use crate::primitives::primitive::Primitive;
use crate::primitives::vertex::ColoredVertex;

pub struct Mesh {
    primitives: Vec<Box<dyn Primitive>>,
    model_transform: Mat4,
}

impl Mesh {
    pub fn new(primitives: Vec<Box<dyn Primitive>>) -> Self {
        Mesh {
            primitives,
            model_transform: Mat4::IDENTITY,
        }
    }

    pub fn new_with_transform(primitives: Vec<Box<dyn Primitive>>, model_transform: Mat4) -> Self {
        Mesh {
            primitives,
            model_transform,
        }
    }
}

impl std::fmt::Debug for Mesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("primitives", &self.primitives.len())
            .field("model_transform", &self.model_transform)
            .finish()
    }
}

impl Primitive for Mesh {
    fn get_vertices(&self) -> Vec<ColoredVertex> {
        self.primitives
            .iter()
            .flat_map(|primitive| primitive.get_vertices())
            .map(|v| v.transform(&self.model_transform))
            .collect()
    }

    fn get_indices(&self) -> Vec<u32> {
        // Offset each primitive's indices by the number of vertices that came before it
        let mut indices = Vec::new();
        let mut offset = 0;

        for primitive in &self.primitives {
            indices.extend(primitive.get_indices().iter().map(|index| index + offset));
            offset += primitive.vertex_count() as u32;
        }

        indices
    }

    fn vertex_count(&self) -> usize {
        self.primitives.iter().map(|primitive| primitive.vertex_count()).sum()
    }
}
