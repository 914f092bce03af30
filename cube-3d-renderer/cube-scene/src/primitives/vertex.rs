use bytemuck::{Pod, Zeroable};
use cube_math::{Mat4, Vec3};
use serde::Serialize;
use std::mem;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    /// The position of the vertex
    pub position: Vec3,
    /// The RGB colour of the vertex, each channel in `[0, 1]`
    pub color: Vec3,
}

/// Describes one interleaved attribute of a [`ColoredVertex`] for the backend's vertex layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: u32,
    pub offset: usize,
}

impl ColoredVertex {
    pub const STRIDE: usize = mem::size_of::<ColoredVertex>();

    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: 0,
            components: 3,
            offset: mem::offset_of!(ColoredVertex, position),
        },
        VertexAttribute {
            location: 1,
            components: 3,
            offset: mem::offset_of!(ColoredVertex, color),
        },
    ];

    pub fn new(position: Vec3, color: Vec3) -> Self {
        ColoredVertex { position, color }
    }

    pub(crate) fn transform(&self, model_transform: &Mat4) -> Self {
        if *model_transform == Mat4::IDENTITY {
            return *self;
        }

        ColoredVertex {
            position: model_transform.transform_point3(self.position),
            color: self.color,
        }
    }
}
