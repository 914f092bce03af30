use crate::primitives::vertex::ColoredVertex;

pub trait Primitive {
    /// Returns the vertices of the primitive
    fn get_vertices(&self) -> Vec<ColoredVertex>;

    /// Returns the indices of the vertices of the primitive
    /// in the order they should be drawn
    fn get_indices(&self) -> Vec<u32>;

    /// Number of vertices returned by [`Primitive::get_vertices`]
    fn vertex_count(&self) -> usize {
        self.get_vertices().len()
    }
}
