pub mod cube;
pub mod mesh;
pub mod primitive;
pub mod vertex;
