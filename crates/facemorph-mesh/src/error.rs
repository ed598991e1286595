/// An error type for the mesh module.
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    /// Error when too few points are given to triangulate.
    #[error("Cannot triangulate {0} points, need at least 3")]
    NotEnoughPoints(usize),
}
