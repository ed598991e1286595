use facemorph_image::ImageSize;

/// An error type for the morph pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Error when the two landmark sets have different lengths.
    #[error("Landmark count mismatch between the two images: {0} vs {1}")]
    PointCountMismatch(usize, usize),

    /// Error when the two images have different resolutions.
    #[error("Image size mismatch: {0} vs {1}")]
    ImageSizeMismatch(ImageSize, ImageSize),

    /// Error from the triangulation.
    #[error(transparent)]
    Mesh(#[from] facemorph_mesh::MeshError),

    /// Error from an image operation.
    #[error(transparent)]
    Image(#[from] facemorph_image::ImageError),
}
