/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the image.
    #[error("Failed to decode the image {0}. {1}")]
    ImageDecode(std::path::PathBuf, #[source] image::ImageError),

    /// Error to encode the image.
    #[error("Failed to encode the image {0}. {1}")]
    ImageEncode(std::path::PathBuf, #[source] image::ImageError),

    /// Error when a landmark file does not parse as integer pairs.
    #[error("Invalid points file {0}: {1}")]
    InvalidPointsFile(std::path::PathBuf, String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreation(#[from] facemorph_image::ImageError),
}
