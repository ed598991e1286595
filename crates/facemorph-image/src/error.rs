/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of an operation do not agree.
    #[error("Invalid image size ({0}x{1}) expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index ({0}) out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast the pixel data")]
    CastError,
}
