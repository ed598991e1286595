use facemorph_image::Image;

use super::bilinear::bilinear_interpolation;
use super::border::BorderMode;
use super::nearest::nearest_neighbor_interpolation;

/// The interpolation mode to use when resampling an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Bilinear interpolation between the four neighboring pixels.
    Bilinear,
    /// Nearest neighbor interpolation.
    Nearest,
}

/// Interpolate a pixel value at a fractional position.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - How to resolve coordinates falling outside the image.
///
/// # Returns
///
/// The interpolated pixel values, one entry per channel.
pub fn interpolate_pixel<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> [f32; C] {
    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, border),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, border),
    }
}
