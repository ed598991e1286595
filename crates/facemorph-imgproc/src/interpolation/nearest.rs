use facemorph_image::Image;

use super::border::{map_border_index, BorderMode};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How to resolve coordinates falling outside the image.
///
/// # Returns
///
/// The pixel values of the nearest pixel.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = map_border_index(u.round() as i64, cols, border);
    let iv = map_border_index(v.round() as i64, rows, border);

    let base = (iv * cols + iu) * C;
    let data = image.as_slice();

    let mut pixel = [0.0; C];
    pixel.copy_from_slice(&data[base..base + C]);

    pixel
}

#[cfg(test)]
mod tests {
    use super::{nearest_neighbor_interpolation, BorderMode};
    use facemorph_image::{Image, ImageError, ImageSize};

    #[test]
    fn nearest_rounds() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )?;

        let pixel = nearest_neighbor_interpolation(&image, 0.9, 0.2, BorderMode::Replicate);
        assert_eq!(pixel[0], 1.0);

        Ok(())
    }
}
