use facemorph_image::{Image, ImageError};

use crate::interpolation::{interpolate_pixel, BorderMode, InterpolationMode};

/// Computes the 2x3 affine transformation matrix mapping one triangle onto
/// another.
///
/// The matrix is the unique affine map taking `src[i]` onto `dst[i]` for
/// i = 0..3, solved with Cramer's rule. A degenerate (collinear) source
/// triangle has no such map; in that case the zero matrix is returned,
/// following the same convention as [`invert_affine_transform`].
///
/// # Arguments
///
/// * `src` - The source triangle vertices as (x, y) pairs.
/// * `dst` - The destination triangle vertices as (x, y) pairs.
///
/// # Returns
///
/// The 2x3 affine transformation matrix as `[a, b, c, d, e, f]` where
/// `u = a*x + b*y + c` and `v = d*x + e*y + f`.
///
/// # Example
///
/// ```
/// use facemorph_imgproc::warp::get_affine_transform;
///
/// let tri = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
/// let m = get_affine_transform(&tri, &tri);
/// assert_eq!(m, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn get_affine_transform(src: &[(f32, f32); 3], dst: &[(f32, f32); 3]) -> [f32; 6] {
    let [(x0, y0), (x1, y1), (x2, y2)] = *src;
    let [(u0, v0), (u1, v1), (u2, v2)] = *dst;

    let det = x0 * (y1 - y2) + x1 * (y2 - y0) + x2 * (y0 - y1);
    let inv_det = if det != 0.0 { 1.0 / det } else { 0.0 };

    let a = (u0 * (y1 - y2) + u1 * (y2 - y0) + u2 * (y0 - y1)) * inv_det;
    let b = (u0 * (x2 - x1) + u1 * (x0 - x2) + u2 * (x1 - x0)) * inv_det;
    let c = (u0 * (x1 * y2 - x2 * y1) + u1 * (x2 * y0 - x0 * y2) + u2 * (x0 * y1 - x1 * y0))
        * inv_det;

    let d = (v0 * (y1 - y2) + v1 * (y2 - y0) + v2 * (y0 - y1)) * inv_det;
    let e = (v0 * (x2 - x1) + v1 * (x0 - x2) + v2 * (x1 - x0)) * inv_det;
    let f = (v0 * (x1 * y2 - x2 * y1) + v1 * (x2 * y0 - x0 * y2) + v2 * (x0 * y1 - x1 * y0))
        * inv_det;

    [a, b, c, d, e, f]
}

/// Inverts a 2x3 affine transformation matrix.
///
/// # Arguments
///
/// * `m` - The 2x3 affine transformation matrix.
///
/// # Returns
///
/// The inverted 2x3 affine transformation matrix. A singular matrix
/// inverts to the zero matrix.
pub fn invert_affine_transform(m: &[f32; 6]) -> [f32; 6] {
    let (a, b, c, d, e, f) = (m[0], m[1], m[2], m[3], m[4], m[5]);

    let determinant = a * e - b * d;
    let inv_determinant = if determinant != 0.0 {
        1.0 / determinant
    } else {
        0.0
    };

    let new_a = e * inv_determinant;
    let new_b = -b * inv_determinant;
    let new_d = -d * inv_determinant;
    let new_e = a * inv_determinant;
    let new_c = -(new_a * c + new_b * f);
    let new_f = -(new_d * c + new_e * f);

    [new_a, new_b, new_c, new_d, new_e, new_f]
}

/// Applies an affine transformation to a point.
fn transform_point(x: f32, y: f32, m: &[f32; 6]) -> (f32, f32) {
    let u = m[0] * x + m[1] * y + m[2];
    let v = m[3] * x + m[4] * y + m[5];
    (u, v)
}

/// Applies an affine transformation to an image.
///
/// Every destination pixel is mapped through the inverse transform and
/// resampled from the source; samples falling outside the source image are
/// resolved by the border mode.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (height, width, channels).
/// * `m` - The 2x3 affine transformation matrix.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - The border extension applied to out-of-bounds samples.
///
/// # Example
///
/// ```
/// use facemorph_image::{Image, ImageSize};
/// use facemorph_imgproc::interpolation::{BorderMode, InterpolationMode};
/// use facemorph_imgproc::warp::warp_affine;
///
/// let src = Image::<f32, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1.0,
/// ).unwrap();
///
/// let mut dst = Image::<f32, 3>::from_size_val(src.size(), 0.0).unwrap();
///
/// warp_affine(
///     &src,
///     &mut dst,
///     &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     InterpolationMode::Bilinear,
///     BorderMode::Reflect101,
/// ).unwrap();
///
/// assert_eq!(dst.size().width, 4);
/// assert_eq!(dst.size().height, 5);
/// ```
pub fn warp_affine<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    m: &[f32; 6],
    interpolation: InterpolationMode,
    border: BorderMode,
) -> Result<(), ImageError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = invert_affine_transform(m);

    let cols = dst.cols();
    dst.as_slice_mut()
        .chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..cols {
                let (u, v) = transform_point(x as f32, y as f32, &m_inv);
                let pixel = interpolate_pixel(src, u, v, interpolation, border);
                row[x * C..x * C + C].copy_from_slice(&pixel);
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use facemorph_image::{Image, ImageError, ImageSize};

    use crate::interpolation::{BorderMode, InterpolationMode};

    #[test]
    fn affine_transform_identity() {
        let tri = [(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)];
        let m = super::get_affine_transform(&tri, &tri);
        assert_eq!(m, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn affine_transform_translation() {
        let src = [(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)];
        let dst = [(1.0, 3.0), (3.0, 3.0), (1.0, 5.0)];
        let m = super::get_affine_transform(&src, &dst);

        for (s, d) in src.iter().zip(dst.iter()) {
            let (u, v) = super::transform_point(s.0, s.1, &m);
            assert_relative_eq!(u, d.0, epsilon = 1e-5);
            assert_relative_eq!(v, d.1, epsilon = 1e-5);
        }
    }

    #[test]
    fn affine_transform_maps_vertices() {
        let src = [(1.0, 1.0), (5.0, 2.0), (2.0, 6.0)];
        let dst = [(0.0, 0.0), (4.0, 1.0), (1.5, 4.0)];
        let m = super::get_affine_transform(&src, &dst);

        for (s, d) in src.iter().zip(dst.iter()) {
            let (u, v) = super::transform_point(s.0, s.1, &m);
            assert_relative_eq!(u, d.0, epsilon = 1e-4);
            assert_relative_eq!(v, d.1, epsilon = 1e-4);
        }
    }

    #[test]
    fn affine_transform_degenerate_is_zero() {
        // collinear source triangle
        let src = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
        let dst = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let m = super::get_affine_transform(&src, &dst);
        assert_eq!(m, [0.0; 6]);
    }

    #[test]
    fn invert_affine_roundtrip() {
        let src = [(0.0, 0.0), (4.0, 1.0), (1.0, 3.0)];
        let dst = [(2.0, 1.0), (6.0, 3.0), (2.5, 5.0)];
        let m = super::get_affine_transform(&src, &dst);
        let m_inv = super::invert_affine_transform(&m);

        for d in dst.iter() {
            let (x, y) = super::transform_point(d.0, d.1, &m_inv);
            let (u, v) = super::transform_point(x, y, &m);
            assert_relative_eq!(u, d.0, epsilon = 1e-4);
            assert_relative_eq!(v, d.1, epsilon = 1e-4);
        }
    }

    #[test]
    fn warp_affine_identity_correctness() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            (0..20).map(|x| x as f32).collect(),
        )?;

        let mut transformed = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::warp_affine(
            &image,
            &mut transformed,
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            InterpolationMode::Nearest,
            BorderMode::Replicate,
        )?;

        assert_eq!(transformed.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn warp_affine_translation_reflects_border() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0.0, 1.0, 2.0],
        )?;

        // shift content right by one pixel
        let mut shifted = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;
        super::warp_affine(
            &image,
            &mut shifted,
            &[1.0, 0.0, 1.0, 0.0, 1.0, 0.0],
            InterpolationMode::Bilinear,
            BorderMode::Reflect101,
        )?;

        // dst x=0 samples src x=-1, which mirrors to src x=1
        assert_relative_eq!(shifted.as_slice()[0], 1.0);
        assert_relative_eq!(shifted.as_slice()[1], 0.0);
        assert_relative_eq!(shifted.as_slice()[2], 1.0);

        Ok(())
    }
}
