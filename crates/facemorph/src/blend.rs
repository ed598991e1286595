use facemorph_image::{Image, ImageError, ImageSize};
use facemorph_imgproc::crop::crop_image;
use facemorph_imgproc::draw::fill_triangle;
use facemorph_imgproc::interpolation::{BorderMode, InterpolationMode};
use facemorph_imgproc::warp::{get_affine_transform, warp_affine};
use facemorph_mesh::Point2;

/// Integer bounding rectangle of a triangle, clamped to an image.
#[derive(Clone, Copy, Debug)]
struct PatchRect {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl PatchRect {
    fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

/// Tight pixel rectangle covering the triangle, clamped to the image.
fn bounding_rect(tri: &[Point2; 3], size: ImageSize) -> PatchRect {
    let min_x = tri.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = tri.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = tri.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = tri.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let x0 = (min_x.floor().max(0.0) as usize).min(size.width.saturating_sub(1));
    let y0 = (min_y.floor().max(0.0) as usize).min(size.height.saturating_sub(1));
    let x1 = ((max_x.ceil().max(0.0) as usize) + 1).min(size.width);
    let y1 = ((max_y.ceil().max(0.0) as usize) + 1).min(size.height);

    PatchRect {
        x: x0,
        y: y0,
        width: x1.saturating_sub(x0).max(1),
        height: y1.saturating_sub(y0).max(1),
    }
}

/// Triangle vertices expressed relative to a bounding rectangle corner.
fn local_triangle(tri: &[Point2; 3], rect: &PatchRect) -> [(f32, f32); 3] {
    [
        (tri[0].x - rect.x as f32, tri[0].y - rect.y as f32),
        (tri[1].x - rect.x as f32, tri[1].y - rect.y as f32),
        (tri[2].x - rect.x as f32, tri[2].y - rect.y as f32),
    ]
}

/// Warps one triangle from both source images into the target shape and
/// cross-dissolves the results into the frame.
///
/// The work is bounded to the triangles' bounding rectangles: both source
/// patches are cropped, warped by the affine map onto the local target
/// triangle with bilinear resampling and reflect-101 border extension,
/// mixed at `alpha`, and composited into the frame through a fill mask of
/// the target triangle. The composite is an in-place masked
/// read-modify-write, because bounding rectangles of adjacent triangles
/// overlap near shared edges and a plain overwrite would erase their
/// pixels.
///
/// # Arguments
///
/// * `img_a` - The first source image.
/// * `img_b` - The second source image, same size as the first.
/// * `frame` - The output frame buffer, same size as the sources.
/// * `tri_a` - The triangle vertices in image A.
/// * `tri_b` - The corresponding vertices in image B.
/// * `tri_dst` - The interpolated target vertices for this frame.
/// * `alpha` - The mix factor in [0, 1]; 0 is pure A, 1 is pure B.
pub fn morph_triangle(
    img_a: &Image<f32, 3>,
    img_b: &Image<f32, 3>,
    frame: &mut Image<f32, 3>,
    tri_a: &[Point2; 3],
    tri_b: &[Point2; 3],
    tri_dst: &[Point2; 3],
    alpha: f32,
) -> Result<(), ImageError> {
    let r = bounding_rect(tri_dst, frame.size());
    let r_a = bounding_rect(tri_a, img_a.size());
    let r_b = bounding_rect(tri_b, img_b.size());

    // source patches local to their bounding rectangles
    let mut patch_a = Image::<f32, 3>::from_size_val(r_a.size(), 0.0)?;
    crop_image(img_a, &mut patch_a, r_a.x, r_a.y)?;
    let mut patch_b = Image::<f32, 3>::from_size_val(r_b.size(), 0.0)?;
    crop_image(img_b, &mut patch_b, r_b.x, r_b.y)?;

    let t_a = local_triangle(tri_a, &r_a);
    let t_b = local_triangle(tri_b, &r_b);
    let t = local_triangle(tri_dst, &r);

    // warp both patches onto the target triangle shape
    let mut warped_a = Image::<f32, 3>::from_size_val(r.size(), 0.0)?;
    warp_affine(
        &patch_a,
        &mut warped_a,
        &get_affine_transform(&t_a, &t),
        InterpolationMode::Bilinear,
        BorderMode::Reflect101,
    )?;

    let mut warped_b = Image::<f32, 3>::from_size_val(r.size(), 0.0)?;
    warp_affine(
        &patch_b,
        &mut warped_b,
        &get_affine_transform(&t_b, &t),
        InterpolationMode::Bilinear,
        BorderMode::Reflect101,
    )?;

    let mut mask = Image::<f32, 1>::from_size_val(r.size(), 0.0)?;
    fill_triangle(&mut mask, &t, [1.0]);

    // frame = frame*(1-mask) + ((1-alpha)*warped_a + alpha*warped_b)*mask
    let frame_cols = frame.cols();
    let frame_data = frame.as_slice_mut();
    let a_data = warped_a.as_slice();
    let b_data = warped_b.as_slice();
    let mask_data = mask.as_slice();

    for y in 0..r.height {
        for x in 0..r.width {
            let m = mask_data[y * r.width + x];
            if m == 0.0 {
                continue;
            }

            let patch_idx = (y * r.width + x) * 3;
            let frame_idx = ((r.y + y) * frame_cols + (r.x + x)) * 3;

            for c in 0..3 {
                let blended = (1.0 - alpha) * a_data[patch_idx + c] + alpha * b_data[patch_idx + c];
                frame_data[frame_idx + c] =
                    frame_data[frame_idx + c] * (1.0 - m) + blended * m;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{bounding_rect, local_triangle, morph_triangle};
    use approx::assert_relative_eq;
    use facemorph_image::{Image, ImageError, ImageSize};
    use facemorph_mesh::Point2;

    const SIZE: ImageSize = ImageSize {
        width: 8,
        height: 8,
    };

    #[test]
    fn bounding_rect_is_tight_and_clamped() {
        let tri = [
            Point2::new(1.2, 2.8),
            Point2::new(5.0, 3.0),
            Point2::new(2.0, 6.9),
        ];
        let r = bounding_rect(&tri, SIZE);
        assert_eq!((r.x, r.y), (1, 2));
        assert_eq!((r.width, r.height), (5, 6));

        // a triangle touching the far corner clamps to the image
        let tri = [
            Point2::new(5.0, 5.0),
            Point2::new(7.0, 5.0),
            Point2::new(7.0, 7.0),
        ];
        let r = bounding_rect(&tri, SIZE);
        assert_eq!((r.x + r.width, r.y + r.height), (8, 8));
    }

    #[test]
    fn local_triangle_offsets_vertices() {
        let tri = [
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 4.0),
            Point2::new(3.0, 7.0),
        ];
        let r = bounding_rect(&tri, SIZE);
        let local = local_triangle(&tri, &r);
        assert_eq!(local[0], (0.0, 0.0));
        assert_eq!(local[1], (3.0, 0.0));
        assert_eq!(local[2], (0.0, 3.0));
    }

    #[test]
    fn identity_triangle_copies_source() -> Result<(), ImageError> {
        let data = (0..SIZE.width * SIZE.height * 3)
            .map(|i| i as f32)
            .collect::<Vec<_>>();
        let img = Image::<f32, 3>::new(SIZE, data)?;
        let mut frame = Image::<f32, 3>::from_size_val(SIZE, 0.0)?;

        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(7.0, 0.0),
            Point2::new(0.0, 7.0),
        ];
        morph_triangle(&img, &img, &mut frame, &tri, &tri, &tri, 0.5)?;

        // pixels inside the triangle match the source, outside stay zero
        for c in 0..3 {
            assert_relative_eq!(
                frame.get_pixel(1, 1, c)?,
                img.get_pixel(1, 1, c)?,
                epsilon = 1e-3
            );
            assert_relative_eq!(frame.get_pixel(7, 7, c)?, 0.0);
        }

        Ok(())
    }

    #[test]
    fn blend_mixes_both_sources() -> Result<(), ImageError> {
        let img_a = Image::<f32, 3>::from_size_val(SIZE, 100.0)?;
        let img_b = Image::<f32, 3>::from_size_val(SIZE, 200.0)?;
        let mut frame = Image::<f32, 3>::from_size_val(SIZE, 0.0)?;

        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(7.0, 0.0),
            Point2::new(0.0, 7.0),
        ];
        morph_triangle(&img_a, &img_b, &mut frame, &tri, &tri, &tri, 0.25)?;

        assert_relative_eq!(frame.get_pixel(2, 2, 0)?, 125.0, epsilon = 1e-3);

        Ok(())
    }

    #[test]
    fn composite_preserves_pixels_outside_mask() -> Result<(), ImageError> {
        let img = Image::<f32, 3>::from_size_val(SIZE, 50.0)?;
        let mut frame = Image::<f32, 3>::from_size_val(SIZE, 7.0)?;

        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        ];
        morph_triangle(&img, &img, &mut frame, &tri, &tri, &tri, 0.0)?;

        // inside the triangle the source wins, outside the frame is untouched
        assert_relative_eq!(frame.get_pixel(1, 1, 0)?, 50.0, epsilon = 1e-3);
        assert_relative_eq!(frame.get_pixel(6, 6, 0)?, 7.0);

        Ok(())
    }
}
