use facemorph_image::Image;
use facemorph_mesh::{Point2, Triangle};
use log::debug;

use crate::blend::morph_triangle;
use crate::correspondence::build_correspondence;
use crate::error::MorphError;

/// Straight-line interpolation of two equally long point sets.
///
/// Each output coordinate is `(1-alpha)*a[i] + alpha*b[i]`; the caller is
/// responsible for having checked the length precondition.
pub fn interpolate_points(a: &[Point2], b: &[Point2], alpha: f32) -> Vec<Point2> {
    a.iter().zip(b.iter()).map(|(p, q)| p.lerp(q, alpha)).collect()
}

/// The mix factor of a frame in a sequence.
///
/// Frame 0 maps to 0.0 (pure image A) and frame `count - 1` to 1.0 (pure
/// image B). `count` must be at least 2.
pub fn frame_alpha(index: usize, count: usize) -> f32 {
    index as f32 / (count - 1) as f32
}

/// A configured morph between two images.
///
/// Holds the two source images in f32, the two landmark sets, and the
/// triangle schema computed once from image A's landmarks. Each frame is
/// rendered independently from the original sources, so no resampling
/// error accumulates across the sequence.
pub struct Morpher {
    img_a: Image<f32, 3>,
    img_b: Image<f32, 3>,
    points_a: Vec<Point2>,
    points_b: Vec<Point2>,
    triangles: Vec<Triangle>,
}

impl Morpher {
    /// Create a morpher from two images and their landmark sets.
    ///
    /// # Errors
    ///
    /// Fails when the landmark sets differ in length, when the images
    /// differ in resolution, or when the landmarks cannot be
    /// triangulated.
    pub fn new(
        img_a: &Image<u8, 3>,
        img_b: &Image<u8, 3>,
        points_a: Vec<Point2>,
        points_b: Vec<Point2>,
    ) -> Result<Self, MorphError> {
        if points_a.len() != points_b.len() {
            return Err(MorphError::PointCountMismatch(
                points_a.len(),
                points_b.len(),
            ));
        }

        if img_a.size() != img_b.size() {
            return Err(MorphError::ImageSizeMismatch(img_a.size(), img_b.size()));
        }

        let triangles = build_correspondence(&points_a, img_a.size())?;
        debug!("triangle schema has {} triangles", triangles.len());

        Ok(Self {
            img_a: img_a.to_f32(),
            img_b: img_b.to_f32(),
            points_a,
            points_b,
            triangles,
        })
    }

    /// The triangle schema driving every frame.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The landmark set of image A.
    pub fn points_a(&self) -> &[Point2] {
        &self.points_a
    }

    /// The landmark set of image B.
    pub fn points_b(&self) -> &[Point2] {
        &self.points_b
    }

    /// Renders the frame at the given mix factor.
    ///
    /// Allocates a zero-initialized frame buffer, interpolates the
    /// landmark positions, and composites every triangle of the schema.
    /// All arithmetic stays in f32; convert with
    /// [`Image::to_u8`](facemorph_image::Image::to_u8) at the output
    /// boundary.
    pub fn render_frame(&self, alpha: f32) -> Result<Image<f32, 3>, MorphError> {
        let points = interpolate_points(&self.points_a, &self.points_b, alpha);

        let mut frame = Image::<f32, 3>::from_size_val(self.img_a.size(), 0.0)?;

        for t in &self.triangles {
            let tri_a = [self.points_a[t[0]], self.points_a[t[1]], self.points_a[t[2]]];
            let tri_b = [self.points_b[t[0]], self.points_b[t[1]], self.points_b[t[2]]];
            let tri_dst = [points[t[0]], points[t[1]], points[t[2]]];

            morph_triangle(
                &self.img_a,
                &self.img_b,
                &mut frame,
                &tri_a,
                &tri_b,
                &tri_dst,
                alpha,
            )?;
        }

        Ok(frame)
    }
}
