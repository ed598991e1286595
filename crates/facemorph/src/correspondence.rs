use facemorph_image::ImageSize;
use facemorph_mesh::{delaunay, Point2, Rect, Triangle};

use crate::error::MorphError;

/// Builds the triangle schema shared by both landmark sets.
///
/// The landmark set of image A is triangulated once; because the
/// triangulation returns index triples, the same list describes the
/// corresponding triangles in image B's landmark set and in every
/// interpolated set. Triangles with a vertex outside the image rectangle
/// are dropped, since their geometry cannot be rendered inside the frame.
///
/// The returned list is computed once per run and drives every frame, so
/// the triangle count is invariant across the whole sequence.
pub fn build_correspondence(
    points: &[Point2],
    size: ImageSize,
) -> Result<Vec<Triangle>, MorphError> {
    let rect = Rect::from_size(size.width as f32, size.height as f32);
    let triangles = delaunay::triangulate(points, &rect)?;

    Ok(triangles
        .into_iter()
        .filter(|t| t.iter().all(|&i| rect.contains(&points[i])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::build_correspondence;
    use crate::error::MorphError;
    use facemorph_image::ImageSize;
    use facemorph_mesh::Point2;

    const SIZE: ImageSize = ImageSize {
        width: 20,
        height: 20,
    };

    #[test]
    fn covers_in_rect_points() -> Result<(), MorphError> {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(19.0, 0.0),
            Point2::new(19.0, 19.0),
            Point2::new(0.0, 19.0),
            Point2::new(10.0, 10.0),
        ];
        let triangles = build_correspondence(&points, SIZE)?;

        assert_eq!(triangles.len(), 4);
        for i in 0..points.len() {
            assert!(triangles.iter().any(|t| t.contains(&i)));
        }

        Ok(())
    }

    #[test]
    fn drops_triangles_with_out_of_rect_vertices() -> Result<(), MorphError> {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(19.0, 0.0),
            Point2::new(19.0, 19.0),
            Point2::new(0.0, 19.0),
            // outside the 20x20 rectangle
            Point2::new(30.0, 5.0),
        ];
        let triangles = build_correspondence(&points, SIZE)?;

        assert!(!triangles.is_empty());
        assert!(triangles.iter().all(|t| !t.contains(&4)));

        Ok(())
    }

    #[test]
    fn too_few_points_is_an_error() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let result = build_correspondence(&points, SIZE);
        assert!(matches!(result, Err(MorphError::Mesh(_))));
    }
}
