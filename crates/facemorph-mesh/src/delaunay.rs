use crate::error::MeshError;
use crate::point::{Point2, Rect};

/// A triangle as a triple of indices into a point set.
///
/// A triangle owns no geometry: reinterpreting the same triple against a
/// different point set of equal length yields the corresponding triangle
/// in that set.
pub type Triangle = [usize; 3];

/// Signed doubled area of the triangle (a, b, c).
///
/// Positive for one winding, negative for the other, zero when collinear.
fn orient2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (cx, cy) = (c.x as f64, c.y as f64);
    (bx - ax) * (cy - ay) - (by - ay) * (cx - ax)
}

/// Whether `p` lies strictly inside the circumcircle of (a, b, c).
///
/// The classic incircle determinant, evaluated in f64. The sign of the
/// determinant depends on the triangle winding, so it is normalized with
/// the orientation test first. A collinear triple has no circumcircle and
/// contains nothing.
pub fn in_circumcircle(a: &Point2, b: &Point2, c: &Point2, p: &Point2) -> bool {
    let orient = orient2d(a, b, c);
    if orient == 0.0 {
        return false;
    }

    let (px, py) = (p.x as f64, p.y as f64);
    let (adx, ady) = (a.x as f64 - px, a.y as f64 - py);
    let (bdx, bdy) = (b.x as f64 - px, b.y as f64 - py);
    let (cdx, cdy) = (c.x as f64 - px, c.y as f64 - py);

    let ad = adx * adx + ady * ady;
    let bd = bdx * bdx + bdy * bdy;
    let cd = cdx * cdx + cdy * cdy;

    let det = adx * (bdy * cd - bd * cdy) - ady * (bdx * cd - bd * cdx)
        + ad * (bdx * cdy - bdy * cdx);

    if orient > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}

/// Three synthetic vertices enclosing every circumcircle of points inside
/// `bounds`, used to seed the incremental insertion.
fn super_triangle(bounds: &Rect) -> [Point2; 3] {
    let dmax = bounds.width.max(bounds.height).max(1.0);
    let mid_x = bounds.x + bounds.width / 2.0;
    let mid_y = bounds.y + bounds.height / 2.0;

    [
        Point2::new(mid_x - 20.0 * dmax, mid_y - dmax),
        Point2::new(mid_x, mid_y + 20.0 * dmax),
        Point2::new(mid_x + 20.0 * dmax, mid_y - dmax),
    ]
}

/// Delaunay triangulation of a point set by Bowyer-Watson incremental
/// insertion.
///
/// Points are inserted one by one into a triangulation seeded with a
/// super-triangle sized from `bounds`; each insertion removes the
/// triangles whose circumcircle contains the new point and re-triangulates
/// the cavity boundary. Triangles touching a super-triangle vertex are
/// discarded before returning, so every returned triple indexes only into
/// `points`.
///
/// The returned triangulation satisfies the empty-circumcircle property:
/// no input point lies strictly inside the circumcircle of any returned
/// triangle.
///
/// Duplicate or near-duplicate input points are not deduplicated and may
/// produce degenerate triangles; callers are expected to provide distinct
/// landmarks.
///
/// # Arguments
///
/// * `points` - The points to triangulate, at least 3.
/// * `bounds` - A rectangle enclosing all points, typically the image
///   rectangle.
///
/// # Errors
///
/// Returns [`MeshError::NotEnoughPoints`] for fewer than 3 points.
///
/// # Examples
///
/// ```
/// use facemorph_mesh::{delaunay::triangulate, Point2, Rect};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(9.0, 0.0),
///     Point2::new(9.0, 9.0),
///     Point2::new(0.0, 9.0),
/// ];
/// let triangles = triangulate(&points, &Rect::from_size(10.0, 10.0)).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate(points: &[Point2], bounds: &Rect) -> Result<Vec<Triangle>, MeshError> {
    if points.len() < 3 {
        return Err(MeshError::NotEnoughPoints(points.len()));
    }

    let n = points.len();
    let mut verts = points.to_vec();
    verts.extend_from_slice(&super_triangle(bounds));

    let mut triangles: Vec<Triangle> = vec![[n, n + 1, n + 2]];

    for i in 0..n {
        let p = verts[i];

        // carve out the cavity of triangles whose circumcircle contains p
        let mut cavity: Vec<Triangle> = Vec::new();
        triangles.retain(|t| {
            if in_circumcircle(&verts[t[0]], &verts[t[1]], &verts[t[2]], &p) {
                cavity.push(*t);
                false
            } else {
                true
            }
        });

        // edges interior to the cavity appear twice, boundary edges once
        let mut edges: Vec<(usize, usize)> = Vec::with_capacity(cavity.len() * 3);
        for t in &cavity {
            for &(a, b) in &[(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                edges.push(if a < b { (a, b) } else { (b, a) });
            }
        }
        edges.sort_unstable();

        let mut j = 0;
        while j < edges.len() {
            let e = edges[j];
            let mut count = 1;
            while j + count < edges.len() && edges[j + count] == e {
                count += 1;
            }
            if count == 1 {
                triangles.push([e.0, e.1, i]);
            }
            j += count;
        }
    }

    // drop everything attached to the super-triangle
    triangles.retain(|t| t.iter().all(|&v| v < n));

    Ok(triangles)
}
