use facemorph_image::Image;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<T: Copy, const C: usize>(img: &mut Image<T, C>, x: i64, y: i64, color: [T; C]) {
    if x >= 0 && x < img.cols() as i64 && y >= 0 && y < img.rows() as i64 {
        let start = (y as usize * img.cols() + x as usize) * C;
        img.as_slice_mut()[start..start + C].copy_from_slice(&color);
    }
}

/// Draws a line on an image inplace using a standard Bresenham's line algorithm.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
pub fn draw_line<T: Copy, const C: usize>(
    img: &mut Image<T, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [T; C],
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    loop {
        set_pixel(img, x0, y0, color);

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a filled circle on an image inplace.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the circle as a tuple of (x, y).
/// * `radius` - The radius of the circle in pixels.
/// * `color` - The color of the circle as an array of `C` elements.
pub fn draw_filled_circle<T: Copy, const C: usize>(
    img: &mut Image<T, C>,
    center: (i64, i64),
    radius: i64,
    color: [T; C],
) {
    let (cx, cy) = center;
    let r2 = radius * radius;

    for y in -radius..=radius {
        for x in -radius..=radius {
            if x * x + y * y <= r2 {
                set_pixel(img, cx + x, cy + y, color);
            }
        }
    }
}

/// Fills a triangle on an image inplace.
///
/// A pixel belongs to the triangle when its integer coordinate passes an
/// inclusive edge-function test, so boundary pixels are filled. The
/// vertex winding does not matter.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `tri` - The triangle vertices as (x, y) pairs.
/// * `color` - The fill color as an array of `C` elements.
pub fn fill_triangle<T: Copy, const C: usize>(
    img: &mut Image<T, C>,
    tri: &[(f32, f32); 3],
    color: [T; C],
) {
    let [a, b, c] = *tri;

    let min_x = a.0.min(b.0).min(c.0).floor().max(0.0) as usize;
    let max_x = (a.0.max(b.0).max(c.0).ceil() as usize).min(img.cols().saturating_sub(1));
    let min_y = a.1.min(b.1).min(c.1).floor().max(0.0) as usize;
    let max_y = (a.1.max(b.1).max(c.1).ceil() as usize).min(img.rows().saturating_sub(1));

    let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| -> f32 {
        (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
    };

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (fx, fy) = (x as f32, y as f32);
            let e0 = edge(a, b, fx, fy);
            let e1 = edge(b, c, fx, fy);
            let e2 = edge(c, a, fx, fy);

            let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0)
                || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
            if inside {
                set_pixel(img, x as i64, y as i64, color);
            }
        }
    }
}
