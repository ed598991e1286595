use std::path::PathBuf;

use clap::Parser;
use log::info;

use facemorph::image::Image;
use facemorph::imgproc::draw::{draw_filled_circle, draw_line};
use facemorph::io::functional as F;
use facemorph::io::landmarks::read_landmarks;
use facemorph::mesh::{Point2, Triangle};
use facemorph::{frame_alpha, Morpher};

/// Feature-guided morphing between two images with corresponding landmarks.
#[derive(Parser)]
#[command(name = "facemorph")]
struct Args {
    /// path to the first image
    image_a: PathBuf,

    /// path to the landmark points of the first image
    points_a: PathBuf,

    /// path to the second image
    image_b: PathBuf,

    /// path to the landmark points of the second image
    points_b: PathBuf,

    /// number of frames to render (min 2)
    frame_count: usize,

    /// directory receiving the rendered frames
    output_dir: PathBuf,
}

const HIGHLIGHT: [u8; 3] = [255, 255, 255];

/// Renders a copy of the image with the triangulation edges and landmark
/// points drawn in the highlight color.
fn draw_triangulation(
    img: &Image<u8, 3>,
    points: &[Point2],
    triangles: &[Triangle],
) -> Image<u8, 3> {
    let mut img = img.clone();

    for t in triangles {
        let corners = [points[t[0]], points[t[1]], points[t[2]]];
        for (p, q) in [
            (corners[0], corners[1]),
            (corners[1], corners[2]),
            (corners[2], corners[0]),
        ] {
            draw_line(
                &mut img,
                (p.x as i64, p.y as i64),
                (q.x as i64, q.y as i64),
                HIGHLIGHT,
            );
        }
    }

    for p in points {
        draw_filled_circle(&mut img, (p.x as i64, p.y as i64), 2, HIGHLIGHT);
    }

    img
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // wrong arguments print the usage text and return cleanly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    if args.frame_count < 2 {
        println!("minimum 2 frames");
        return Ok(());
    }

    let img_a = F::read_image_any(&args.image_a)?;
    let points_a = read_landmarks(&args.points_a)?;
    let img_b = F::read_image_any(&args.image_b)?;
    let points_b = read_landmarks(&args.points_b)?;

    let morpher = Morpher::new(&img_a, &img_b, points_a, points_b)?;
    info!(
        "rendering {} frames from {} triangles",
        args.frame_count,
        morpher.triangles().len()
    );

    // diagnostic renderings of both triangulations
    F::write_image_png(
        args.output_dir.join("tri1.png"),
        &draw_triangulation(&img_a, morpher.points_a(), morpher.triangles()),
    )?;
    F::write_image_png(
        args.output_dir.join("tri2.png"),
        &draw_triangulation(&img_b, morpher.points_b(), morpher.triangles()),
    )?;

    for id in 0..args.frame_count {
        let alpha = frame_alpha(id, args.frame_count);
        let frame = morpher.render_frame(alpha)?;

        let path = args.output_dir.join(format!("{id}.png"));
        F::write_image_png(&path, &frame.to_u8())?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
