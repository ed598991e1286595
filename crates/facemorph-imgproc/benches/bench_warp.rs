use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use facemorph_image::Image;
use facemorph_imgproc::{
    interpolation::{BorderMode, InterpolationMode},
    warp::{get_affine_transform, warp_affine},
};

fn bench_warp_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpAffine");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input image
        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();
        let image_f32 = image.cast::<f32>().unwrap();

        // output image
        let output = Image::<f32, 3>::from_size_val(image_size, 0.0).unwrap();

        // a mild shear, the kind of map a morph triangle produces
        let src = [(0.0, 0.0), (*width as f32, 0.0), (0.0, *height as f32)];
        let dst = [
            (10.0, 5.0),
            (*width as f32 - 20.0, 15.0),
            (25.0, *height as f32 - 10.0),
        ];
        let m = get_affine_transform(&src, &dst);

        group.bench_with_input(
            BenchmarkId::new("warp_affine", &parameter_string),
            &(&image_f32, &output, m),
            |b, i| {
                let (src, mut dst, m) = (i.0.clone(), i.1.clone(), i.2);
                b.iter(|| {
                    warp_affine(
                        black_box(&src),
                        black_box(&mut dst),
                        black_box(&m),
                        black_box(InterpolationMode::Bilinear),
                        black_box(BorderMode::Reflect101),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_affine);
criterion_main!(benches);
