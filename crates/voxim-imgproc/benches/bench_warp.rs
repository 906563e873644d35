use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use voxim_image::{Image, ImageShape};
use voxim_imgproc::boundary::BorderMode;
use voxim_imgproc::interpolation::InterpolationMode;
use voxim_imgproc::rotate::rotate;
use voxim_imgproc::warp::{warp, WarpMode};

fn bench_warp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Warp");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let shape = ImageShape {
            width: *width,
            height: *height,
            depth: 1,
            channels: 3,
        };
        let data = (0..shape.numel()).map(|i| (i % 255) as f64).collect();
        let image = Image::from_shape_vec(shape, data).unwrap();

        // a gentle sinusoidal displacement field
        let field_shape = ImageShape {
            channels: 2,
            ..shape
        };
        let mut field = Image::from_shape_val(field_shape, 0.0).unwrap();
        for y in 0..*height {
            for x in 0..*width {
                let ox = field.offset(x, y, 0, 0);
                let oy = field.offset(x, y, 0, 1);
                field.as_slice_mut()[ox] = (y as f64 * 0.05).sin() * 3.0;
                field.as_slice_mut()[oy] = (x as f64 * 0.05).cos() * 3.0;
            }
        }

        for (name, interpolation) in [
            ("nearest", InterpolationMode::Nearest),
            ("linear", InterpolationMode::Linear),
            ("cubic", InterpolationMode::Cubic),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &(&image, &field),
                |b, i| {
                    let (src, field) = *i;
                    b.iter(|| {
                        warp(
                            black_box(src),
                            black_box(field),
                            black_box(WarpMode::BackwardRelative),
                            black_box(interpolation),
                            black_box(BorderMode::Dirichlet),
                        )
                    })
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new("rotate_30deg", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    rotate(
                        black_box(i),
                        black_box(30.0),
                        black_box(InterpolationMode::Linear),
                        black_box(BorderMode::Dirichlet),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp);
criterion_main!(benches);
