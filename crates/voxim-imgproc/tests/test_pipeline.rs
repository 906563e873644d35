use voxim_image::{Axis, Image, ImageShape};
use voxim_imgproc::boundary::BorderMode;
use voxim_imgproc::crop::autocrop;
use voxim_imgproc::flip::mirror;
use voxim_imgproc::interpolation::InterpolationMode;
use voxim_imgproc::permute::permute_axes;
use voxim_imgproc::resize::{resize, ResizeMode, ResizeTarget};
use voxim_imgproc::rotate::rotate;
use voxim_imgproc::shift::shift;

fn labeled_image(width: usize, height: usize) -> Image<f64> {
    let shape = ImageShape {
        width,
        height,
        depth: 1,
        channels: 1,
    };
    // every value non-zero so a zero border is unambiguous
    let data = (0..shape.numel()).map(|i| (i + 1) as f64).collect();
    Image::from_shape_vec(shape, data).unwrap()
}

#[test]
fn test_quarter_turn_matches_transpose_and_mirror() {
    // a clockwise quarter turn is the x/y transpose followed by a
    // horizontal mirror
    let image = labeled_image(5, 3);

    let turned = rotate(
        &image,
        90.0,
        InterpolationMode::Nearest,
        BorderMode::Dirichlet,
    )
    .unwrap();

    let mut transposed = permute_axes(&image, &"yxzc".parse().unwrap()).unwrap();
    mirror(&mut transposed, Axis::X);

    assert_eq!(turned.shape(), transposed.shape());
    assert_eq!(
        turned.as_slice(),
        transposed.as_slice(),
        "Expected {:?}, but got {:?}",
        transposed.as_slice(),
        turned.as_slice()
    );
}

#[test]
fn test_shift_then_autocrop_recovers_the_image() {
    let image = labeled_image(4, 3);

    // shifting right opens a zero band on the left
    let mut shifted = image.clone();
    shift(&mut shifted, [2, 0, 0, 0], BorderMode::Dirichlet);
    assert_eq!(shifted.get(0, 0, 0, 0), Some(&0.0));

    let cropped = autocrop(&shifted, Some(&[0.0]), &[Axis::X]).unwrap();
    assert_eq!(cropped.width(), 2);
    assert_eq!(cropped.height(), 3);
    // the surviving columns are the first two of the original
    for y in 0..3 {
        for x in 0..2 {
            assert_eq!(cropped.get(x, y, 0, 0), image.get(x, y, 0, 0));
        }
    }
}

#[test]
fn test_fill_resize_round_trips_through_autocrop() {
    let image = labeled_image(3, 2);

    // grow the canvas with a zero border on every side
    let grown = resize(
        &image,
        [
            ResizeTarget::Pixels(7),
            ResizeTarget::Pixels(6),
            ResizeTarget::same(),
            ResizeTarget::same(),
        ],
        ResizeMode::Fill,
        BorderMode::Dirichlet,
        [0.5, 0.5, 0.0, 0.0],
    )
    .unwrap();
    assert_eq!((grown.width(), grown.height()), (7, 6));

    let recovered = autocrop(&grown, Some(&[0.0]), &[Axis::Y, Axis::X]).unwrap();
    assert_eq!(recovered.shape(), image.shape());
    assert_eq!(
        recovered.as_slice(),
        image.as_slice(),
        "Expected {:?}, but got {:?}",
        image.as_slice(),
        recovered.as_slice()
    );
}
