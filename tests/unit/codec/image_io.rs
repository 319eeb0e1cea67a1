use std::io::Cursor;

use super::*;
use crate::foundation::color::Color;

fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn quadrants(w: u32, h: u32) -> DynamicImage {
    // Left half red, right half blue.
    let img = image::RgbImage::from_fn(w, h, |x, _| {
        if x < w / 2 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    });
    DynamicImage::ImageRgb8(img)
}

#[test]
fn crop_parse_requires_four_numbers() {
    let c = CropArea::parse("10, 20,50,25.5").unwrap();
    assert_eq!(
        c,
        CropArea {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 25.5
        }
    );
    assert!(CropArea::parse("1,2,3").is_err());
    assert!(CropArea::parse("1,2,x,4").is_err());
}

#[test]
fn crop_percent_rounds_to_pixels() {
    let img = quadrants(10, 4);
    let right = crop_percent(
        &img,
        CropArea {
            x: 50.0,
            y: 0.0,
            width: 50.0,
            height: 100.0,
        },
    )
    .unwrap();
    assert_eq!((right.width(), right.height()), (5, 4));
    assert_eq!(right.to_rgb8().get_pixel(0, 0).0, [0, 0, 255]);

    let outside = CropArea {
        x: 60.0,
        y: 0.0,
        width: 50.0,
        height: 100.0,
    };
    assert!(crop_percent(&img, outside).is_err());
}

#[test]
fn prepare_fits_frame_and_ensures_alpha() {
    let bytes = png_bytes(quadrants(20, 10));
    let frame = Frame::new(4, 2).unwrap();
    let decoded = prepare_frame_image(&bytes, frame, None).unwrap();
    assert_eq!((decoded.width, decoded.height), (4, 2));
    assert_eq!(decoded.buffer.channels(), Channels::Rgba);
    assert_eq!(decoded.buffer.pixel_count(), 8);
    assert_eq!(decoded.buffer.get(0), Color::rgb(255, 0, 0));
    assert_eq!(decoded.buffer.get(3), Color::rgb(0, 0, 255));
}

#[test]
fn prepare_rejects_garbage() {
    let frame = Frame::new(4, 2).unwrap();
    assert!(prepare_frame_image(b"not an image", frame, None).is_err());
}

#[test]
fn to_pixel_buffer_keeps_source_layout() {
    let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([7])));
    let b = to_pixel_buffer(&gray);
    assert_eq!((b.channels(), b.source()), (Channels::Gray, ChannelSource::Declared));
    assert_eq!(b.get(3), Color::gray(7));

    let rgb = to_pixel_buffer(&quadrants(2, 1));
    assert_eq!(rgb.channels(), Channels::Rgb);

    let la = DynamicImage::ImageLumaA8(image::GrayAlphaImage::from_pixel(
        1,
        1,
        image::LumaA([9, 100]),
    ));
    let b = to_pixel_buffer(&la);
    assert_eq!(b.channels(), Channels::Rgba);
    assert_eq!(b.get(0), Color::rgba(9, 9, 9, 100));
}

#[test]
fn encode_png_writes_whole_rows() {
    let buffer = PixelBuffer::from_raw(vec![
        1, 2, 3, 4, 5, 6, 7, 8, //
        9, 10, 11, 12, 13, 14, 15, 16, //
        99, 99, 99, 99,
    ]);
    let png = encode_png(&buffer, 2).unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (2, 2));
    assert_eq!(img.color(), ColorType::Rgba8);
    assert_eq!(img.as_bytes(), &buffer.as_bytes()[..16]);
}

#[test]
fn encode_png_needs_a_full_row() {
    let buffer = PixelBuffer::filled(3, Channels::Rgb, Color::gray(1));
    assert!(encode_png(&buffer, 4).is_err());
    assert!(encode_png(&buffer, 0).is_err());
}
