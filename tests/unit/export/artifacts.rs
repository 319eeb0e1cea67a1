use std::path::PathBuf;

use super::*;
use crate::{
    foundation::{color::Color, core::Frame},
    pixels::channels::{Channels, PixelBuffer},
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_export").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn write_unique_appends_index_instead_of_overwriting() {
    let dir = scratch_dir("unique");
    let a = write_unique(&dir, "tree.png", b"a").unwrap();
    let b = write_unique(&dir, "tree.png", b"b").unwrap();
    let c = write_unique(&dir, "tree.png", b"c").unwrap();
    assert_eq!(a, dir.join("tree.png"));
    assert_eq!(b, dir.join("tree-1.png"));
    assert_eq!(c, dir.join("tree-2.png"));
    assert_eq!(std::fs::read(&a).unwrap(), b"a");

    let plain = write_unique(&dir, "raw", b"x").unwrap();
    let plain2 = write_unique(&dir, "raw", b"y").unwrap();
    assert_eq!(plain, dir.join("raw"));
    assert_eq!(plain2, dir.join("raw-1"));
}

#[test]
fn export_frame_writes_png_and_descriptor() {
    let dir = scratch_dir("frame");
    let editor = PixelEditor::new(
        PixelBuffer::filled(8, Channels::Rgba, Color::rgb(255, 0, 0)),
        Frame::new(4, 2).unwrap(),
    );
    let out = export_frame(&editor, Offset::new(1, -1), &dir, "matrix.png").unwrap();
    assert!(out.image_path.exists());

    let img = image::open(&out.image_path).unwrap();
    assert_eq!((img.width(), img.height()), (4, 2));

    let text = out.descriptor.as_str();
    assert!(text.contains(&out.image_path.to_string_lossy().to_string()));
    assert!(text.contains("E_SLIDER_PicturesXC=1,E_SLIDER_PicturesYC=-1"));
}
