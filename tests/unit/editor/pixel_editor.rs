use super::*;
use crate::{
    layout::geometry::{LayoutMode, LayoutParams},
    pixels::channels::Channels,
};

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

fn red_editor(channels: Channels) -> PixelEditor {
    PixelEditor::new(
        PixelBuffer::filled(8, channels, RED),
        Frame::new(4, 2).unwrap(),
    )
}

#[test]
fn render_shifts_rows_down() {
    let editor = red_editor(Channels::Rgba);
    let rows = editor.render_rows(Offset::new(0, 1));
    assert_eq!(rows.len(), 2);
    assert!(rows[0].iter().all(|c| c.is_transparent()));
    assert_eq!(rows[1], vec![RED; 4]);
}

#[test]
fn render_pads_short_buffers() {
    let editor = PixelEditor::new(
        PixelBuffer::filled(5, Channels::Rgb, BLUE),
        Frame::new(4, 2).unwrap(),
    );
    let grid = editor.render(Offset::ZERO);
    assert_eq!(grid.len(), 8);
    assert_eq!(&grid[..5], &[BLUE; 5]);
    assert!(grid[5..].iter().all(|c| c.is_transparent()));
}

#[test]
fn sample_matches_render() {
    let mut editor = red_editor(Channels::Rgba);
    editor.edit(CellPos::new(0, 1), BLUE, Offset::ZERO).unwrap();
    for offset in [Offset::ZERO, Offset::new(1, 0), Offset::new(-2, 1), Offset::new(3, -1)] {
        let grid = editor.render(offset);
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(
                    editor.sample(CellPos::new(row, col), offset),
                    grid[row * 4 + col]
                );
            }
        }
    }
    assert_eq!(editor.sample(CellPos::new(9, 9), Offset::ZERO), Color::TRANSPARENT);
}

#[test]
fn edit_writes_through_offset() {
    let mut editor = red_editor(Channels::Rgba);
    let offset = Offset::new(1, 1);
    editor.edit(CellPos::new(1, 3), BLUE, offset).unwrap();
    // Display (1, 3) shows buffer (0, 2).
    assert_eq!(editor.buffer().get(2), BLUE);
    assert_eq!(editor.sample(CellPos::new(1, 3), offset), BLUE);
    assert_eq!(editor.render(offset)[7], BLUE);
}

#[test]
fn padded_cells_reject_and_leave_buffer_untouched() {
    let mut editor = red_editor(Channels::Rgba);
    let before = editor.buffer().clone();
    let offset = Offset::new(1, 1);
    assert_eq!(
        editor.edit(CellPos::new(0, 2), BLUE, offset),
        Err(EditRejected::PaddedArea)
    );
    assert_eq!(
        editor.edit(CellPos::new(1, 0), BLUE, offset),
        Err(EditRejected::PaddedArea)
    );
    assert_eq!(
        editor.edit(CellPos::new(2, 0), BLUE, offset),
        Err(EditRejected::OutOfFrame)
    );
    assert_eq!(editor.buffer(), &before);
}

#[test]
fn edits_past_buffer_end_are_rejected() {
    let mut editor = PixelEditor::new(
        PixelBuffer::filled(4, Channels::Rgba, RED),
        Frame::new(4, 2).unwrap(),
    );
    let before = editor.buffer().clone();
    assert_eq!(
        editor.edit(CellPos::new(1, 0), BLUE, Offset::ZERO),
        Err(EditRejected::OutsideBuffer)
    );
    assert_eq!(editor.buffer(), &before);
}

#[test]
fn edit_is_idempotent() {
    let mut once = red_editor(Channels::Rgba);
    let mut twice = red_editor(Channels::Rgba);
    let offset = Offset::new(-1, 0);
    once.edit(CellPos::new(0, 0), BLUE, offset).unwrap();
    twice.edit(CellPos::new(0, 0), BLUE, offset).unwrap();
    twice.edit(CellPos::new(0, 0), BLUE, offset).unwrap();
    assert_eq!(once.buffer(), twice.buffer());
}

#[test]
fn edit_downgrades_to_buffer_layout() {
    let mut rgb = red_editor(Channels::Rgb);
    rgb.edit(CellPos::new(0, 0), Color::rgba(1, 2, 3, 0), Offset::ZERO)
        .unwrap();
    assert_eq!(rgb.buffer().get(0), Color::rgb(1, 2, 3));

    let mut gray = red_editor(Channels::Gray);
    gray.edit(CellPos::new(0, 0), Color::rgb(90, 2, 3), Offset::ZERO)
        .unwrap();
    assert_eq!(gray.buffer().get(0), Color::gray(90));
}

#[test]
fn pick_skips_unlit_cells() {
    let editor = red_editor(Channels::Rgba);
    assert_eq!(editor.pick(CellPos::new(0, 0), Offset::ZERO), Some(RED));
    assert_eq!(editor.pick(CellPos::new(0, 0), Offset::new(0, 1)), None);
}

#[test]
fn edit_at_point_uses_hit_testing() {
    let mut editor = red_editor(Channels::Rgba);
    let layout = GeometryLayout::new(
        editor.frame(),
        LayoutParams {
            pixel_size: 10.0,
            base_gap: 1.0,
            mode: LayoutMode::Matrix,
        },
    );
    let hit = editor
        .edit_at_point(&layout, Point::new(12.0, 12.0), BLUE, Offset::ZERO)
        .unwrap();
    assert_eq!(hit, Some(CellPos::new(1, 1)));
    assert_eq!(editor.buffer().get(5), BLUE);

    let miss = editor
        .edit_at_point(&layout, Point::new(500.0, 1.0), BLUE, Offset::ZERO)
        .unwrap();
    assert_eq!(miss, None);
}
