pub(crate) mod pixel_editor;
