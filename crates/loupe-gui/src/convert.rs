use loupe_core::bitmap::Bitmap;

/// Convert an RGBA bitmap to an egui ColorImage for texture upload.
pub fn bitmap_to_color_image(bitmap: &Bitmap) -> egui::ColorImage {
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_rgba().as_raw())
}
