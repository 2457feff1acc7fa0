use crate::grid::{PIXEL_SIZE, PixelGrid};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting the canvas to an image file.
///
/// These belong to the file-I/O boundary: the app reports them to the user
/// as a status message, they never propagate into the editing core.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Write(#[from] std::io::Error),
}

/// Renders the grid into a raw RGBA buffer at full canvas resolution.
///
/// Each cell becomes a `PIXEL_SIZE` x `PIXEL_SIZE` block, so the buffer is
/// `width * PIXEL_SIZE` by `height * PIXEL_SIZE` pixels, 4 bytes per pixel,
/// row-major. This is the hand-off format for external encoders.
pub fn export_rgba(grid: &PixelGrid) -> Vec<u8> {
    let out_width = grid.width() * PIXEL_SIZE;
    let out_height = grid.height() * PIXEL_SIZE;
    let mut buffer = vec![0u8; out_width * out_height * 4];

    for (coord, color) in grid.iter_cells() {
        let rgba = color.to_array();
        for dy in 0..PIXEL_SIZE {
            let y = coord.row * PIXEL_SIZE + dy;
            let row_start = (y * out_width + coord.col * PIXEL_SIZE) * 4;
            for dx in 0..PIXEL_SIZE {
                let idx = row_start + dx * 4;
                buffer[idx..idx + 4].copy_from_slice(&rgba);
            }
        }
    }

    buffer
}

/// Encodes the grid as a PNG at full canvas resolution and writes it to
/// `path`.
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<(), ExportError> {
    let out_width = (grid.width() * PIXEL_SIZE) as u32;
    let out_height = (grid.height() * PIXEL_SIZE) as u32;
    let buffer = export_rgba(grid);

    let img = image::RgbaImage::from_raw(out_width, out_height, buffer)
        .expect("export buffer matches canvas dimensions");
    img.save(path)?;

    log::info!(
        "exported {}x{} canvas to {}",
        out_width,
        out_height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellCoord;
    use egui::Color32;

    #[test]
    fn buffer_has_canvas_dimensions() {
        let grid = PixelGrid::new(4, 4);
        let buffer = export_rgba(&grid);
        assert_eq!(buffer.len(), 4 * PIXEL_SIZE * 4 * PIXEL_SIZE * 4);
    }

    #[test]
    fn one_cell_expands_to_a_full_block() {
        let mut grid = PixelGrid::new(2, 2);
        grid.set(CellCoord::new(1, 0), Color32::RED).unwrap();
        let buffer = export_rgba(&grid);

        let out_width = 2 * PIXEL_SIZE;
        // Every device pixel of the (1, 0) block is red, its neighbors white.
        for dy in 0..PIXEL_SIZE {
            for dx in 0..PIXEL_SIZE {
                let idx = (dy * out_width + PIXEL_SIZE + dx) * 4;
                assert_eq!(&buffer[idx..idx + 4], &[255, 0, 0, 255]);
                let idx = (dy * out_width + dx) * 4;
                assert_eq!(&buffer[idx..idx + 4], &[255, 255, 255, 255]);
            }
        }
    }
}
