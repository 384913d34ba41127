//! Image file adapter: decoding sources and writing cells as PNG files

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::analysis::cell::Cell;
use crate::io::configuration::{CELL_FILE_EXTENSION, CELL_FILE_PREFIX};
use crate::io::error::{CellError, Result};
use crate::pixel::buffer::RgbaBufferStore;
use crate::pixel::source::{ImageSnapshot, PixelSource};

/// Decode an image file into an RGBA-backed pixel source
///
/// # Errors
///
/// Returns `ImageLoad` if the file can't be opened or decoded
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<RgbaBufferStore> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| CellError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        "load_store: decoded '{}' as {}x{}",
        path.display(),
        img.width(),
        img.height()
    );

    Ok(RgbaBufferStore::from_dynamic(&img))
}

/// Encode a snapshot as an 8-bit RGBA buffer
///
/// Channels a pixel entry lacks are written as 255, matching how the
/// stores read them.
///
/// # Errors
///
/// Returns `InvalidSourceData` when the pixel count doesn't match the dimensions
pub fn snapshot_to_rgba(snapshot: &ImageSnapshot) -> Result<RgbaImage> {
    Ok(RgbaBufferStore::from_snapshot(snapshot)?.into_image())
}

/// File name of the cell at grid position (`row`, `col`)
pub fn cell_file_name(row: u32, col: u32) -> String {
    format!("{CELL_FILE_PREFIX}_{row}_{col}.{CELL_FILE_EXTENSION}")
}

/// Write one cell to `output_dir` as `cell_<row>_<col>.png`
///
/// Grid indices come from the cell origin divided by the partition's cell size.
///
/// # Errors
///
/// Returns an error if:
/// - The cell reaches outside its source
/// - The output directory cannot be created
/// - The image cannot be saved
pub fn export_cell<S: PixelSource + ?Sized>(
    cell: &Cell<'_, S>,
    cell_size: (u32, u32),
    output_dir: &Path,
) -> Result<PathBuf> {
    let (row, col) = cell.grid_position(cell_size.0, cell_size.1);
    let output_path = output_dir.join(cell_file_name(row, col));

    std::fs::create_dir_all(output_dir).map_err(|e| CellError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let img = snapshot_to_rgba(&cell.image_data()?)?;
    img.save(&output_path)
        .map_err(|e| CellError::ImageExport {
            path: output_path.clone(),
            source: e,
        })?;

    Ok(output_path)
}

/// Write every cell to `output_dir`, returning the written paths in order
///
/// # Errors
///
/// Stops at the first cell that fails to export
pub fn export_cells<'c, 'a: 'c, S, I>(
    cells: I,
    cell_size: (u32, u32),
    output_dir: &Path,
) -> Result<Vec<PathBuf>>
where
    S: PixelSource + ?Sized + 'a,
    I: IntoIterator<Item = &'c Cell<'a, S>>,
{
    let paths = cells
        .into_iter()
        .map(|cell| export_cell(cell, cell_size, output_dir))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "export_cells: wrote {} cells to '{}'",
        paths.len(),
        output_dir.display()
    );

    Ok(paths)
}
