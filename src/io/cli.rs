//! Command-line interface for batch cell analysis of image files

use crate::analysis::entropy::validate_sensitivity;
use crate::io::configuration::{DEFAULT_COLOR_SENSITIVITY, SUPPORTED_EXTENSIONS};
use crate::io::error::{Result, invalid_argument};
use crate::io::image::{export_cells, load_store};
use crate::io::progress::ProgressManager;
use crate::io::report::{CellReport, format_table};
use crate::pixel::source::PixelSource;
use crate::spatial::partition::CellSize;
use crate::spatial::registry::CellRegistry;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cellstat")]
#[command(
    author,
    version,
    about = "Partition images into a grid of cells and report per-cell colour statistics"
)]
/// Command-line arguments for the cell analysis tool
pub struct Cli {
    /// Input image file or directory of images to analyze
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Cell width in pixels (defaults to a fifth of the image width)
    #[arg(short = 'W', long)]
    pub cell_width: Option<u32>,

    /// Cell height in pixels (defaults to a fifth of the image height)
    #[arg(short = 'H', long)]
    pub cell_height: Option<u32>,

    /// Quantization step for the entropy measures
    #[arg(short, long, default_value_t = DEFAULT_COLOR_SENSITIVITY)]
    pub sensitivity: f64,

    /// Write every cell as `cell_<row>_<col>.png` under this directory
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Cell size requested on the command line
    pub const fn cell_size(&self) -> CellSize {
        CellSize {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch analysis of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Analyze every target image, returning one report list per file
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target collection, decoding,
    /// analysis or export fails
    pub fn process(&mut self) -> Result<Vec<(PathBuf, Vec<CellReport>)>> {
        self.cli.cell_size().validate()?;
        validate_sensitivity(self.cli.sensitivity)?;

        let files = self.collect_files()?;
        if files.is_empty() {
            warn!("No images found under '{}'", self.cli.target.display());
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut results = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let reports = self.process_file(file, index)?;
            results.push((file.clone(), reports));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(results)
    }

    /// Analyze every target image and print one table per file
    ///
    /// # Errors
    ///
    /// Propagates every failure of [`FileProcessor::process`]
    // Allow print for the report itself, which is the tool's output
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<()> {
        for (path, reports) in self.process()? {
            println!("{}", path.display());
            println!("{}", format_table(&reports));
            println!();
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_argument(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG, JPEG or GIF image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && is_supported_image(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<Vec<CellReport>> {
        let store = load_store(input_path)?;

        let mut registry = CellRegistry::new();
        registry.partition_cells_from_image(&store, self.cli.cell_size())?;
        let cell_size = self.cli.cell_size().resolve(store.width(), store.height())?;

        info!(
            "{}: {} cells of {}x{}",
            input_path.display(),
            registry.len(),
            cell_size.0,
            cell_size.1
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, registry.len());
        }

        let mut reports = Vec::with_capacity(registry.len());
        for (done, cell) in registry.cells().enumerate() {
            reports.push(CellReport::from_cell(cell, cell_size, self.cli.sensitivity)?);
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_cells(index, done + 1);
            }
        }

        if let Some(ref export_root) = self.cli.export {
            let output_dir = export_root.join(input_path.file_stem().unwrap_or_default());
            export_cells(registry.cells(), cell_size, &output_dir)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(reports)
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
