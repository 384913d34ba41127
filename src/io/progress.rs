//! Terminal progress for batch cell analysis
//!
//! Each image gets a bar counting analyzed cells. Only the most recently
//! started images keep a visible bar; a batch bar counting finished images
//! appears once the batch is larger than the visible window.

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.green/white}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] images {pos}/{len} [{bar:40.green/white}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Cell counts of one image in the batch
#[derive(Debug, Clone, Default)]
struct ImageProgress {
    label: String,
    cells_done: usize,
    cell_total: usize,
    finished: bool,
}

impl ImageProgress {
    fn render(&self, bar: &ProgressBar) {
        bar.set_length(self.cell_total as u64);
        bar.set_position(self.cells_done as u64);
        bar.set_prefix(if self.finished {
            format!("done {}", self.label)
        } else {
            self.label.clone()
        });
        bar.set_message(format!("{}/{} cells", self.cells_done, self.cell_total));
    }
}

/// Progress display for a batch of images being partitioned and analyzed
pub struct ProgressManager {
    display: MultiProgress,
    batch_bar: Option<ProgressBar>,
    image_bars: Vec<ProgressBar>,
    /// Images in start order; `None` until the image is started
    images: Vec<Option<ImageProgress>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            display: MultiProgress::new(),
            batch_bar: None,
            image_bars: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Allocate bars for a batch of `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.images = vec![None; image_count];

        if image_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let bar = ProgressBar::new(image_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.display.add(bar));
        }

        self.image_bars = (0..image_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(0);
                bar.set_style(CELL_STYLE.clone());
                self.display.add(bar)
            })
            .collect();
    }

    /// Begin tracking image `index`, which partitioned into `cell_total` cells
    pub fn start_file(&mut self, index: usize, path: &Path, cell_total: usize) {
        if index >= self.images.len() {
            self.images.resize(index + 1, None);
        }
        if let Some(slot) = self.images.get_mut(index) {
            *slot = Some(ImageProgress {
                label: path.file_name().unwrap_or_default().to_string_lossy().into_owned(),
                cell_total,
                ..ImageProgress::default()
            });
        }
        self.refresh();
    }

    /// Record that `cells_done` cells of image `index` have statistics
    pub fn update_cells(&mut self, index: usize, cells_done: usize) {
        if let Some(Some(image)) = self.images.get_mut(index) {
            image.cells_done = cells_done.min(image.cell_total);
            self.refresh();
        }
    }

    /// Mark image `index` as fully analyzed
    pub fn complete_file(&mut self, index: usize) {
        if let Some(Some(image)) = self.images.get_mut(index) {
            image.cells_done = image.cell_total;
            image.finished = true;
            if let Some(bar) = &self.batch_bar {
                bar.inc(1);
            }
            self.refresh();
        }
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_with_message("all images analyzed");
        }
        let _ = self.display.clear();
    }

    /// Redraw the visible bars with the latest started images, oldest on top
    fn refresh(&self) {
        let started: Vec<&ImageProgress> = self.images.iter().flatten().collect();
        let hidden = started.len().saturating_sub(self.image_bars.len());

        for (position, bar) in self.image_bars.iter().enumerate() {
            match started.get(hidden + position) {
                Some(image) => image.render(bar),
                None => {
                    bar.set_length(0);
                    bar.set_prefix(String::new());
                    bar.set_message(String::new());
                }
            }
        }
    }
}
