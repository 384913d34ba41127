//! Analysis constants and runtime configuration defaults

/// Name of the red channel
pub const RED: &str = "r";
/// Name of the green channel
pub const GREEN: &str = "g";
/// Name of the blue channel
pub const BLUE: &str = "b";
/// Name of the alpha channel
pub const ALPHA: &str = "a";

/// Channel layout of decoded RGBA buffers
pub const RGBA_CHANNELS: [&str; 4] = [RED, GREEN, BLUE, ALPHA];

// Absent channels read as fully opaque / full intensity
/// Value returned for a channel a pixel entry doesn't carry
pub const MISSING_CHANNEL_VALUE: u8 = 255;

/// Grid divisions per axis when no cell size is requested
pub const DEFAULT_GRID_DIVISIONS: u32 = 5;

/// Quantization step used by the entropy measures when none is given
pub const DEFAULT_COLOR_SENSITIVITY: f64 = 1.0;

// ITU-R BT.601 luma weights
/// Red weight of the greyscale luminance
pub const LUMA_RED: f64 = 0.299;
/// Green weight of the greyscale luminance
pub const LUMA_GREEN: f64 = 0.587;
/// Blue weight of the greyscale luminance
pub const LUMA_BLUE: f64 = 0.114;

// Output settings
/// Prefix of exported cell images (`cell_<row>_<col>.png`)
pub const CELL_FILE_PREFIX: &str = "cell";
/// Extension of exported cell images
pub const CELL_FILE_EXTENSION: &str = "png";
/// Source image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
