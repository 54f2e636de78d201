use std::path::PathBuf;

use loupe_core::bitmap::Bitmap;
use loupe_core::config::ViewerConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file into an RGBA bitmap.
    DecodeImage { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Decode complete: source bitmap ready for tier generation.
    ImageDecoded { path: PathBuf, bitmap: Bitmap },

    /// A config file was parsed and validated off the UI thread.
    ConfigImported { config: ViewerConfig },

    Error { message: String },
    Log { message: String },
}
