mod controller;
mod types;

pub use controller::{UploadController, DEFAULT_TRANSFER_DELAY};
pub use types::{SelectedFile, UploadRecord, UploadStatus};
