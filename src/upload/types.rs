/// In-flight and terminal states of a single upload attempt.
///
/// A record starts `Pending` and moves exactly once to `Succeeded` or
/// `Failed` when the simulated transfer resolves. Cancelled attempts never
/// reach a terminal state; they are discarded without a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Pending,
    Succeeded,
    Failed,
}

impl UploadStatus {
    /// Numeric display code shown in the records table (0 pending,
    /// 1 succeeded, -1 failed).
    pub fn code(&self) -> i8 {
        match self {
            UploadStatus::Pending => 0,
            UploadStatus::Succeeded => 1,
            UploadStatus::Failed => -1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "Uploading...",
            UploadStatus::Succeeded => "Uploaded",
            UploadStatus::Failed => "Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub id: u64,
    pub filename: String,
    pub status: UploadStatus,
}

/// A file handed to the controller by drag/drop or the file picker.
/// Only the name and content type are consulted; no bytes are read.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
        }
    }

    /// Classification predicate: image uploads succeed, everything else
    /// fails. Stands in for the outcome of a real transfer.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
