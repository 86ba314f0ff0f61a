use crate::upload::{UploadRecord, UploadStatus};

/// Which of the two card variants a panel renders. Both drive the same
/// controller; they differ only in chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelVariant {
    /// Styled after the wrapped third-party uploader: inline error text
    /// with a Retry button.
    Base,
    /// The hand-rolled dropzone: cloud glyph, red border on failure.
    Dropzone,
}

/// What the drop area of a panel should show right now.
#[derive(Debug, PartialEq, Eq)]
pub enum Banner<'a> {
    Idle,
    Uploading,
    Done(&'a UploadRecord),
    Failed(&'a UploadRecord),
}

/// Per-panel view state. All upload state lives in the controller; a panel
/// only remembers how much of the history its result banner has dismissed.
pub struct PanelState {
    pub variant: PanelVariant,
    acknowledged: usize,
}

impl PanelState {
    pub fn new(variant: PanelVariant) -> Self {
        Self {
            variant,
            acknowledged: 0,
        }
    }

    pub fn banner<'a>(&self, completed: &'a [UploadRecord], uploading: bool) -> Banner<'a> {
        if uploading {
            return Banner::Uploading;
        }
        if completed.len() <= self.acknowledged {
            return Banner::Idle;
        }
        match completed.last() {
            Some(record) if record.status == UploadStatus::Succeeded => Banner::Done(record),
            Some(record) => Banner::Failed(record),
            None => Banner::Idle,
        }
    }

    /// Dismisses the current result banner ("New Upload" / "Retry").
    pub fn dismiss(&mut self, completed: &[UploadRecord]) {
        self.acknowledged = completed.len();
    }
}
