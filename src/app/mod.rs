mod state;
mod ui;

use crate::upload::{SelectedFile, UploadController};
use crate::utils::content_type::guess_content_type;
use eframe::{egui, App};
pub use state::{Banner, PanelState, PanelVariant};
use tracing::info;

/// Demo window: two upload card variants sharing one lifecycle controller,
/// plus a table of resolved records.
pub struct DropzoneApp {
    controller: UploadController,
    base_panel: PanelState,
    dropzone_panel: PanelState,
    show_records: bool,
}

impl DropzoneApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("starting upload demo");
        Self {
            controller: UploadController::new(),
            base_panel: PanelState::new(PanelVariant::Base),
            dropzone_panel: PanelState::new(PanelVariant::Dropzone),
            show_records: true,
        }
    }

    /// Drops land on the whole window; the single-slot policy means only
    /// the first file of a multi-drop is taken.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };
        if let Some(selected) = Self::selected_from_drop(&file) {
            self.controller.start(selected);
        }
    }

    fn selected_from_drop(file: &egui::DroppedFile) -> Option<SelectedFile> {
        let name = match &file.path {
            Some(path) => path.file_name()?.to_string_lossy().to_string(),
            None if !file.name.is_empty() => file.name.clone(),
            None => return None,
        };
        // Native drops carry no mime type of their own.
        let content_type = guess_content_type(&name);
        Some(SelectedFile::new(name, content_type))
    }

    fn browse_for_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_file() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let content_type = guess_content_type(&name);
            self.controller.start(SelectedFile::new(name, content_type));
        }
    }

    fn update_state(&mut self, ctx: &egui::Context) {
        self.handle_dropped_files(ctx);
        if self.controller.poll() {
            ctx.request_repaint();
        }
        if self.controller.is_uploading() {
            // Keep the spinner moving and pick up the resolution promptly.
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

impl App for DropzoneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
