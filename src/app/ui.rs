use super::state::{Banner, PanelState, PanelVariant};
use super::DropzoneApp;
use crate::upload::UploadController;
use crate::utils::color::palette;
use eframe::egui::{self, Color32, Margin, RichText, Rounding, Stroke};

const CARD_TITLE: &str = "razorpay_payin";
const DROP_AREA_HEIGHT: f32 = 140.0;

/// What a panel asks the app to do after rendering. Banner dismissal is
/// handled inside the panel; only actions touching shared state bubble up.
enum PanelAction {
    Browse,
    Cancel,
    ToggleRecords,
}

impl DropzoneApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        let drag_over = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.heading("File upload");
                    ui.label(
                        RichText::new("One controller, two cards. Images succeed, everything else fails.")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
                ui.add_space(16.0);

                let mut actions = Vec::new();
                ui.columns(2, |columns| {
                    if let Some(action) = upload_panel(
                        &mut columns[0],
                        &mut self.base_panel,
                        &self.controller,
                        drag_over,
                    ) {
                        actions.push(action);
                    }
                    if let Some(action) = upload_panel(
                        &mut columns[1],
                        &mut self.dropzone_panel,
                        &self.controller,
                        drag_over,
                    ) {
                        actions.push(action);
                    }
                });

                for action in actions {
                    match action {
                        PanelAction::Browse => self.browse_for_file(),
                        PanelAction::Cancel => self.controller.cancel(),
                        PanelAction::ToggleRecords => self.show_records = !self.show_records,
                    }
                }

                if self.show_records {
                    ui.add_space(20.0);
                    self.render_records(ui);
                }
                ui.add_space(16.0);
            });
        });
    }

    fn render_records(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            egui::Grid::new("upload_records")
                .striped(true)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.strong("Name");
                    ui.strong("Status");
                    ui.strong("Status No.");
                    ui.end_row();

                    for record in self.controller.completed() {
                        ui.label(&record.filename);
                        ui.label(record.status.label());
                        ui.label(record.status.code().to_string());
                        ui.end_row();
                    }
                    if let Some(record) = self.controller.active() {
                        ui.label(&record.filename);
                        ui.label(record.status.label());
                        ui.label(record.status.code().to_string());
                        ui.end_row();
                    }
                });
        });
    }
}

fn upload_panel(
    ui: &mut egui::Ui,
    panel: &mut PanelState,
    controller: &UploadController,
    drag_over: bool,
) -> Option<PanelAction> {
    let mut action = None;
    let banner = panel.banner(controller.completed(), controller.is_uploading());

    egui::Frame::none()
        .fill(Color32::WHITE)
        .rounding(Rounding::same(12.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("🗁").size(18.0).color(palette::TEXT));
                ui.label(
                    RichText::new(CARD_TITLE)
                        .size(18.0)
                        .strong()
                        .color(palette::TEXT),
                );
            });

            summary_line(ui, controller);
            ui.add_space(8.0);

            let (area_fill, border) = area_colors(&banner, drag_over);
            egui::Frame::none()
                .fill(area_fill)
                .stroke(Stroke::new(2.0, border))
                .rounding(Rounding::same(12.0))
                .inner_margin(Margin::symmetric(18.0, 20.0))
                .show(ui, |ui| {
                    ui.set_min_height(DROP_AREA_HEIGHT);
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        action = drop_area_content(ui, panel, controller, &banner);
                    });
                });
        });

    action
}

fn summary_line(ui: &mut egui::Ui, controller: &UploadController) {
    let total = controller.total_attempts();
    let summary = if total == 0 {
        "No file uploaded".to_string()
    } else if controller.is_uploading() {
        format!(
            "Running • {}/{} Complete",
            controller.succeeded_count(),
            total
        )
    } else {
        format!("Done • {}/{} Success", controller.succeeded_count(), total)
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new(summary).size(11.0).color(palette::TEXT_FAINT));

        let failed: Vec<_> = controller.failed().collect();
        if !failed.is_empty() {
            ui.label(RichText::new("⚠").color(palette::TEXT))
                .on_hover_ui(|ui| {
                    ui.strong("failed for:");
                    for record in &failed {
                        ui.horizontal(|ui| {
                            ui.label("🗋");
                            ui.label(&record.filename);
                        });
                    }
                });
        }
    });
}

fn area_colors(banner: &Banner<'_>, drag_over: bool) -> (Color32, Color32) {
    if drag_over {
        return (palette::DROP_HIGHLIGHT, palette::ACCENT);
    }
    match banner {
        Banner::Done(_) => (palette::SURFACE, palette::SUCCESS),
        Banner::Failed(_) => (palette::SURFACE, palette::FAILURE),
        _ => (palette::SURFACE, palette::BORDER),
    }
}

fn drop_area_content(
    ui: &mut egui::Ui,
    panel: &mut PanelState,
    controller: &UploadController,
    banner: &Banner<'_>,
) -> Option<PanelAction> {
    match banner {
        Banner::Uploading => {
            ui.add(egui::Spinner::new().size(24.0).color(palette::ACCENT));
            ui.label(RichText::new("Uploading File").strong().color(palette::TEXT));
            ui.add_space(4.0);
            if pill_button(ui, "Cancel").clicked() {
                return Some(PanelAction::Cancel);
            }
            None
        }
        Banner::Done(record) => {
            ui.label(RichText::new("✔").size(20.0).color(palette::SUCCESS));
            ui.label(RichText::new("Upload Complete").strong().color(palette::TEXT));
            ui.label(RichText::new(&record.filename).color(palette::TEXT));
            ui.add_space(4.0);
            let mut action = None;
            ui.horizontal(|ui| {
                if pill_button(ui, "View Details").clicked() {
                    action = Some(PanelAction::ToggleRecords);
                }
                if pill_button(ui, "New Upload").clicked() {
                    panel.dismiss(controller.completed());
                    // The dropzone variant re-opens the picker straight away.
                    if panel.variant == PanelVariant::Dropzone {
                        action = Some(PanelAction::Browse);
                    }
                }
            });
            action
        }
        Banner::Failed(_) if panel.variant == PanelVariant::Base => {
            ui.label(RichText::new("⚠").size(20.0).color(palette::FAILURE));
            ui.label(RichText::new("Upload failed").strong().color(palette::TEXT));
            ui.add_space(4.0);
            if pill_button(ui, "Retry").clicked() {
                panel.dismiss(controller.completed());
            }
            None
        }
        // The dropzone variant keeps the idle affordance on failure; only
        // the red border signals it.
        _ => {
            if panel.variant == PanelVariant::Dropzone {
                ui.label(RichText::new("☁").size(22.0).color(palette::TEXT));
            }
            ui.label(
                RichText::new("Drop files here to upload")
                    .strong()
                    .color(palette::TEXT),
            );
            ui.add_space(4.0);
            if pill_button(ui, "Browse files").clicked() {
                panel.dismiss(controller.completed());
                return Some(PanelAction::Browse);
            }
            None
        }
    }
}

fn pill_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(palette::TEXT))
            .fill(palette::BUTTON)
            .rounding(Rounding::same(14.0)),
    )
}
