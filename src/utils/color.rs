use eframe::egui::Color32;

/// Palette for the upload cards.
pub mod palette {
    use super::Color32;

    pub const ACCENT: Color32 = Color32::from_rgb(0x26, 0x6e, 0xf1);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x04, 0x88, 0x48);
    pub const FAILURE: Color32 = Color32::from_rgb(0xde, 0x11, 0x35);
    pub const SURFACE: Color32 = Color32::from_rgb(0xf3, 0xf3, 0xf3);
    pub const BORDER: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xe8);
    pub const DROP_HIGHLIGHT: Color32 = Color32::from_rgb(0xef, 0xf4, 0xfe);
    pub const BUTTON: Color32 = Color32::from_rgb(0xe8, 0xe8, 0xe8);
    pub const TEXT: Color32 = Color32::from_rgb(0x28, 0x28, 0x28);
    pub const TEXT_FAINT: Color32 = Color32::from_rgb(0x75, 0x75, 0x75);
}
