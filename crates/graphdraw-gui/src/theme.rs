//! Application theme, powered by catppuccin-egui.

use eframe::egui::{self, Color32};

use crate::settings::ThemeMode;

/// Border radius constants
pub mod radius {
    use eframe::egui::CornerRadius;

    pub const PILL: CornerRadius = CornerRadius::same(255);
}

/// Canvas colours that do not follow the theme.
pub mod canvas {
    use eframe::egui::Color32;

    pub const EDGE: Color32 = Color32::GRAY;
    pub const EDGE_WIDTH: f32 = 1.5;
    pub const VERTEX_RADIUS: f32 = 10.0;
    pub const PENDING_OUTLINE_WIDTH: f32 = 2.5;
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub flavor: catppuccin_egui::Theme,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let flavor = match mode {
            ThemeMode::Latte => catppuccin_egui::LATTE,
            ThemeMode::Mocha => catppuccin_egui::MOCHA,
        };
        Self { mode, flavor }
    }

    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        catppuccin_egui::set_theme(ctx, self.flavor);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        ctx.set_fonts(fonts);
    }

    pub fn canvas_background(&self) -> Color32 {
        match self.mode {
            ThemeMode::Latte => Color32::WHITE,
            ThemeMode::Mocha => self.flavor.base,
        }
    }

    /// Outline for the vertex armed as an edge source.
    pub fn pending_outline(&self) -> Color32 {
        self.flavor.blue
    }
}

/// Badge component for counts or status
pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    let frame = egui::Frame::default()
        .fill(color)
        .corner_radius(radius::PILL)
        .inner_margin(egui::Margin::symmetric(6, 2));

    frame.show(ui, |ui| {
        ui.label(
            egui::RichText::new(text)
                .small()
                .color(ui.visuals().strong_text_color()),
        );
    });
}

pub fn to_egui_color(color: graphdraw_core::Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
