use crate::theme::badge;
use eframe::egui;
use egui_phosphor::regular as ph;
use graphdraw_canvas::CanvasController;
use graphdraw_core::Mode;

pub struct StatusBar;

impl StatusBar {
    pub fn ui(ui: &mut egui::Ui, controller: &CanvasController) {
        ui.horizontal(|ui| {
            let (icon, color) = match controller.mode() {
                Mode::Vertex => (ph::CIRCLE, ui.visuals().selection.bg_fill),
                Mode::Edge => (ph::LINE_SEGMENT, ui.visuals().warn_fg_color),
            };
            badge(ui, &format!("{icon} {}", controller.mode().label()), color);

            ui.separator();
            let graph = controller.graph();
            ui.label(format!(
                "{} vertices, {} edges",
                graph.vertex_count(),
                graph.edge_count()
            ));

            if let Some(source) = controller.pending_edge() {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Edge from vertex {source}: pick the other end"))
                        .color(ui.visuals().weak_text_color()),
                );
            }
        });
    }
}
