use eframe::egui;
use graphdraw_canvas::{CanvasController, CanvasEvent, CanvasSize};
use graphdraw_core::{Mode, Point};

use crate::theme::{self, Theme};

pub struct GraphCanvasOutput {
    /// Drawing area size, used to place loaded vertices.
    pub size: CanvasSize,
    pub event: Option<CanvasEvent>,
}

/// Paints the graph and feeds pointer input to the controller.
///
/// Redraws everything every frame: edges first, then vertices on top.
pub struct GraphCanvas;

impl GraphCanvas {
    pub fn show(
        ui: &mut egui::Ui,
        controller: &mut CanvasController,
        theme: &Theme,
    ) -> GraphCanvasOutput {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let origin = rect.min;
        let to_local = |pos: egui::Pos2| {
            let local = pos - origin;
            Point::new(local.x.round() as i32, local.y.round() as i32)
        };

        let mut event = None;
        let (pressed, released, held, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
            )
        });

        if pressed
            && response.hovered()
            && let Some(pos) = pointer
        {
            event = Some(controller.press(to_local(pos)));
        } else if (held || released)
            && controller.dragging().is_some()
            && let Some(pos) = pointer
        {
            // Follow the pointer every frame, including the release frame.
            controller.drag(to_local(pos));
        }
        if released || !held {
            controller.release();
        }

        if controller.mode() == Mode::Vertex
            && let Some(pos) = response.hover_pos()
        {
            if controller.dragging().is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            } else if controller.vertex_at(to_local(pos)).is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
        }

        Self::paint(&painter, rect, controller, theme);

        GraphCanvasOutput {
            size: CanvasSize::new(rect.width().round() as i32, rect.height().round() as i32),
            event,
        }
    }

    fn paint(
        painter: &egui::Painter,
        rect: egui::Rect,
        controller: &CanvasController,
        theme: &Theme,
    ) {
        let to_screen = |p: Point| rect.min + egui::vec2(p.x as f32, p.y as f32);
        let graph = controller.graph();

        painter.rect_filled(rect, 0.0, theme.canvas_background());

        let edge_stroke = egui::Stroke::new(theme::canvas::EDGE_WIDTH, theme::canvas::EDGE);
        for index in 0..graph.edge_count() {
            if let Some((a, b)) = graph.edge_endpoints(index) {
                painter.line_segment([to_screen(a), to_screen(b)], edge_stroke);
            }
        }

        for vertex in graph.vertices() {
            painter.circle_filled(
                to_screen(vertex.position),
                theme::canvas::VERTEX_RADIUS,
                theme::to_egui_color(vertex.color),
            );
        }

        if let Some(vertex) = controller.pending_edge().and_then(|i| graph.vertex(i)) {
            painter.circle_stroke(
                to_screen(vertex.position),
                theme::canvas::VERTEX_RADIUS + 3.0,
                egui::Stroke::new(
                    theme::canvas::PENDING_OUTLINE_WIDTH,
                    theme.pending_outline(),
                ),
            );
        }
    }
}
