use anyhow::Context;
use eframe::egui;
use egui_phosphor::regular as ph;
use graphdraw_canvas::{CanvasController, CanvasSize, colorize_positions, scatter_topology};
use graphdraw_core::{Graph, Mode};
use std::path::{Path, PathBuf};

use crate::components::{
    canvas::GraphCanvas,
    file_dialog::{FileDialogManager, FileKind},
    message_dialog::MessageDialog,
    notifications::NotificationManager,
    reset_prompt::{ResetChoice, ResetOutcome, ResetPrompt, resolve_reset},
    status_bar::StatusBar,
};
use crate::settings::{AppSettings, ThemeMode};
use crate::theme::Theme;

/// Menu and shortcut commands, collected during layout and run afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    NewGraph,
    OpenGraph,
    OpenPositions,
    SaveGraph,
    SavePositions,
    SetMode(Mode),
    Exit,
}

pub struct GraphDrawApp {
    controller: CanvasController,
    canvas_size: CanvasSize,

    settings: AppSettings,
    theme: Theme,
    needs_theme_apply: bool,

    file_dialog: FileDialogManager,
    notifications: NotificationManager,
    messages: MessageDialog,
    reset_prompt: ResetPrompt,
}

impl GraphDrawApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();
        let theme = Theme::new(settings.theme);
        theme.apply(&cc.egui_ctx);
        cc.egui_ctx.set_pixels_per_point(settings.ui_scale);
        tracing::info!("Applied theme {:?} at scale {}", settings.theme, settings.ui_scale);

        Self {
            controller: CanvasController::new(),
            canvas_size: CanvasSize::new(800, 600),
            file_dialog: FileDialogManager::new(settings.last_directory.clone()),
            settings,
            theme,
            needs_theme_apply: false,
            notifications: NotificationManager::new(),
            messages: MessageDialog::new(),
            reset_prompt: ResetPrompt::new(),
        }
    }

    fn modal_open(&self) -> bool {
        self.messages.is_open() || self.reset_prompt.is_open()
    }

    fn run(&mut self, command: Command, ctx: &egui::Context) {
        tracing::debug!("Running command {:?}", command);
        match command {
            Command::NewGraph => self.new_graph(),
            Command::OpenGraph => self.open_graph(),
            Command::OpenPositions => self.open_positions(),
            Command::SaveGraph => self.save_graph(),
            Command::SavePositions => self.save_positions(),
            Command::SetMode(mode) => self.controller.set_mode(mode),
            Command::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
        self.settings.last_directory = self.file_dialog.last_directory().map(Path::to_path_buf);
    }

    fn new_graph(&mut self) {
        if self.controller.graph().is_empty() {
            self.controller.clear();
            return;
        }
        self.reset_prompt.open();
    }

    fn finish_reset(&mut self, choice: ResetChoice) {
        let file_dialog = &mut self.file_dialog;
        let result = resolve_reset(choice, &mut self.controller, |graph| {
            prompt_and_save(file_dialog, FileKind::Graph, graph)
        });
        match result {
            Ok(ResetOutcome::SavedAndCleared(_)) => {
                self.notifications.success("Graph saved in DOT format.");
            }
            Ok(ResetOutcome::SaveAbandoned) => {
                self.notifications.warning("Save cancelled; the graph was kept.");
            }
            Ok(ResetOutcome::Cleared | ResetOutcome::Cancelled) => {}
            Err(e) => self.messages.error("Error saving file", &e),
        }
        self.settings.last_directory = self.file_dialog.last_directory().map(Path::to_path_buf);
    }

    fn save_graph(&mut self) {
        if self.controller.graph().is_empty() {
            self.notifications.info("Nothing to save: the graph has no vertices.");
            return;
        }
        match prompt_and_save(&mut self.file_dialog, FileKind::Graph, self.controller.graph()) {
            Ok(Some(_)) => self.notifications.success("Graph saved in DOT format."),
            Ok(None) => {}
            Err(e) => self.messages.error("Error saving file", &e),
        }
    }

    fn save_positions(&mut self) {
        if self.controller.graph().is_empty() {
            self.notifications.info("Nothing to save: the graph has no vertices.");
            return;
        }
        match prompt_and_save(
            &mut self.file_dialog,
            FileKind::Positions,
            self.controller.graph(),
        ) {
            Ok(Some(_)) => self.notifications.success("Positions saved."),
            Ok(None) => {}
            Err(e) => self.messages.error("Error saving file", &e),
        }
    }

    fn open_graph(&mut self) {
        let Some(path) = self.file_dialog.open_path(FileKind::Graph, "Open Graph") else {
            return;
        };
        let size = self.canvas_size;
        let loaded = graphdraw_storage::load_graph(&path)
            .map_err(anyhow::Error::from)
            .and_then(|topology| {
                scatter_topology(
                    topology.vertex_count,
                    topology.edges,
                    size,
                    self.controller.rng_mut(),
                )
                .map_err(anyhow::Error::from)
            })
            .with_context(|| format!("Could not open {}", path.display()));
        self.install(loaded, "Graph loaded.");
    }

    fn open_positions(&mut self) {
        let Some(path) = self.file_dialog.open_path(FileKind::Positions, "Open Positions") else {
            return;
        };
        let loaded = graphdraw_storage::load_positions(&path)
            .map(|points| colorize_positions(&points, self.controller.rng_mut()))
            .with_context(|| format!("Could not open {}", path.display()));
        self.install(loaded, "Positions loaded.");
    }

    /// Replace the drawn graph, or report why loading failed and keep the old one.
    fn install(&mut self, loaded: anyhow::Result<Graph>, success: &str) {
        match loaded {
            Ok(graph) => {
                tracing::info!(
                    "Replacing graph with {} vertices and {} edges",
                    graph.vertex_count(),
                    graph.edge_count()
                );
                self.controller.replace_graph(graph);
                self.notifications.success(success);
            }
            Err(e) => self.messages.error("Error opening file", &e),
        }
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        if self.settings.theme != mode {
            self.settings.theme = mode;
            self.needs_theme_apply = true;
        }
    }

    fn shortcuts(&self, ctx: &egui::Context) -> Option<Command> {
        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(egui::Key::N) {
                Some(Command::NewGraph)
            } else if i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::S) {
                Some(Command::SavePositions)
            } else if i.modifiers.command && i.key_pressed(egui::Key::S) {
                Some(Command::SaveGraph)
            } else if i.modifiers.command && i.key_pressed(egui::Key::O) {
                Some(Command::OpenGraph)
            } else if i.modifiers.is_none() && i.key_pressed(egui::Key::V) {
                Some(Command::SetMode(Mode::Vertex))
            } else if i.modifiers.is_none() && i.key_pressed(egui::Key::E) {
                Some(Command::SetMode(Mode::Edge))
            } else {
                None
            }
        })
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) -> Option<Command> {
        let mut command = None;
        ui.horizontal(|ui| {
            ui.menu_button("File", |ui| {
                let items = [
                    (ph::FILE, "New", Command::NewGraph),
                    (ph::FOLDER_OPEN, "Open Graph...", Command::OpenGraph),
                    (ph::FOLDER_OPEN, "Open Positions...", Command::OpenPositions),
                    (ph::FLOPPY_DISK, "Save Graph...", Command::SaveGraph),
                    (ph::FLOPPY_DISK, "Save Positions...", Command::SavePositions),
                ];
                for (icon, label, item) in items {
                    if ui.button(format!("{icon} {label}")).clicked() {
                        command = Some(item);
                        ui.close();
                    }
                }
                ui.separator();
                if ui.button(format!("{} Exit", ph::SIGN_OUT)).clicked() {
                    command = Some(Command::Exit);
                    ui.close();
                }
            });
            ui.menu_button("Insert", |ui| {
                let mut mode = self.controller.mode();
                ui.radio_value(&mut mode, Mode::Vertex, "Vertex");
                ui.radio_value(&mut mode, Mode::Edge, "Edge");
                if mode != self.controller.mode() {
                    command = Some(Command::SetMode(mode));
                    ui.close();
                }
            });
            ui.menu_button("View", |ui| {
                let mut theme = self.settings.theme;
                for mode in [ThemeMode::Latte, ThemeMode::Mocha] {
                    ui.radio_value(&mut theme, mode, mode.label());
                }
                if theme != self.settings.theme {
                    self.set_theme(theme);
                    ui.close();
                }
            });
        });
        command
    }
}

/// Ask for a destination and write `graph` there. `Ok(None)` if the chooser was dismissed.
fn prompt_and_save(
    file_dialog: &mut FileDialogManager,
    kind: FileKind,
    graph: &Graph,
) -> anyhow::Result<Option<PathBuf>> {
    let title = match kind {
        FileKind::Graph => "Save Graph",
        FileKind::Positions => "Save Positions",
    };
    let Some(path) = file_dialog.save_path(kind, title) else {
        return Ok(None);
    };
    let written = match kind {
        FileKind::Graph => graphdraw_storage::save_graph(&path, graph),
        FileKind::Positions => graphdraw_storage::save_positions(&path, graph),
    };
    written.with_context(|| format!("Could not write {}", path.display()))?;
    Ok(Some(path))
}

impl eframe::App for GraphDrawApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.last_directory = self.file_dialog.last_directory().map(Path::to_path_buf);
        self.settings.save();
        tracing::info!("Exiting");
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_theme_apply {
            tracing::info!("Applying theme {:?}", self.settings.theme);
            self.theme = Theme::new(self.settings.theme);
            self.theme.apply(ctx);
            self.needs_theme_apply = false;
        }

        let mut command = if self.modal_open() {
            None
        } else {
            self.shortcuts(ctx)
        };

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            if let Some(from_menu) = self.menu_bar(ui) {
                command = Some(from_menu);
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            StatusBar::ui(ui, &self.controller);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let output = GraphCanvas::show(ui, &mut self.controller, &self.theme);
                self.canvas_size = output.size;
                if output.event.is_some_and(|event| event.mutated()) {
                    ctx.request_repaint();
                }
            });

        if let Some(command) = command {
            self.run(command, ctx);
        }

        if let Some(choice) = self.reset_prompt.ui(ctx) {
            self.finish_reset(choice);
        }
        self.messages.ui(ctx);
        self.notifications.render(ctx);
    }
}
