//! "Save before starting a new graph?" confirmation.

use eframe::egui;
use graphdraw_canvas::CanvasController;
use graphdraw_core::Graph;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetChoice {
    /// Save the current graph as DOT, then clear.
    Save,
    /// Clear without saving.
    Discard,
    /// Keep the current graph.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Cancelled,
    Cleared,
    SavedAndCleared(PathBuf),
    /// The save chooser was dismissed; the graph is kept.
    SaveAbandoned,
}

/// Carry out `choice` against the controller.
///
/// `save` is only called for [`ResetChoice::Save`]; it returns the written
/// path, or `None` if the user backed out of choosing one. The graph is
/// cleared only once the save has succeeded.
pub fn resolve_reset<F>(
    choice: ResetChoice,
    controller: &mut CanvasController,
    save: F,
) -> anyhow::Result<ResetOutcome>
where
    F: FnOnce(&Graph) -> anyhow::Result<Option<PathBuf>>,
{
    let outcome = match choice {
        ResetChoice::Cancel => return Ok(ResetOutcome::Cancelled),
        ResetChoice::Discard => ResetOutcome::Cleared,
        ResetChoice::Save => match save(controller.graph())? {
            Some(path) => ResetOutcome::SavedAndCleared(path),
            None => return Ok(ResetOutcome::SaveAbandoned),
        },
    };
    controller.clear();
    tracing::info!("Graph reset: {:?}", outcome);
    Ok(outcome)
}

/// The modal itself. Open it with [`ResetPrompt::open`], then poll [`ResetPrompt::ui`].
#[derive(Default)]
pub struct ResetPrompt {
    open: bool,
}

impl ResetPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the user's answer on the frame it is given.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<ResetChoice> {
        if !self.open {
            return None;
        }

        let mut choice = None;
        let modal = egui::Modal::new(egui::Id::new("reset_prompt")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading("New graph");
            ui.add_space(6.0);
            ui.label("Do you want to save the current graph before creating a new one?");
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    choice = Some(ResetChoice::Save);
                }
                if ui.button("Don't Save").clicked() {
                    choice = Some(ResetChoice::Discard);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(ResetChoice::Cancel);
                }
            });
        });

        if choice.is_none() && modal.should_close() {
            choice = Some(ResetChoice::Cancel);
        }
        if choice.is_some() {
            self.open = false;
        }
        choice
    }
}
