use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Message {
    title: String,
    body: String,
}

/// Modal box for failures the user has to acknowledge.
#[derive(Default)]
pub struct MessageDialog {
    message: Option<Message>,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    /// Show `error` with its whole cause chain. Replaces any message still open.
    pub fn error(&mut self, title: impl Into<String>, error: &anyhow::Error) {
        let title = title.into();
        let body = format!("{error:#}");
        tracing::error!("{}: {}", title, body);
        self.message = Some(Message { title, body });
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut acknowledged = false;
        let modal = egui::Modal::new(egui::Id::new("message_dialog")).show(ctx, |ui| {
            ui.set_max_width(420.0);
            ui.heading(&message.title);
            ui.add_space(6.0);
            ui.label(&message.body);
            ui.add_space(10.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

        if acknowledged || modal.should_close() {
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_keeps_cause_chain() {
        let mut dialog = MessageDialog::new();
        let err = Err::<(), _>(std::io::Error::other("disk full"))
            .context("Could not write graph.dot")
            .unwrap_err();
        dialog.error("Error saving file", &err);

        assert!(dialog.is_open());
        let message = dialog.message.as_ref().unwrap();
        assert_eq!(message.title, "Error saving file");
        assert_eq!(message.body, "Could not write graph.dot: disk full");
    }
}
