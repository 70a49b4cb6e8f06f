use std::path::{Path, PathBuf};

/// What a chosen file is going to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Graph,
    Positions,
}

impl FileKind {
    fn filter(self) -> (&'static str, &'static [&'static str]) {
        match self {
            FileKind::Graph => ("DOT graph", &["dot", "gv"]),
            FileKind::Positions => ("Positions", &["txt"]),
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            FileKind::Graph => "graph.dot",
            FileKind::Positions => "positions.txt",
        }
    }
}

/// Native file choosers (via rfd) that remember the last directory used.
pub struct FileDialogManager {
    last_directory: Option<PathBuf>,
}

impl FileDialogManager {
    pub fn new(last_directory: Option<PathBuf>) -> Self {
        Self { last_directory }
    }

    pub fn last_directory(&self) -> Option<&Path> {
        self.last_directory.as_deref()
    }

    fn dialog(&self, kind: FileKind, title: &str) -> rfd::FileDialog {
        let (name, extensions) = kind.filter();
        let mut dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter(name, extensions)
            .add_filter("All files", &["*"]);
        if let Some(dir) = &self.last_directory {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    /// Ask where to save. `None` when the user dismisses the chooser.
    pub fn save_path(&mut self, kind: FileKind, title: &str) -> Option<PathBuf> {
        let picked = self
            .dialog(kind, title)
            .set_file_name(kind.default_file_name())
            .save_file();
        self.remember(picked)
    }

    /// Ask which file to open. `None` when the user dismisses the chooser.
    pub fn open_path(&mut self, kind: FileKind, title: &str) -> Option<PathBuf> {
        let picked = self.dialog(kind, title).pick_file();
        self.remember(picked)
    }

    fn remember(&mut self, picked: Option<PathBuf>) -> Option<PathBuf> {
        match &picked {
            Some(path) => {
                tracing::debug!("File chosen: {:?}", path);
                self.last_directory = path.parent().map(Path::to_path_buf);
            }
            None => tracing::debug!("File chooser dismissed"),
        }
        picked
    }
}
