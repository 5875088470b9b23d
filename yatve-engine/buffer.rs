use std::path::{Path, PathBuf};

use ropey::Rope;

const UNTITLED: &str = "Untitled";

/// Identifies a buffer for as long as the editor runs, even when its
/// position in the list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

/// One open document.
/// Holds a snapshot of the text plus the file it was loaded from or saved to.
/// While a buffer is current, the live text lives in the view and `content`
/// is only refreshed when the editor switches away from it.
#[derive(Debug, Clone)]
pub struct Buffer {
    pub id: BufferId,
    pub content: Rope,
    pub path: Option<PathBuf>,
    pub modified: bool,
    /// Bumped on every edit, so a write can tell whether the text it saved
    /// is still the latest.
    pub revision: u64,
}

impl Buffer {
    pub fn new(id: BufferId) -> Self {
        Self {
            id,
            content: Rope::new(),
            path: None,
            modified: false,
            revision: 0,
        }
    }

    /// Records an edit.
    pub fn touch(&mut self) {
        self.modified = true;
        self.revision += 1;
    }

    /// The file's base name, or "Untitled" when the buffer has no file yet.
    pub fn name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    pub fn text(&self) -> String {
        self.content.to_string()
    }

    pub fn set_text(&mut self, text: &str) {
        self.content = Rope::from_str(text);
    }

    /// Replaces the content with a file's contents. The buffer is clean afterwards.
    pub fn load(&mut self, path: PathBuf, text: &str) {
        self.set_text(text);
        self.path = Some(path);
        self.modified = false;
    }

    /// Empties the buffer and forgets its file.
    pub fn clear(&mut self) {
        self.content = Rope::new();
        self.path = None;
        self.modified = false;
    }
}
