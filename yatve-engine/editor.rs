use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    buffer::{Buffer, BufferId},
    buffer_list::BufferList,
    error::FileError,
    view::TextView,
    Command,
};

const READ_FAILED: &str = "Error reading from file";
const WRITE_FAILED: &str = "Error writing to file";
const CHANGED_WHILE_OPENING: &str = "The buffer was edited while the file was loading. Open it again to replace the text.";

/// Operations that may throw away unsaved text and therefore go through the
/// unsaved-changes prompt first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guarded {
    RemoveBuffer,
    Open,
    Clear,
    Close,
}

/// The answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Cancel,
    Discard,
    Save,
}

/// A modal error message waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub detail: String,
}

/// External work the shell has to carry out on the editor's behalf.
/// Every effect except `None` and `Exit` is answered by feeding its result
/// back through the matching completion method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show an open dialog, then call `open_path_picked`.
    PickOpenPath(BufferId),
    /// Show a save dialog, then call `save_path_picked`.
    PickSavePath(BufferId),
    /// Read the file, then call `file_read`.
    Read { id: BufferId, path: PathBuf },
    /// Write the file, then call `file_written`.
    Write { id: BufferId, path: PathBuf, contents: String },
    Exit,
}

/// What the editor is waiting for. Commands are refused while any of these
/// is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// The prompt is showing.
    Prompt(Guarded),
    /// A save dialog or write is outstanding for `id`. `revision` is the
    /// buffer revision the write carries, once the write is issued. `then`
    /// runs after the write lands.
    Saving {
        id: BufferId,
        revision: Option<u64>,
        then: Option<Guarded>,
    },
    /// An open dialog or read is outstanding for `id`, started at `revision`.
    Opening { id: BufferId, revision: u64 },
}

/// The window controller.
/// Owns the buffer list and the one visible text view, and keeps the view
/// in sync with whichever buffer is current.
pub struct Editor<V> {
    buffers: BufferList,
    view: V,
    pending: Option<Pending>,
    alert: Option<Alert>,
}

impl<V: TextView> Editor<V> {
    pub fn new(mut view: V) -> Self {
        let buffers = BufferList::new();
        view.set_text(&buffers.current().text());

        Self {
            buffers,
            view,
            pending: None,
            alert: None,
        }
    }

    pub fn buffers(&self) -> &BufferList {
        &self.buffers
    }

    pub fn current(&self) -> &Buffer {
        self.buffers.current()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Gives the shell access to the live widget state for editing.
    /// Call `mark_modified` when an edit changed the text, and leave the
    /// view alone while `is_blocked`.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn mark_modified(&mut self) {
        self.buffers.current_mut().touch();
    }

    /// Window title: a dot when modified, then the file name.
    pub fn title(&self) -> String {
        let buffer = self.buffers.current();
        let marker = if buffer.modified { "• " } else { "" };

        format!("{marker}{}", buffer.name())
    }

    /// Position of the current buffer, e.g. "2/3".
    pub fn position(&self) -> String {
        format!("{}/{}", self.buffers.index() + 1, self.buffers.len())
    }

    /// The guarded action waiting on the unsaved-changes prompt, if the
    /// prompt is showing.
    pub fn prompt(&self) -> Option<Guarded> {
        match self.pending {
            Some(Pending::Prompt(action)) => Some(action),
            _ => None,
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// True while a prompt, a file dialog, a read or write, or an alert keeps
    /// new commands and edits out.
    pub fn is_blocked(&self) -> bool {
        self.pending.is_some() || self.alert.is_some()
    }

    /// Dispatches a user command.
    pub fn apply(&mut self, command: Command) -> Effect {
        if self.is_blocked() {
            debug!(?command, "ignoring command while a dialog is open");
            return Effect::None;
        }

        debug!(?command, "applying command");
        match command {
            Command::NewBuffer => {
                self.create_buffer();
                Effect::None
            }
            Command::RemoveBuffer => self.when_sure(Guarded::RemoveBuffer),
            Command::NextBuffer => {
                self.change_buffer_by(1);
                Effect::None
            }
            Command::PreviousBuffer => {
                self.change_buffer_by(-1);
                Effect::None
            }
            Command::SwitchTo(index) => {
                self.change_buffer_to(index);
                Effect::None
            }
            Command::Open => self.when_sure(Guarded::Open),
            Command::Save => self.save(),
            Command::Clear => self.when_sure(Guarded::Clear),
            Command::Close => self.when_sure(Guarded::Close),
        }
    }

    //
    // Buffer list.
    //

    /// Inserts an empty buffer after the current one and switches to it.
    pub fn create_buffer(&mut self) {
        self.buffers.insert_after_current();
        self.change_buffer_by(1);
    }

    /// Removes the current buffer, or clears it when it is the only one.
    /// Not guarded; `apply(Command::RemoveBuffer)` is.
    pub fn remove_buffer(&mut self) {
        self.buffers.remove_current();
        self.load_view();
    }

    pub fn change_buffer_by(&mut self, delta: isize) {
        self.store_view();
        self.buffers.step(delta);
        self.load_view();
    }

    pub fn change_buffer_to(&mut self, index: usize) {
        if index >= self.buffers.len() {
            debug!(index, len = self.buffers.len(), "no buffer at index");
            return;
        }

        self.store_view();
        self.buffers.select(index);
        self.load_view();
    }

    /// Empties the current buffer and forgets its file. Not guarded.
    pub fn clear(&mut self) {
        self.buffers.current_mut().clear();
        self.load_view();
    }

    fn store_view(&mut self) {
        let text = self.view.text();
        self.buffers.current_mut().set_text(&text);
    }

    fn load_view(&mut self) {
        let text = self.buffers.current().text();
        self.view.set_text(&text);
    }

    //
    // Unsaved-changes guard.
    //

    /// Runs `action` right away when the current buffer is clean, otherwise
    /// raises the prompt and waits for `choose`.
    pub fn when_sure(&mut self, action: Guarded) -> Effect {
        if !self.buffers.current().modified {
            return self.run(action);
        }

        debug!(?action, "asking before discarding changes");
        self.pending = Some(Pending::Prompt(action));
        Effect::None
    }

    /// Resolves the prompt raised by `when_sure`.
    pub fn choose(&mut self, choice: Choice) -> Effect {
        let Some(Pending::Prompt(action)) = self.pending else {
            return Effect::None;
        };

        debug!(?action, ?choice, "prompt answered");
        self.pending = None;
        match choice {
            Choice::Cancel => Effect::None,
            Choice::Discard => self.run(action),
            Choice::Save => self.save_then(Some(action)),
        }
    }

    fn run(&mut self, action: Guarded) -> Effect {
        match action {
            Guarded::RemoveBuffer => {
                self.remove_buffer();
                Effect::None
            }
            Guarded::Open => {
                let buffer = self.buffers.current();
                let id = buffer.id;
                self.pending = Some(Pending::Opening {
                    id,
                    revision: buffer.revision,
                });
                Effect::PickOpenPath(id)
            }
            Guarded::Clear => {
                self.clear();
                Effect::None
            }
            Guarded::Close => Effect::Exit,
        }
    }

    //
    // Files.
    //

    /// Writes the current buffer to its file, asking for a destination
    /// first when it has none. Not guarded.
    pub fn save(&mut self) -> Effect {
        self.save_then(None)
    }

    /// `then` runs once the write succeeded.
    fn save_then(&mut self, then: Option<Guarded>) -> Effect {
        let buffer = self.buffers.current();
        let id = buffer.id;

        match buffer.path.clone() {
            Some(path) => self.issue_write(id, path, then),
            None => {
                self.pending = Some(Pending::Saving {
                    id,
                    revision: None,
                    then,
                });
                Effect::PickSavePath(id)
            }
        }
    }

    fn issue_write(&mut self, id: BufferId, path: PathBuf, then: Option<Guarded>) -> Effect {
        let Some((contents, revision)) = self.contents_of(id) else {
            warn!(?id, "buffer is gone, not saving");
            self.pending = None;
            return Effect::None;
        };

        self.pending = Some(Pending::Saving {
            id,
            revision: Some(revision),
            then,
        });
        Effect::Write { id, path, contents }
    }

    pub fn open_path_picked(&mut self, id: BufferId, path: Option<PathBuf>) -> Effect {
        if !matches!(self.pending, Some(Pending::Opening { id: opening, .. }) if opening == id) {
            warn!(?id, "no open in progress for this buffer");
            return Effect::None;
        }

        match path {
            Some(path) => Effect::Read { id, path },
            None => {
                debug!("open dialog dismissed");
                self.pending = None;
                Effect::None
            }
        }
    }

    pub fn save_path_picked(&mut self, id: BufferId, path: Option<PathBuf>) -> Effect {
        let Some(Pending::Saving { id: saving, revision: None, then }) = self.pending else {
            warn!(?id, "no save dialog in progress");
            return Effect::None;
        };
        if saving != id {
            warn!(?id, ?saving, "save dialog answered for another buffer");
            return Effect::None;
        }

        match path {
            Some(path) => self.issue_write(id, path, then),
            None => {
                debug!(?then, "save dialog dismissed, dropping action");
                self.pending = None;
                Effect::None
            }
        }
    }

    /// Applies a finished read to the buffer that asked for it.
    pub fn file_read(&mut self, id: BufferId, result: Result<(PathBuf, String), FileError>) {
        let Some(Pending::Opening { id: opening, revision }) = self.pending else {
            warn!(?id, "no open in progress, dropping read");
            return;
        };
        if opening != id {
            warn!(?id, ?opening, "read finished for another buffer");
            return;
        }
        self.pending = None;

        let (path, text) = match result {
            Ok(loaded) => loaded,
            Err(error) => {
                warn!(%error, "read failed");
                self.raise(READ_FAILED, error.detail());
                return;
            }
        };

        let is_current = self.buffers.current().id == id;
        let Some(buffer) = self.buffers.find_mut(id) else {
            warn!(?id, path = %path.display(), "buffer is gone, dropping loaded file");
            return;
        };

        if buffer.revision != revision {
            warn!(?id, path = %path.display(), "buffer edited during open, not replacing it");
            self.raise(READ_FAILED, CHANGED_WHILE_OPENING);
            return;
        }

        info!(path = %path.display(), "opened file");
        buffer.load(path, &text);

        if is_current {
            self.load_view();
        }
    }

    /// Applies a finished write and resumes whatever was waiting on it.
    /// The buffer only counts as clean when nothing was typed after the
    /// write was issued.
    pub fn file_written(&mut self, id: BufferId, result: Result<PathBuf, FileError>) -> Effect {
        let Some(Pending::Saving { id: saving, revision: Some(revision), then }) = self.pending else {
            warn!(?id, "no write in progress, dropping completion");
            return Effect::None;
        };
        if saving != id {
            warn!(?id, ?saving, "write finished for another buffer");
            return Effect::None;
        }
        self.pending = None;

        let path = match result {
            Ok(path) => path,
            Err(error) => {
                warn!(%error, ?then, "write failed, dropping action");
                self.raise(WRITE_FAILED, error.detail());
                return Effect::None;
            }
        };

        let Some(buffer) = self.buffers.find_mut(id) else {
            warn!(?id, path = %path.display(), "saved a buffer that is gone");
            return Effect::None;
        };

        info!(path = %path.display(), "saved file");
        buffer.path = Some(path);
        if buffer.revision == revision {
            buffer.modified = false;
        } else {
            debug!(?id, "buffer edited during save, still modified");
        }

        match then {
            Some(action) => self.when_sure(action),
            None => Effect::None,
        }
    }

    /// Live text and revision of a buffer.
    fn contents_of(&self, id: BufferId) -> Option<(String, u64)> {
        let current = self.buffers.current();
        if current.id == id {
            return Some((self.view.text(), current.revision));
        }

        self.buffers
            .iter()
            .find(|buffer| buffer.id == id)
            .map(|buffer| (buffer.text(), buffer.revision))
    }

    fn raise(&mut self, message: &str, detail: &str) {
        self.alert = Some(Alert {
            message: message.to_string(),
            detail: detail.to_string(),
        });
    }
}
