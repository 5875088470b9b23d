pub mod buffer;
pub mod buffer_list;
pub mod editor;
pub mod error;
pub mod view;

pub use buffer::{Buffer, BufferId};
pub use buffer_list::BufferList;
pub use editor::{Alert, Choice, Editor, Effect, Guarded};
pub use error::FileError;
pub use view::TextView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents possible commands the user can issue to the editor,
/// either through a shortcut or a header bar button.
pub enum Command {
    NewBuffer,
    RemoveBuffer,
    NextBuffer,
    PreviousBuffer,
    SwitchTo(usize),
    Open,
    Save,
    Clear,
    Close,
}
