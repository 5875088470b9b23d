pub mod dialog;
pub mod header;
pub mod style;
pub mod text_view;

pub use dialog::{alert, modal, prompt};
pub use header::header;
pub use text_view::{text_view, LiveView};
