pub mod input;
pub mod keymap;

pub use input::{prompt_answer, InputHandler, Key, KeyEvent};
pub use keymap::Keymap;
