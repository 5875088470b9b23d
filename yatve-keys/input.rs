use tracing::trace;
use yatve_engine::{Choice, Command};

use crate::keymap::Keymap;

/// A key as far as shortcuts care. Toolkit adapters translate into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Either Control key.
    Control,
    Character(char),
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Turns key presses into commands while Control is held.
/// The modifier state is tracked from the events themselves rather than
/// taken from the toolkit.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    control_held: bool,
    keymap: Keymap,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control_held(&self) -> bool {
        self.control_held
    }

    /// Returns at most one command for the editor to apply.
    pub fn handle(&mut self, event: KeyEvent) -> Option<Command> {
        match event {
            KeyEvent::Pressed(Key::Control) => {
                self.control_held = true;
                None
            }
            KeyEvent::Released(Key::Control) => {
                self.control_held = false;
                None
            }
            KeyEvent::Pressed(Key::Character(c)) if self.control_held => {
                let command = self.keymap.get(c);
                trace!(%c, ?command, "shortcut");
                command
            }
            KeyEvent::Pressed(_) | KeyEvent::Released(_) => None,
        }
    }
}

/// Keyboard answer to the unsaved-changes prompt: Enter takes the default
/// (Save), Escape cancels.
pub fn prompt_answer(event: KeyEvent) -> Option<Choice> {
    match event {
        KeyEvent::Pressed(Key::Enter) => Some(Choice::Save),
        KeyEvent::Pressed(Key::Escape) => Some(Choice::Cancel),
        _ => None,
    }
}
