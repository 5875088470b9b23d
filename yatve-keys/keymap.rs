use std::collections::HashMap;

use yatve_engine::Command;

/// Fixed table of Control shortcuts.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<char, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl Keymap {
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };

        // Set up default bindings.
        keymap.setup_defaults();
        keymap
    }

    /// Looks up the command bound to `c`. Letters match regardless of case.
    pub fn get(&self, c: char) -> Option<Command> {
        self.bindings.get(&c.to_ascii_lowercase()).copied()
    }

    fn set(&mut self, c: char, command: Command) {
        self.bindings.insert(c, command);
    }

    fn setup_defaults(&mut self) {
        use Command::*;

        // Buffer management.
        self.set('n', NewBuffer);
        self.set('r', RemoveBuffer);

        // Files.
        self.set('o', Open);
        self.set('s', Save);

        // Jump to buffer 1..9.
        for (index, digit) in ('1'..='9').enumerate() {
            self.set(digit, SwitchTo(index));
        }
    }
}
