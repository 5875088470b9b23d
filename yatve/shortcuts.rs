use iced::{
    event, keyboard,
    keyboard::key::Named,
    window, Event,
};
use yatve_keys::{Key, KeyEvent};

use crate::Message;

/// Forwards every key press and release, captured or not, so Control is
/// tracked even while the text editor has focus.
pub fn listen(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let key_event = match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => KeyEvent::Pressed(translate(&key)),
        Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => KeyEvent::Released(translate(&key)),
        _ => return None,
    };

    Some(Message::Key(key_event))
}

fn translate(key: &keyboard::Key) -> Key {
    match key.as_ref() {
        keyboard::Key::Named(Named::Control) => Key::Control,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Character(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    }
}
