use std::convert::identity;

use iced::{
    widget::text_editor::{self, Content},
    Element, Font, Length,
};
use yatve_config::Config;
use yatve_engine::TextView;

/// The live text of the current buffer, as owned by iced's text editor.
#[derive(Default)]
pub struct LiveView {
    content: Content,
}

impl LiveView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a widget action. Returns true when it changed the text.
    pub fn perform(&mut self, action: text_editor::Action) -> bool {
        let is_edit = action.is_edit();
        self.content.perform(action);
        is_edit
    }
}

impl TextView for LiveView {
    /// The lines joined back with `\n`. `Content::text` always ends with a
    /// newline, which would grow the file on every save.
    fn text(&self) -> String {
        let mut text = String::new();
        for (i, line) in self.content.lines().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&line);
        }
        text
    }

    fn set_text(&mut self, text: &str) {
        self.content = Content::with_text(text);
    }
}

/// Monospaced editing area filling the rest of the window.
pub fn text_view<'a>(view: &'a LiveView, config: &Config) -> Element<'a, text_editor::Action> {
    iced::widget::text_editor(&view.content)
        .on_action(identity)
        .font(Font::MONOSPACE)
        .size(config.font_size)
        .padding(config.padding)
        .height(Length::Fill)
        .into()
}
