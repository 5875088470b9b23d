// TODO: Undo/redo; iced's text editor keeps no history we could swap with the buffer.

use std::path::PathBuf;

use iced::{
    event,
    widget::{column, text_editor},
    window, Element, Subscription, Task, Theme,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use yatve_config::Config;
use yatve_engine::{BufferId, Choice, Command, Editor, Effect, FileError};
use yatve_keys::{prompt_answer, InputHandler, KeyEvent};
use yatve_widgets::{alert, header, modal, prompt, text_view, LiveView};

mod files;
mod shortcuts;

#[derive(Debug, Clone)]
pub enum Message {
    Edit(text_editor::Action),
    Key(KeyEvent),
    Command(Command),
    Choose(Choice),
    DismissAlert,
    OpenPicked(BufferId, Option<PathBuf>),
    SavePicked(BufferId, Option<PathBuf>),
    FileRead(BufferId, Result<(PathBuf, String), FileError>),
    FileWritten(BufferId, Result<PathBuf, FileError>),
    CloseRequested,
}

/// Main application structure.
/// Wires iced events into the editor and carries out the effects it returns.
pub struct Yatve {
    editor: Editor<LiveView>,
    input: InputHandler,
    config: Config,
}

impl Yatve {
    fn new(config: Config) -> Self {
        Self {
            editor: Editor::new(LiveView::new()),
            input: InputHandler::new(),
            config,
        }
    }

    fn title(&self) -> String {
        self.editor.title()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Edit(action) => {
                if !self.editor.is_blocked() && self.editor.view_mut().perform(action) {
                    self.editor.mark_modified();
                }
                Task::none()
            }
            Message::Key(event) => {
                let command = self.input.handle(event);

                if self.editor.prompt().is_some() {
                    return match prompt_answer(event) {
                        Some(choice) => {
                            let effect = self.editor.choose(choice);
                            self.perform(effect)
                        }
                        None => Task::none(),
                    };
                }

                match command {
                    Some(command) => {
                        let effect = self.editor.apply(command);
                        self.perform(effect)
                    }
                    None => Task::none(),
                }
            }
            Message::Command(command) => {
                let effect = self.editor.apply(command);
                self.perform(effect)
            }
            Message::Choose(choice) => {
                let effect = self.editor.choose(choice);
                self.perform(effect)
            }
            Message::DismissAlert => {
                self.editor.dismiss_alert();
                Task::none()
            }
            Message::OpenPicked(id, path) => {
                let effect = self.editor.open_path_picked(id, path);
                self.perform(effect)
            }
            Message::SavePicked(id, path) => {
                let effect = self.editor.save_path_picked(id, path);
                self.perform(effect)
            }
            Message::FileRead(id, result) => {
                self.editor.file_read(id, result);
                Task::none()
            }
            Message::FileWritten(id, result) => {
                let effect = self.editor.file_written(id, result);
                self.perform(effect)
            }
            Message::CloseRequested => {
                let effect = self.editor.apply(Command::Close);
                self.perform(effect)
            }
        }
    }

    /// Turns an editor effect into the iced task that carries it out.
    fn perform(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::PickOpenPath(id) => {
                Task::perform(files::pick_open(), move |path| Message::OpenPicked(id, path))
            }
            Effect::PickSavePath(id) => {
                Task::perform(files::pick_save(), move |path| Message::SavePicked(id, path))
            }
            Effect::Read { id, path } => {
                Task::perform(files::read(path), move |result| Message::FileRead(id, result))
            }
            Effect::Write { id, path, contents } => Task::perform(
                files::write(path, contents),
                move |result| Message::FileWritten(id, result),
            ),
            Effect::Exit => {
                info!("closing");
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let body = column![
            header(self.editor.title(), self.editor.position()).map(Message::Command),
            text_view(self.editor.view(), &self.config).map(Message::Edit),
        ];

        if let Some(error) = self.editor.alert() {
            return modal(
                body,
                alert(error).map(|()| Message::DismissAlert),
                Message::DismissAlert,
            );
        }

        if self.editor.prompt().is_some() {
            return modal(
                body,
                prompt().map(Message::Choose),
                Message::Choose(Choice::Cancel),
            );
        }

        body.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            event::listen_with(shortcuts::listen),
            window::close_requests().map(|_| Message::CloseRequested),
        ])
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().unwrap_or_else(|error| {
        warn!(%error, "using default config");
        Config::default()
    });
    info!(?config, "yatve starting");

    iced::application(Yatve::title, Yatve::update, Yatve::view)
        .subscription(Yatve::subscription)
        .theme(Yatve::theme)
        .window_size(config.window_size)
        .exit_on_close_request(false)
        .run_with(move || (Yatve::new(config), Task::none()))
}
