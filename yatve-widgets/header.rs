use iced::{
    widget::{button, container, horizontal_space, row, text, Row},
    Alignment, Element, Length,
};
use yatve_engine::Command;

use crate::style;

/// Buttons on the right of the header, right to left.
const DOCUMENT_BUTTONS: [(&str, Command); 3] = [
    ("Open", Command::Open),
    ("Save", Command::Save),
    ("Clear", Command::Clear),
];

/// Title bar with buffer navigation on the left and file buttons on the right.
pub fn header<'a>(title: String, position: String) -> Element<'a, Command> {
    let tabs = row![
        button(text("<"))
            .on_press(Command::PreviousBuffer)
            .style(style::joined_left),
        button(text(">"))
            .on_press(Command::NextBuffer)
            .style(style::joined_right),
    ];

    let documents = Row::with_children(DOCUMENT_BUTTONS.iter().rev().map(
        |&(label, command)| -> Element<'a, Command> {
            button(text(label))
                .on_press(command)
                .style(button::secondary)
                .into()
        },
    ))
    .spacing(6);

    let bar = row![
        tabs,
        button(text("+")).on_press(Command::NewBuffer).style(button::secondary),
        button(text("-")).on_press(Command::RemoveBuffer).style(button::secondary),
        text(position).size(12),
        horizontal_space(),
        text(title),
        horizontal_space(),
        documents,
    ]
    .spacing(6)
    .padding(6)
    .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .style(style::header_bar)
        .into()
}
