use iced::{
    widget::{button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text},
    Element,
};
use yatve_engine::{Alert, Choice};

use crate::style;

const DIALOG_WIDTH: f32 = 360.0;

/// Shows `content` above `base`, blocking input to it.
/// Clicking outside `content` produces `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content)).style(style::backdrop)).on_press(on_blur))
    ]
    .into()
}

/// The unsaved-changes question.
pub fn prompt<'a>() -> Element<'a, Choice> {
    let buttons = row![
        horizontal_space(),
        button(text("Cancel"))
            .on_press(Choice::Cancel)
            .style(button::secondary),
        button(text("Discard"))
            .on_press(Choice::Discard)
            .style(button::danger),
        button(text("Save"))
            .on_press(Choice::Save)
            .style(button::primary),
    ]
    .spacing(8);

    card(column![
        text("Save changes?").size(20),
        text("Do you want to save your changes?"),
        buttons,
    ])
}

/// An error that has to be acknowledged.
pub fn alert(alert: &Alert) -> Element<'_, ()> {
    card(column![
        text(&alert.message).size(20),
        text(&alert.detail),
        row![horizontal_space(), button(text("OK")).on_press(())],
    ])
}

fn card<'a, Message: 'a>(body: iced::widget::Column<'a, Message>) -> Element<'a, Message> {
    container(body.spacing(12))
        .width(DIALOG_WIDTH)
        .padding(16)
        .style(container::rounded_box)
        .into()
}
