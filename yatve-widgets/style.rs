use iced::{
    border::Radius,
    widget::{button, container},
    Border, Color, Theme,
};

const RADIUS: f32 = 4.0;

/// Left half of a pair of buttons drawn as one control.
pub fn joined_left(theme: &Theme, status: button::Status) -> button::Style {
    joined(theme, status, Radius {
        top_left: RADIUS,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: RADIUS,
    })
}

pub fn joined_right(theme: &Theme, status: button::Status) -> button::Style {
    joined(theme, status, Radius {
        top_left: 0.0,
        top_right: RADIUS,
        bottom_right: RADIUS,
        bottom_left: 0.0,
    })
}

fn joined(theme: &Theme, status: button::Status, radius: Radius) -> button::Style {
    let style = button::secondary(theme, status);

    button::Style {
        border: Border {
            radius,
            ..style.border
        },
        ..style
    }
}

pub fn header_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..container::Style::default()
    }
}

/// Dims everything behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
