// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for the toast overlay.
//!
//! Toasts render as small cards with a severity-colored accent border and
//! a dismiss button, stacked in the top-right corner above everything
//! else. Entry and exit phases render faded so the two-phase lifecycle
//! reads as a transition instead of a pop.

use super::presenter::{Message, Presenter};
use super::toast::{Severity, Toast};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let accent = toast.severity().color();
    let alpha = if toast.in_transition() {
        opacity::TOAST_TRANSITION
    } else {
        opacity::OPAQUE
    };

    let icon = severity_icon(toast.severity()).color(Color { a: alpha, ..accent });

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let dismiss = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

/// Renders the whole overlay: every live toast, newest at the bottom,
/// pinned to the top-right corner.
pub fn view_overlay(presenter: &Presenter) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = presenter.visible().map(view_toast).collect();

    if toasts.is_empty() {
        // An empty container that takes no space.
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn severity_icon<'a>(severity: Severity) -> Text<'a> {
    let glyph = match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    };
    icons::sized(glyph, sizing::ICON_MD)
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..base })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..theme.palette().text
            }))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Severity::Success.color();
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn transition_alpha_fades_the_border() {
        let theme = Theme::Light;
        let accent = Severity::Error.color();
        let style = toast_container_style(&theme, accent, opacity::TOAST_TRANSITION);

        assert!(style.border.color.a < opacity::OPAQUE);
    }
}
