// SPDX-License-Identifier: MPL-2.0
//! Notification dropdown panel.
//!
//! The shell around the poller's list: open/close state, outside-click and
//! Escape dismissal, header actions (refresh, mark all read) and the list
//! body with its loading/error/empty states. Exactly one instance exists,
//! owned by the application root, so two dropdowns can never be open at
//! once.

use crate::api::model::{Notification, NotificationKind};
use crate::notifications::Poller;
use crate::timefmt;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{
    button, container, mouse_area, scrollable, text, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

// =============================================================================
// Messages
// =============================================================================

/// Messages emitted by the panel and its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Toggle the dropdown visibility (the bell).
    ToggleDropdown,
    /// Close the dropdown (outside click, Escape).
    CloseDropdown,
    /// No-op message to consume clicks on the panel without closing it.
    ConsumeClick,
    /// User-initiated refresh.
    Refresh,
    /// Mark every notification read.
    MarkAllRead,
    /// A list item was clicked.
    ItemClicked(String),
}

/// Events propagated to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The dropdown just opened; the root must force one load.
    Opened,
    /// A load was requested explicitly.
    RequestLoad { force: bool },
    /// Mark-all-read was requested.
    RequestMarkAll,
    /// An item was activated; the root resolves its click-through.
    ItemActivated(String),
}

// =============================================================================
// State
// =============================================================================

/// Open/closed state of the dropdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    open: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Closes without any follow-up effect (Escape path).
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Processes a panel message and returns the event for the root.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleDropdown => {
            state.open = !state.open;
            if state.open {
                Event::Opened
            } else {
                Event::None
            }
        }
        Message::CloseDropdown => {
            state.open = false;
            Event::None
        }
        Message::ConsumeClick => Event::None,
        Message::Refresh => Event::RequestLoad { force: true },
        Message::MarkAllRead => Event::RequestMarkAll,
        Message::ItemClicked(id) => Event::ItemActivated(id),
    }
}

// =============================================================================
// View
// =============================================================================

/// Renders the dropdown overlay: a click-catcher covering the window with
/// the panel stacked on top of it, anchored below the navbar's right edge.
///
/// Returns an empty element while the dropdown is closed.
pub fn view_overlay<'a>(state: &State, poller: &'a Poller) -> Element<'a, Message> {
    if !state.open {
        return Space::new().into();
    }

    // Clicks anywhere outside the panel close the dropdown; clicks on the
    // panel itself are consumed so they reach the panel's own widgets only.
    let catcher = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::CloseDropdown);

    let panel = mouse_area(panel_body(poller)).on_press(Message::ConsumeClick);

    let anchored = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(iced::Padding {
            top: sizing::NAVBAR_HEIGHT,
            right: spacing::MD,
            ..iced::Padding::ZERO
        });

    Stack::new().push(catcher).push(anchored).into()
}

fn panel_body(poller: &Poller) -> Element<'_, Message> {
    let header = panel_header(poller);
    let body = panel_list(poller);

    let content = Column::new()
        .push(header)
        .push(body)
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::PANEL_WIDTH));

    Container::new(content)
        .padding(spacing::MD)
        .max_height(sizing::PANEL_MAX_HEIGHT)
        .style(panel_container_style)
        .into()
}

fn panel_header(poller: &Poller) -> Element<'_, Message> {
    let count = Text::new(poller.count_label())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let refresh_glyph = if poller.is_refreshing() {
        icons::sized(icons::refresh(), sizing::ICON_SM).color(palette::GRAY_400)
    } else {
        icons::sized(icons::refresh(), sizing::ICON_SM)
    };
    let refresh = button(refresh_glyph)
        .on_press(Message::Refresh)
        .padding(spacing::XXS)
        .style(ghost_button_style);

    let mark_all = button(Text::new("Marcar todas como lidas").size(typography::CAPTION))
        .on_press(Message::MarkAllRead)
        .padding(spacing::XXS)
        .style(ghost_button_style);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(count).width(Length::Fill))
        .push(mark_all)
        .push(refresh)
        .into()
}

fn panel_list(poller: &Poller) -> Element<'_, Message> {
    if poller.is_loading() && !poller.loaded_once() {
        return placeholder(icons::refresh(), "Carregando notificações...");
    }

    if let Some(message) = poller.error() {
        return placeholder(icons::warning(), message);
    }

    if poller.notifications().is_empty() {
        return placeholder(icons::bell_muted(), "Nenhuma notificação");
    }

    let items = poller
        .notifications()
        .iter()
        .map(view_item)
        .collect::<Vec<_>>();

    scrollable(Column::with_children(items).spacing(spacing::XXS))
        .height(Length::Shrink)
        .into()
}

/// One list row; the whole row is the click target.
fn view_item(notification: &Notification) -> Element<'_, Message> {
    let (glyph, accent) = kind_badge(notification.kind);
    let icon = Container::new(icons::sized(glyph, sizing::ICON_MD).color(accent))
        .padding(spacing::XXS);

    let title = Text::new(notification.title.as_str()).size(typography::BODY);
    let body = Text::new(notification.message.as_str())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });
    let when = Text::new(timefmt::time_ago_from_now(notification.timestamp))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let column = Column::new().push(title).push(body).push(when).spacing(2.0);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(icon)
        .push(column);

    button(row)
        .on_press(Message::ItemClicked(notification.id.clone()))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme, status| item_button_style(theme, status, accent))
        .into()
}

fn placeholder<'a>(glyph: Text<'a>, message: &'a str) -> Element<'a, Message> {
    let content = Column::new()
        .push(icons::sized(glyph, sizing::ICON_LG).color(palette::GRAY_400))
        .push(
            Text::new(message)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn kind_badge<'a>(kind: NotificationKind) -> (Text<'a>, Color) {
    match kind {
        NotificationKind::Danger => (icons::warning(), palette::ERROR_500),
        NotificationKind::Warning => (icons::warning(), palette::WARNING_500),
        NotificationKind::Info => (icons::info(), palette::INFO_500),
        NotificationKind::Success => (icons::checkmark(), palette::SUCCESS_500),
        NotificationKind::Other => (icons::info(), palette::GRAY_400),
    }
}

fn panel_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn ghost_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn item_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: iced::Border {
            color: accent,
            width: 0.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_open_reports_opened() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::ToggleDropdown), Event::Opened);
        assert!(state.is_open());
    }

    #[test]
    fn toggle_again_closes_silently() {
        let mut state = State::new();
        update(&mut state, Message::ToggleDropdown);
        assert_eq!(update(&mut state, Message::ToggleDropdown), Event::None);
        assert!(!state.is_open());
    }

    #[test]
    fn outside_click_closes() {
        let mut state = State::new();
        update(&mut state, Message::ToggleDropdown);
        assert_eq!(update(&mut state, Message::CloseDropdown), Event::None);
        assert!(!state.is_open());
    }

    #[test]
    fn consume_click_keeps_the_panel_open() {
        let mut state = State::new();
        update(&mut state, Message::ToggleDropdown);
        assert_eq!(update(&mut state, Message::ConsumeClick), Event::None);
        assert!(state.is_open());
    }

    #[test]
    fn refresh_requests_a_forced_load() {
        let mut state = State::new();
        assert_eq!(
            update(&mut state, Message::Refresh),
            Event::RequestLoad { force: true }
        );
    }

    #[test]
    fn item_click_propagates_the_id() {
        let mut state = State::new();
        assert_eq!(
            update(&mut state, Message::ItemClicked("n1".into())),
            Event::ItemActivated("n1".into())
        );
    }

    #[test]
    fn mark_all_read_propagates() {
        let mut state = State::new();
        assert_eq!(update(&mut state, Message::MarkAllRead), Event::RequestMarkAll);
    }
}
