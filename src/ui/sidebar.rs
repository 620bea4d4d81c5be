// SPDX-License-Identifier: MPL-2.0
//! Collapsible navigation sidebar.
//!
//! The rail lists the backend's main areas. Collapsing hides the labels
//! and narrows the rail; the collapsed flag is persisted by the
//! application root so it survives restarts.

use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Destinations mirrored from the backend's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTarget {
    #[default]
    Dashboard,
    Stock,
    Medications,
    Suppliers,
    Reports,
}

impl NavTarget {
    const ALL: [NavTarget; 5] = [
        NavTarget::Dashboard,
        NavTarget::Stock,
        NavTarget::Medications,
        NavTarget::Suppliers,
        NavTarget::Reports,
    ];

    fn label(self) -> &'static str {
        match self {
            NavTarget::Dashboard => "Dashboard",
            NavTarget::Stock => "Estoque",
            NavTarget::Medications => "Medicamentos",
            NavTarget::Suppliers => "Fornecedores",
            NavTarget::Reports => "Relatórios",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            NavTarget::Dashboard => "▦",
            NavTarget::Stock => "▤",
            NavTarget::Medications => "✚",
            NavTarget::Suppliers => "⛟",
            NavTarget::Reports => "◷",
        }
    }
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleCollapsed,
    Select(NavTarget),
}

/// Events propagated to the application root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The collapsed flag changed; the root persists it.
    CollapsedChanged(bool),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    collapsed: bool,
    active: NavTarget,
}

impl State {
    /// Restores the sidebar with a persisted collapsed flag.
    #[must_use]
    pub fn with_collapsed(collapsed: bool) -> Self {
        Self {
            collapsed,
            active: NavTarget::default(),
        }
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn active(&self) -> NavTarget {
        self.active
    }
}

/// Processes a sidebar message and returns the event for the root.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleCollapsed => {
            state.collapsed = !state.collapsed;
            Event::CollapsedChanged(state.collapsed)
        }
        Message::Select(target) => {
            state.active = target;
            Event::None
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let mut items = Column::new().spacing(spacing::XXS);
    for target in NavTarget::ALL {
        items = items.push(nav_item(target, state.active == target, state.collapsed));
    }

    let width = if state.collapsed {
        sizing::SIDEBAR_COLLAPSED_WIDTH
    } else {
        sizing::SIDEBAR_WIDTH
    };

    Container::new(items)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(sidebar_container_style)
        .into()
}

fn nav_item(target: NavTarget, active: bool, collapsed: bool) -> Element<'static, Message> {
    let glyph = Text::new(target.glyph()).size(typography::TITLE);

    let content: Element<'static, Message> = if collapsed {
        Container::new(glyph)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Text::new(target.label()).size(typography::BODY))
            .into()
    };

    button(content)
        .on_press(Message::Select(target))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme, status| nav_item_style(theme, status, active))
        .into()
}

fn sidebar_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn nav_item_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let background = if active {
        Some(iced::Background::Color(palette::PRIMARY_500))
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
                theme.extended_palette().background.strong.color,
            )),
            _ => None,
        }
    };

    button::Style {
        background,
        text_color: if active {
            palette::WHITE
        } else {
            theme.palette().text
        },
        border: iced::Border {
            radius: radius::MD.into(),
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
    fn toggle_reports_the_new_collapsed_flag() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::ToggleCollapsed),
            Event::CollapsedChanged(true)
        );
        assert_eq!(
            update(&mut state, Message::ToggleCollapsed),
            Event::CollapsedChanged(false)
        );
    }

    #[test]
    fn restores_persisted_collapsed_flag() {
        let state = State::with_collapsed(true);
        assert!(state.is_collapsed());
    }

    #[test]
    fn selection_changes_the_active_target() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::Select(NavTarget::Reports)),
            Event::None
        );
        assert_eq!(state.active(), NavTarget::Reports);
    }
}
