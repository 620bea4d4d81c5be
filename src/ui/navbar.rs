// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Brand mark, the debounced search input, the theme toggle and the
//! notification bell with its unread badge. The navbar holds no state of
//! its own; everything it renders is handed in through [`ViewContext`].

use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text_input, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Id of the search input, for keyboard-shortcut focusing.
pub const SEARCH_INPUT_ID: &str = "navbar-search";

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub search_query: &'a str,
    pub badge_count: u32,
    pub panel_open: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleTheme,
    ToggleNotifications,
    ToggleSidebar,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SearchChanged(String),
    ToggleTheme,
    ToggleNotifications,
    ToggleSidebar,
}

/// Maps a navbar message onto its application event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SearchChanged(query) => Event::SearchChanged(query),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::ToggleNotifications => Event::ToggleNotifications,
        Message::ToggleSidebar => Event::ToggleSidebar,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let burger = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleSidebar)
        .padding(spacing::XXS)
        .style(chrome_button_style);

    let brand = Text::new("FarmaSystem")
        .size(typography::TITLE_LG)
        .color(palette::PRIMARY_500);

    let search = text_input("Pesquisar...", ctx.search_query)
        .id(iced::widget::Id::new(SEARCH_INPUT_ID))
        .on_input(Message::SearchChanged)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let theme_glyph = if ctx.theme_mode.is_dark() {
        icons::sun()
    } else {
        icons::moon()
    };
    let theme_toggle = button(icons::sized(theme_glyph, sizing::ICON_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XXS)
        .style(chrome_button_style);

    let bell = bell_with_badge(ctx.badge_count, ctx.panel_open);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(burger)
        .push(brand)
        .push(Container::new(search).width(Length::Fill).align_x(alignment::Horizontal::Right))
        .push(theme_toggle)
        .push(bell);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(navbar_container_style)
        .into()
}

/// The bell button with the unread badge overlaid on its corner.
/// The badge is hidden entirely while the count is zero.
fn bell_with_badge<'a>(badge_count: u32, panel_open: bool) -> Element<'a, Message> {
    let glyph = icons::sized(icons::bell(), sizing::ICON_MD);
    let bell = button(glyph)
        .on_press(Message::ToggleNotifications)
        .padding(spacing::XXS)
        .style(move |theme, status| bell_button_style(theme, status, panel_open));

    if badge_count == 0 {
        return bell.into();
    }

    let badge = Container::new(
        Text::new(badge_count.to_string())
            .size(typography::CAPTION)
            .color(palette::WHITE),
    )
    .padding([1.0, 5.0])
    .style(badge_container_style);

    let overlaid = Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    Stack::new()
        .width(Length::Fixed(sizing::ICON_LG + spacing::SM))
        .height(Length::Fixed(sizing::ICON_LG + spacing::XXS))
        .push(Container::new(bell).align_y(alignment::Vertical::Bottom))
        .push(overlaid)
        .into()
}

fn navbar_container_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn chrome_button_style(theme: &Theme, status: button::Status) -> button::Style {
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

fn bell_button_style(theme: &Theme, status: button::Status, panel_open: bool) -> button::Style {
    let mut style = chrome_button_style(theme, status);
    if panel_open {
        style.background = Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        ));
    }
    style
}

fn badge_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::ERROR_500)),
        border: iced::Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
