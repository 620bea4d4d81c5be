// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen: the dashboard. The base layer is navbar + sidebar +
//! content; the notification dropdown and the toast stack render as
//! overlay layers above it.

use super::{App, Message};
use crate::api::model::{Notification, NotificationKind};
use crate::timefmt;
use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use crate::ui::{icons, navbar, notification_panel, sidebar, toast};
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        search_query: &app.search_input,
        badge_count: app.poller.badge_count(),
        panel_open: app.panel.is_open(),
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    let sidebar_view = sidebar::view(&app.sidebar).map(Message::Sidebar);

    let body = Row::new()
        .push(sidebar_view)
        .push(dashboard(app))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Column::new()
        .push(navbar_view)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill);

    let panel_overlay =
        notification_panel::view_overlay(&app.panel, &app.poller).map(Message::Panel);
    let toast_overlay = toast::view::view_overlay(&app.toasts).map(Message::Toast);

    Stack::new()
        .push(base)
        .push(panel_overlay)
        .push(toast_overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The dashboard content: metric cards and the alert list.
fn dashboard(app: &App) -> Element<'_, Message> {
    let title = Text::new("Alertas importantes").size(typography::TITLE_LG);

    let content = Column::new()
        .push(app.metrics.view())
        .push(title)
        .push(alert_list(app))
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

/// The current notifications rendered as clickable alert cards, filtered
/// by the (debounced) search query.
fn alert_list(app: &App) -> Element<'_, Message> {
    let query = app.search_query.trim().to_lowercase();
    let matches: Vec<&Notification> = app
        .poller
        .notifications()
        .iter()
        .filter(|n| matches_query(n, &query))
        .collect();

    if matches.is_empty() {
        return if !query.is_empty() {
            empty_state(
                icons::search(),
                "Nenhum resultado encontrado",
                Some("Tente ajustar sua pesquisa ou limpar os filtros."),
            )
        } else if let Some(message) = app.poller.error() {
            empty_state(icons::warning(), message, None)
        } else {
            empty_state(icons::bell_muted(), "Nenhuma notificação", None)
        };
    }

    let cards = matches
        .into_iter()
        .map(alert_card)
        .collect::<Vec<_>>();

    Column::with_children(cards)
        .spacing(spacing::SM)
        .width(Length::Fill)
        .into()
}

fn matches_query(notification: &Notification, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    notification.title.to_lowercase().contains(query)
        || notification.message.to_lowercase().contains(query)
}

/// One alert card; clicking it runs the same click-through flow as the
/// dropdown items.
fn alert_card(notification: &Notification) -> Element<'_, Message> {
    let accent = kind_accent(notification.kind);

    let title = Text::new(notification.title.as_str()).size(typography::TITLE);
    let message = Text::new(notification.message.as_str())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });
    let when = Text::new(timefmt::time_ago_from_now(notification.timestamp))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let column = Column::new()
        .push(title)
        .push(message)
        .push(when)
        .spacing(spacing::XXS);

    button(
        Container::new(column)
            .padding(spacing::MD)
            .width(Length::Fill),
    )
    .on_press(Message::Panel(notification_panel::Message::ItemClicked(
        notification.id.clone(),
    )))
    .padding(0)
    .width(Length::Fill)
    .style(move |theme, status| alert_card_style(theme, status, accent))
    .into()
}

fn empty_state<'a>(
    glyph: Text<'a>,
    title: &'a str,
    hint: Option<&'a str>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .push(icons::sized(glyph, 40.0).color(palette::GRAY_400))
        .push(
            Text::new(title)
                .size(typography::TITLE)
                .color(palette::GRAY_400),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    if let Some(hint) = hint {
        column = column.push(
            Text::new(hint)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn kind_accent(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Danger => palette::ERROR_500,
        NotificationKind::Warning => palette::WARNING_500,
        NotificationKind::Info => palette::INFO_500,
        NotificationKind::Success => palette::SUCCESS_500,
        NotificationKind::Other => palette::GRAY_400,
    }
}

fn alert_card_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base.color;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            theme.extended_palette().background.weak.color
        }
        _ => base,
    };

    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: theme.palette().text,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}
