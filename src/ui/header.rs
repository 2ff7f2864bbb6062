// SPDX-License-Identifier: MPL-2.0
//! Sticky site header with brand, navigation links, and a hamburger menu.
//!
//! The header stays pinned above the page scrollable. While the page sits at
//! the top it renders transparently over the hero; once the scroll offset
//! passes [`SCROLLED_THRESHOLD`] it gains an elevated surface. The hamburger
//! menu mirrors the nav links; choosing any link closes the menu and asks the
//! parent to navigate.

use crate::page::content;
use crate::page::SectionId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Scroll offset past which the header switches to its elevated styling.
pub const SCROLLED_THRESHOLD: f32 = 100.0;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub menu_open: bool,
    /// Whether the page has scrolled past [`SCROLLED_THRESHOLD`].
    pub scrolled: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NavigateTo(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    Navigate(SectionId),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::NavigateTo(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
    }
}

/// Render the header bar, with the dropdown menu below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let text_color = if ctx.scrolled {
        ctx.scheme.text_primary
    } else {
        ctx.scheme.overlay_text
    };

    let brand = Text::new(content::BRAND)
        .size(typography::TITLE_MD)
        .color(ctx.scheme.brand_primary);

    let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    for (label, section) in content::NAV_LINKS {
        links = links.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::NavigateTo(section))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::nav_link(text_color, ctx.scheme.brand_primary)),
        );
    }

    let hamburger = button(Text::new(if ctx.menu_open { "✕" } else { "☰" }).size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::nav_link(text_color, ctx.scheme.brand_primary));

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(hamburger);

    let background = ctx.scrolled.then_some(ctx.scheme.surface_primary);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header_bar(background))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(spacing::XXS);
    for (label, section) in content::NAV_LINKS {
        menu = menu.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::NavigateTo(section))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::button::nav_link(
                    ctx.scheme.text_primary,
                    ctx.scheme.brand_primary,
                )),
        );
    }

    Container::new(menu)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut menu_open = false;
        let event = update(Message::CloseMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn choosing_a_link_closes_the_menu_and_navigates() {
        let mut menu_open = true;

        let event = update(Message::NavigateTo(SectionId::Pricing), &mut menu_open);

        assert!(!menu_open);
        assert!(matches!(event, Event::Navigate(SectionId::Pricing)));
    }

    #[test]
    fn header_view_renders() {
        let scheme = ColorScheme::light();
        let _element = view(ViewContext {
            scheme: &scheme,
            menu_open: false,
            scrolled: false,
        });
    }

    #[test]
    fn header_view_renders_with_menu_open_and_scrolled() {
        let scheme = ColorScheme::dark();
        let _element = view(ViewContext {
            scheme: &scheme,
            menu_open: true,
            scrolled: true,
        });
    }
}
