use iced::{alignment, padding, widget::horizontal_space, Alignment, Length, Size};

use crate::{
    gui::{
        button,
        common::Message,
        icon::Icon,
        style,
        widget::{pick_list, text, Column, Container, Element, Row},
    },
    lang::{self, Language},
    resource::config::{self, Config, Theme},
};

/// Below this window width, the sidebar is hidden behind the trigger.
pub const NARROW_WIDTH: f32 = 768.0;

const WIDTH: f32 = 280.0;

pub fn is_narrow(viewport: Size) -> bool {
    viewport.width < NARROW_WIDTH
}

fn open_request(set_is_open: impl Fn(bool) -> Message) -> Message {
    set_is_open(true)
}

/// Floating button that asks the owner of the sidebar flag to open it.
pub fn trigger<'a>(set_is_open: impl Fn(bool) -> Message) -> Element<'a> {
    Container::new(
        button::floating(Icon::ChevronLeft)
            .on_press(open_request(set_is_open))
            .tooltip_left(lang::action::open_sidebar()),
    )
    .padding(16)
    .align_bottom(Length::Fill)
    .align_right(Length::Fill)
    .into()
}

pub fn panel<'a>(config: &Config, closable: bool) -> Element<'a> {
    Container::new(
        Column::new()
            .spacing(20)
            .padding(padding::all(15.0))
            .push(
                Row::new()
                    .align_y(alignment::Vertical::Center)
                    .push(text(lang::thing::settings()).size(20))
                    .push(horizontal_space())
                    .push_maybe(closable.then(|| {
                        button::icon(Icon::Close)
                            .on_press(Message::SetSidebarOpen(false))
                            .tooltip_left(lang::action::close_sidebar())
                    })),
            )
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .spacing(20)
                    .push(text(lang::field(&lang::thing::language())))
                    .push(pick_list(Language::ALL, Some(config.language), |value| {
                        Message::Config {
                            event: config::Event::Language(value),
                        }
                    })),
            )
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .spacing(20)
                    .push(text(lang::field(&lang::thing::theme())))
                    .push(pick_list(Theme::ALL, Some(config.theme), |value| Message::Config {
                        event: config::Event::Theme(value),
                    })),
            ),
    )
    .width(WIDTH)
    .height(Length::Fill)
    .class(style::Container::Sidebar)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_requests_open() {
        assert!(matches!(open_request(Message::SetSidebarOpen), Message::SetSidebarOpen(true)));
    }

    #[test]
    fn trigger_passes_through_collaborator_message() {
        let message = open_request(|flag| if flag { Message::Exit } else { Message::Ignore });

        assert!(matches!(message, Message::Exit));
    }

    #[test]
    fn sidebar_collapses_on_narrow_windows() {
        assert!(is_narrow(Size::new(480.0, 800.0)));
        assert!(!is_narrow(Size::new(NARROW_WIDTH, 800.0)));
    }
}
