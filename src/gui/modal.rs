use iced::{
    padding,
    widget::{mouse_area, opaque, Space},
    Alignment, Length,
};

use crate::{
    gui::{
        button,
        common::Message,
        style,
        widget::{text, Column, Container, Element, Row, Scrollable, Stack},
    },
    lang,
    prelude::Error,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Errors { errors: Vec<Error> },
}

impl Modal {
    pub fn body(&self) -> Column {
        let col = Column::new().spacing(15).padding(padding::right(10));

        match self {
            Self::Errors { errors } => {
                let rendered: Vec<_> = errors.iter().map(lang::handle_error).collect();
                col.push(text(rendered.join("\n\n")))
            }
        }
    }

    pub fn controls(&self) -> Element {
        Row::new()
            .spacing(20)
            .push(button::primary(lang::action::close()).on_press(Message::CloseModal))
            .into()
    }

    fn content(&self, viewport: iced::Size) -> Container {
        Container::new(
            Column::new()
                .spacing(30)
                .padding(padding::top(30).bottom(30))
                .align_x(Alignment::Center)
                .push(
                    Container::new(Scrollable::new(self.body().padding([0, 30])))
                        .padding(padding::right(5))
                        .max_height((viewport.height - 300.0).max(100.0)),
                )
                .push(Container::new(self.controls())),
        )
        .max_width((viewport.width - 40.0).max(200.0))
        .class(style::Container::ModalForeground)
    }

    pub fn view(&self, viewport: iced::Size) -> Element {
        Stack::new()
            .push(
                mouse_area(
                    Container::new(Space::new(Length::Fill, Length::Fill)).class(style::Container::ModalBackground),
                )
                .on_press(Message::CloseModal),
            )
            .push(Container::new(opaque(self.content(viewport))).center(Length::Fill))
            .into()
    }
}
