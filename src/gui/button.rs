use iced::{alignment, widget::tooltip, Padding};

use crate::gui::{
    common::Message,
    icon::Icon,
    style,
    widget::{text, Button, Container, Element, Tooltip},
};

pub struct CustomButton<'a> {
    content: Element<'a>,
    on_press: Option<Message>,
    class: style::Button,
    padding: Option<Padding>,
    tooltip: Option<String>,
    tooltip_position: tooltip::Position,
}

impl CustomButton<'_> {
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn tooltip(mut self, tooltip: String) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn tooltip_left(mut self, tooltip: String) -> Self {
        self.tooltip = Some(tooltip);
        self.tooltip_position = tooltip::Position::Left;
        self
    }
}

impl<'a> From<CustomButton<'a>> for Element<'a> {
    fn from(value: CustomButton<'a>) -> Self {
        let mut button = Button::new(value.content)
            .class(value.class)
            .on_press_maybe(value.on_press);

        if let Some(padding) = value.padding {
            button = button.padding(padding);
        }

        match value.tooltip {
            Some(tooltip) => Tooltip::new(
                button,
                Container::new(text(tooltip).size(14)).padding([2, 4]),
                value.tooltip_position,
            )
            .gap(5)
            .class(style::Container::Tooltip)
            .into(),
            None => button.into(),
        }
    }
}

pub fn primary<'a>(content: String) -> CustomButton<'a> {
    CustomButton {
        content: text(content).align_x(alignment::Horizontal::Center).into(),
        on_press: None,
        class: style::Button::Primary,
        padding: Some([5, 40].into()),
        tooltip: None,
        tooltip_position: tooltip::Position::Top,
    }
}

pub fn icon<'a>(icon: Icon) -> CustomButton<'a> {
    CustomButton {
        content: icon.small_control().into(),
        on_press: None,
        class: style::Button::Icon,
        padding: None,
        tooltip: None,
        tooltip_position: tooltip::Position::Top,
    }
}

pub fn big_icon<'a>(icon: Icon) -> CustomButton<'a> {
    CustomButton {
        content: icon.big_control().into(),
        on_press: None,
        class: style::Button::Icon,
        padding: None,
        tooltip: None,
        tooltip_position: tooltip::Position::Top,
    }
}

/// Round floating button, as used for the sidebar trigger.
pub fn floating<'a>(icon: Icon) -> CustomButton<'a> {
    CustomButton {
        content: icon.big_control().into(),
        on_press: None,
        class: style::Button::Floating,
        padding: Some(8.into()),
        tooltip: None,
        tooltip_position: tooltip::Position::Top,
    }
}
