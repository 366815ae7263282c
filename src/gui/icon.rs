use iced::alignment;

use crate::gui::widget::{text, Text};

pub enum Icon {
    ChevronLeft,
    Close,
    Mute,
    Pause,
    Play,
    VolumeHigh,
}

impl Icon {
    pub const fn as_char(&self) -> char {
        match self {
            Self::ChevronLeft => '\u{2039}',
            Self::Close => '\u{2715}',
            Self::Mute => '\u{1F507}',
            Self::Pause => '\u{23F8}',
            Self::Play => '\u{25B6}',
            Self::VolumeHigh => '\u{1F50A}',
        }
    }

    pub fn big_control(self) -> Text<'static> {
        text(self.as_char().to_string())
            .size(36)
            .width(40)
            .height(40)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .line_height(1.0)
    }

    pub fn small_control(self) -> Text<'static> {
        text(self.as_char().to_string())
            .size(20)
            .width(24)
            .height(24)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .line_height(1.0)
    }
}
