use iced::{
    widget::{button, container, pick_list, progress_bar, scrollable, slider},
    Background, Border, Color, Shadow, Vector,
};

use crate::resource::config;

macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        Color::from_rgb($r as f32 / 255.0, $g as f32 / 255.0, $b as f32 / 255.0)
    };
}

trait ColorExt {
    fn alpha(self, alpha: f32) -> Color;
}

impl ColorExt for Color {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    background: Color,
    card: Color,
    field: Color,
    text: Color,
    text_heading: Color,
    text_button: Color,
    positive: Color,
    disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from(config::Theme::Light)
    }
}

impl From<config::Theme> for Theme {
    fn from(source: config::Theme) -> Self {
        match source {
            config::Theme::Light => Self {
                background: rgb8!(252, 231, 243),
                card: Color::WHITE,
                field: rgb8!(230, 230, 230),
                text: rgb8!(55, 65, 81),
                text_heading: rgb8!(157, 23, 77),
                text_button: Color::WHITE,
                positive: rgb8!(236, 72, 153),
                disabled: rgb8!(169, 169, 169),
            },
            config::Theme::Dark => Self {
                background: rgb8!(41, 28, 38),
                card: rgb8!(58, 44, 54),
                field: rgb8!(84, 70, 80),
                text: Color::WHITE,
                text_heading: rgb8!(249, 168, 212),
                ..Self::from(config::Theme::Light)
            },
        }
    }
}

impl Theme {
    pub fn heading(&self) -> Color {
        self.text_heading
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::daemon::Appearance {
        iced::application::Appearance {
            background_color: self.background,
            text_color: self.text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub enum Text {
    #[default]
    Default,
    Heading,
}
impl iced::widget::text::Catalog for Theme {
    type Class<'a> = Text;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, item: &Self::Class<'_>) -> iced::widget::text::Style {
        iced::widget::text::Style {
            color: match item {
                Text::Default => None,
                Text::Heading => Some(self.heading()),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Menu;
impl iced::widget::overlay::menu::Catalog for Theme {
    type Class<'a> = Menu;

    fn default<'a>() -> <Self as iced::overlay::menu::Catalog>::Class<'a> {
        Default::default()
    }

    fn style(&self, _class: &<Self as iced::overlay::menu::Catalog>::Class<'_>) -> iced::overlay::menu::Style {
        iced::overlay::menu::Style {
            background: self.field.into(),
            border: Border {
                color: self.text.alpha(0.5),
                width: 1.0,
                radius: 5.0.into(),
            },
            text_color: self.text,
            selected_background: self.positive.into(),
            selected_text_color: Color::WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub enum Button {
    #[default]
    Primary,
    Icon,
    Floating,
}
impl button::Catalog for Theme {
    type Class<'a> = Button;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, class: &Self::Class<'_>, status: button::Status) -> button::Style {
        let active = button::Style {
            background: match class {
                Button::Primary | Button::Floating => Some(self.positive.into()),
                Button::Icon => None,
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: match class {
                    Button::Floating => 100.0.into(),
                    _ => 10.0.into(),
                },
            },
            text_color: match class {
                Button::Icon => self.text,
                _ => self.text_button,
            },
            shadow: Shadow {
                offset: Vector::new(1.0, 1.0),
                blur_radius: match class {
                    Button::Floating => 6.0,
                    _ => 0.0,
                },
                ..Default::default()
            },
        };

        match status {
            button::Status::Active => active,
            button::Status::Hovered => button::Style {
                background: match class {
                    Button::Primary | Button::Floating => Some(self.positive.alpha(0.8).into()),
                    Button::Icon => Some(self.text.alpha(0.2).into()),
                },
                text_color: active.text_color.alpha(0.9),
                shadow: Shadow {
                    offset: Vector::new(1.0, 2.0),
                    ..active.shadow
                },
                ..active
            },
            button::Status::Pressed => button::Style {
                shadow: Shadow {
                    offset: Vector::default(),
                    ..active.shadow
                },
                ..active
            },
            button::Status::Disabled => button::Style {
                shadow: Shadow {
                    offset: Vector::default(),
                    ..active.shadow
                },
                background: active.background.map(|background| match background {
                    Background::Color(color) => Background::Color(Color {
                        a: color.a * 0.5,
                        ..color
                    }),
                    Background::Gradient(gradient) => Background::Gradient(gradient.scale_alpha(0.5)),
                }),
                text_color: Color {
                    a: active.text_color.a * 0.5,
                    ..active.text_color
                },
                ..active
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub enum Container {
    #[default]
    Wrapper,
    Primary,
    Card,
    ModalForeground,
    ModalBackground,
    Player,
    PlayerControls,
    Sidebar,
    Tooltip,
}
impl container::Catalog for Theme {
    type Class<'a> = Container;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, class: &Self::Class<'_>) -> container::Style {
        container::Style {
            background: Some(match class {
                Container::Wrapper => Color::TRANSPARENT.into(),
                Container::Card | Container::Player | Container::Sidebar => self.card.into(),
                Container::PlayerControls => Color::BLACK.alpha(0.35).into(),
                Container::ModalBackground => self.field.alpha(0.5).into(),
                Container::Tooltip => self.field.into(),
                _ => self.background.into(),
            }),
            border: Border {
                color: match class {
                    Container::Wrapper => Color::TRANSPARENT,
                    Container::Card | Container::Player | Container::Sidebar => self.field,
                    Container::ModalForeground => self.disabled,
                    _ => self.text,
                },
                width: match class {
                    Container::Card | Container::Player | Container::Sidebar | Container::ModalForeground => 1.0,
                    _ => 0.0,
                },
                radius: match class {
                    Container::ModalForeground | Container::Card | Container::Player => 10.0.into(),
                    Container::PlayerControls | Container::ModalBackground => 5.0.into(),
                    Container::Tooltip => 20.0.into(),
                    _ => 0.0.into(),
                },
            },
            text_color: match class {
                Container::Wrapper => None,
                Container::PlayerControls => Some(Color::WHITE),
                _ => Some(self.text),
            },
            shadow: match class {
                Container::Card | Container::Player | Container::Sidebar => Shadow {
                    color: Color::BLACK.alpha(0.15),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 6.0,
                },
                _ => Shadow {
                    color: Color::TRANSPARENT,
                    offset: Vector::ZERO,
                    blur_radius: 0.0,
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Scrollable;
impl scrollable::Catalog for Theme {
    type Class<'a> = Scrollable;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, _class: &Self::Class<'_>, status: scrollable::Status) -> scrollable::Style {
        let rail = scrollable::Rail {
            background: Some(Color::TRANSPARENT.into()),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 5.0.into(),
            },
            scroller: scrollable::Scroller {
                color: self.text.alpha(0.7),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 5.0.into(),
                },
            },
        };
        let active = scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
        };

        match status {
            scrollable::Status::Active => active,
            scrollable::Status::Hovered {
                is_horizontal_scrollbar_hovered,
                is_vertical_scrollbar_hovered,
            } => {
                if !is_horizontal_scrollbar_hovered && !is_vertical_scrollbar_hovered {
                    return active;
                }

                let hovered = scrollable::Rail {
                    background: Some(self.text.alpha(0.4).into()),
                    border: Border {
                        color: self.text.alpha(0.8),
                        ..rail.border
                    },
                    ..rail
                };
                scrollable::Style {
                    vertical_rail: hovered,
                    horizontal_rail: hovered,
                    ..active
                }
            }
            scrollable::Status::Dragged { .. } => self.style(
                _class,
                scrollable::Status::Hovered {
                    is_horizontal_scrollbar_hovered: true,
                    is_vertical_scrollbar_hovered: true,
                },
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PickList;
impl pick_list::Catalog for Theme {
    type Class<'a> = PickList;

    fn default<'a>() -> <Self as pick_list::Catalog>::Class<'a> {
        Default::default()
    }

    fn style(&self, _class: &<Self as pick_list::Catalog>::Class<'_>, status: pick_list::Status) -> pick_list::Style {
        let active = pick_list::Style {
            border: Border {
                color: self.text.alpha(0.7),
                width: 1.0,
                radius: 5.0.into(),
            },
            background: self.field.alpha(0.6).into(),
            text_color: self.text,
            placeholder_color: iced::Color::BLACK,
            handle_color: self.text,
        };

        match status {
            pick_list::Status::Active => active,
            pick_list::Status::Hovered => pick_list::Style {
                background: self.field.into(),
                ..active
            },
            pick_list::Status::Opened => active,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Slider;
impl slider::Catalog for Theme {
    type Class<'a> = Slider;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, _class: &Self::Class<'_>, status: slider::Status) -> slider::Style {
        let fade = 0.75;

        let active = slider::Style {
            rail: slider::Rail {
                backgrounds: (self.positive.alpha(fade).into(), Color::WHITE.alpha(fade).into()),
                width: 5.0,
                border: Border {
                    color: self.field.alpha(fade),
                    width: 1.0,
                    radius: 5.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 6.0 },
                background: self.positive.alpha(fade).into(),
                border_width: 1.0,
                border_color: self.field.alpha(fade),
            },
        };

        match status {
            slider::Status::Active => active,
            slider::Status::Hovered | slider::Status::Dragged => slider::Style {
                rail: slider::Rail {
                    backgrounds: (self.positive.into(), Color::WHITE.into()),
                    ..active.rail
                },
                handle: slider::Handle {
                    background: self.positive.into(),
                    border_color: self.field,
                    ..active.handle
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressBar;
impl progress_bar::Catalog for Theme {
    type Class<'a> = ProgressBar;

    fn default<'a>() -> Self::Class<'a> {
        Default::default()
    }

    fn style(&self, _class: &Self::Class<'_>) -> progress_bar::Style {
        progress_bar::Style {
            background: Color::WHITE.alpha(0.4).into(),
            bar: self.positive.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 0.0.into(),
            },
        }
    }
}
