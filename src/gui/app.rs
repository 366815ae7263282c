use std::time::{Duration, Instant};

use iced::{alignment, padding, Length, Size, Subscription, Task};

use crate::{
    gui::{
        common::{Flags, Message},
        modal::Modal,
        player::{self, Player},
        sidebar, style,
        widget::{text, Column, Container, Element, Responsive, Row, Scrollable, Stack},
    },
    lang, media,
    prelude::{app_dir, Error},
    resource::{
        config::{self, Config},
        SaveableResourceFile,
    },
};

/// Card heights follow the page's small/medium breakpoints.
fn player_height(viewport: Size) -> f32 {
    if viewport.width >= sidebar::NARROW_WIDTH {
        850.0
    } else if viewport.width >= 640.0 {
        375.0
    } else {
        270.0
    }
}

pub struct App {
    config: Config,
    modals: Vec<Modal>,
    pending_save: Option<Instant>,
    players: Vec<Player>,
    sidebar_open: bool,
}

impl App {
    fn show_modal(&mut self, modal: Modal) {
        self.modals.push(modal);
    }

    fn close_modal(&mut self) {
        self.modals.pop();
    }

    fn save(&mut self, force: bool) {
        let threshold = Duration::from_secs(1);

        if let Some(then) = self.pending_save {
            if force || then.elapsed() >= threshold {
                self.config.save();
                self.pending_save = None;
            }
        }
    }

    fn save_config(&mut self) {
        self.pending_save = Some(Instant::now());
    }

    fn mount_players(sources: Vec<media::Source>, config: &Config, errors: &mut Vec<Error>) -> (Vec<Player>, Task<Message>) {
        let backend = media::init_backend();
        if let Err(e) = &backend {
            log::error!("Video backend is unavailable: {e:?}");
            errors.push(Error::MediaUnavailable { why: e.to_string() });
        }

        let base = app_dir();
        let mut players = vec![];
        let mut tasks = vec![];

        for (index, source) in sources.into_iter().enumerate() {
            let id = player::Id(index);

            let element = match &backend {
                Ok(()) => media::load(&source, &base),
                Err(e) => Err(media::Error::Backend(e.to_string())),
            };

            let (player, task) = Player::new(source, element, &config.playback);
            players.push(player);
            tasks.push(task.map(move |event| Message::Player { id, event }));
        }

        (players, Task::batch(tasks))
    }

    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut errors = vec![];

        let config = match Config::load() {
            Ok(x) => x,
            Err(x) => {
                errors.push(x);
                let _ = Config::archive_invalid();
                Config::default()
            }
        };
        lang::set(config.language);

        log::debug!("Config on startup: {config:?}");

        let sources = if flags.sources.is_empty() {
            config.page.videos.clone()
        } else {
            flags.sources
        };
        let (players, task) = Self::mount_players(sources, &config, &mut errors);

        let mut modals = vec![];
        if !errors.is_empty() {
            modals.push(Modal::Errors { errors });
        }

        (
            Self {
                config,
                modals,
                pending_save: None,
                players,
                sidebar_open: false,
            },
            task,
        )
    }

    pub fn title(&self) -> String {
        lang::window_title()
    }

    pub fn theme(&self) -> style::Theme {
        style::Theme::from(self.config.theme)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Ignore => Task::none(),
            Message::Exit => {
                self.save(true);
                for player in &self.players {
                    log::debug!("Closing player: {} | {:?}", player.source().render(), player.state());
                }
                // Dropping the players stops their pipelines and countdowns.
                self.players.clear();
                iced::exit()
            }
            Message::Save => {
                self.save(false);
                Task::none()
            }
            Message::CloseModal => {
                self.close_modal();
                Task::none()
            }
            Message::Config { event } => {
                match event {
                    config::Event::Theme(value) => {
                        self.config.theme = value;
                    }
                    config::Event::Language(value) => {
                        lang::set(value);
                        self.config.language = value;
                    }
                }
                self.save_config();
                Task::none()
            }
            Message::Player { id, event } => match self.players.get_mut(id.0) {
                Some(player) => player.update(event).map(move |event| Message::Player { id, event }),
                None => {
                    log::warn!("Event for unknown player {id:?}: {event:?}");
                    Task::none()
                }
            },
            Message::SetSidebarOpen(flag) => {
                self.sidebar_open = flag;
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::CloseRequested) => Some(Message::Exit),
            _ => None,
        })];

        if self.pending_save.is_some() {
            subscriptions.push(iced::time::every(Duration::from_millis(200)).map(|_| Message::Save));
        }

        iced::Subscription::batch(subscriptions)
    }

    fn page(&self, viewport: Size, obscured: bool) -> Element {
        let height = player_height(viewport);

        let mut videos = Column::new().spacing(30);
        for (index, player) in self.players.iter().enumerate() {
            videos = videos.push(
                Container::new(player.view(player::Id(index), obscured))
                    .padding(15)
                    .width(Length::Fill)
                    .height(height)
                    .class(style::Container::Player),
            );
        }

        Scrollable::new(
            Column::new()
                .spacing(30)
                .padding(padding::all(20.0).right(30))
                .push(
                    Container::new(
                        text(lang::page::title())
                            .size(34)
                            .class(style::Text::Heading)
                            .align_x(alignment::Horizontal::Center),
                    )
                    .center_x(Length::Fill),
                )
                .push(
                    Container::new(
                        Column::new()
                            .spacing(15)
                            .push(text(lang::page::intro()).size(18))
                            .push(text(lang::page::mission()).size(18)),
                    )
                    .padding(25)
                    .width(Length::Fill)
                    .class(style::Container::Card),
                )
                .push(
                    text(lang::page::video_coverage())
                        .size(28)
                        .class(style::Text::Heading),
                )
                .push(videos),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    pub fn view(&self) -> Element {
        Responsive::new(move |viewport| {
            let narrow = sidebar::is_narrow(viewport);
            let covered = narrow && self.sidebar_open;
            let obscured = !self.modals.is_empty() || covered;

            let content: Element = if narrow {
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(self.page(viewport, obscured))
                    .push_maybe((!self.sidebar_open).then(|| sidebar::trigger(Message::SetSidebarOpen)))
                    .push_maybe(covered.then(|| {
                        Container::new(sidebar::panel(&self.config, true))
                            .align_right(Length::Fill)
                            .height(Length::Fill)
                    }))
                    .into()
            } else {
                Row::new()
                    .spacing(10)
                    .push(self.page(viewport, obscured))
                    .push(sidebar::panel(&self.config, false))
                    .into()
            };

            let stack = Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(Container::new(content).class(style::Container::Primary))
                .push_maybe(self.modals.last().map(|modal| modal.view(viewport)));

            Container::new(stack)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(5.0)
                .into()
        })
        .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(480.0, 270.0 ; "small")]
    #[test_case(700.0, 375.0 ; "medium")]
    #[test_case(1280.0, 850.0 ; "wide")]
    fn sizes_players_by_breakpoint(width: f32, height: f32) {
        assert_eq!(height, player_height(Size::new(width, 900.0)));
    }
}
