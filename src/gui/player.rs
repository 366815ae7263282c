use std::time::Duration;

use iced::{
    padding,
    task::Handle,
    widget::{horizontal_space, mouse_area, progress_bar, vertical_space},
    Length, Task,
};

use crate::{
    gui::{
        button,
        common::Message,
        icon::Icon,
        style,
        widget::{text, Column, Container, Element, Row, Stack},
    },
    lang,
    media::{self, MediaElement},
    prelude::timestamp_mmss,
    resource::config::Playback,
};

/// How long the overlay stays visible after the last pointer activity.
pub const CONTROLS_HIDE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(pub usize);

#[derive(Debug, Clone)]
pub enum Event {
    TogglePlay,
    ToggleMute,
    SetVolume(f64),
    Seek(f64),
    NewFrame,
    EndOfStream,
    MouseEnter,
    MouseMove,
    MouseExit,
    HideControls(u64),
}

/// Mirror of the media element, as shown by the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    pub volume: f64,
    pub current_time: f64,
    pub duration: f64,
    pub show_controls: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: true,
            volume: 1.0,
            current_time: 0.0,
            duration: 0.0,
            show_controls: true,
        }
    }
}

impl PlaybackState {
    pub fn new(playback: &Playback) -> Self {
        let volume = playback.volume.clamp(0.0, 1.0);

        Self {
            muted: playback.muted || volume == 0.0,
            volume,
            ..Default::default()
        }
    }

    /// Fraction of the video already played. Zero until the duration is known.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn time_label(&self) -> String {
        timestamp_mmss(self.current_time.max(0.0) as u64)
    }

    /// Upper bound of the seek slider.
    fn seek_range_end(&self) -> f64 {
        if self.duration > 0.0 {
            self.duration
        } else {
            100.0
        }
    }
}

/// Single pending countdown that hides the overlay.
/// Restarting aborts the previous countdown, and an expiry from a superseded
/// countdown is ignored.
#[derive(Default)]
struct ControlsTimer {
    generation: u64,
    pending: Option<Handle>,
}

impl ControlsTimer {
    fn restart(&mut self) -> Task<Event> {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);

        let (task, handle) = Task::future(countdown(self.generation)).abortable();
        self.pending = Some(handle);
        task
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn expire(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for ControlsTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn countdown(generation: u64) -> Event {
    tokio::time::sleep(CONTROLS_HIDE_DELAY).await;
    Event::HideControls(generation)
}

pub struct Player<M: MediaElement = media::Element> {
    source: media::Source,
    element: Option<M>,
    error: Option<String>,
    state: PlaybackState,
    timer: ControlsTimer,
}

impl<M: MediaElement> Player<M> {
    /// Mount a player around a freshly loaded element and start the overlay countdown.
    pub fn new(source: media::Source, element: Result<M, media::Error>, playback: &Playback) -> (Self, Task<Event>) {
        let state = PlaybackState::new(playback);

        let (element, error) = match element {
            Ok(mut element) => {
                element.set_looping(true);
                element.set_paused(true);
                element.set_muted(state.muted);
                element.set_volume(state.volume);
                (Some(element), None)
            }
            Err(e) => {
                log::error!("Unable to load video: {} | {e:?}", source.render());
                let message = match &e {
                    media::Error::Unsupported { .. } => lang::tell::unsupported_media(),
                    _ => lang::tell::unable_to_play_video(),
                };
                (None, Some(format!("{message}\n\n{e}")))
            }
        };

        let mut player = Self {
            source,
            element,
            error,
            state,
            timer: ControlsTimer::default(),
        };
        let task = player.notify_activity();

        (player, task)
    }

    pub fn source(&self) -> &media::Source {
        &self.source
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn toggle_play(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };

        if element.paused() {
            element.set_paused(false);
            self.state.playing = true;
        } else {
            element.set_paused(true);
            self.state.playing = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };

        element.set_muted(!element.muted());
        self.state.muted = element.muted();
    }

    pub fn set_volume(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.state.muted = volume == 0.0;

        if let Some(element) = self.element.as_mut() {
            element.set_volume(volume);
            element.set_muted(volume == 0.0);
        }
    }

    pub fn seek(&mut self, seconds: f64) {
        self.state.current_time = seconds;

        if let Some(element) = self.element.as_mut() {
            if let Err(e) = element.seek(seconds) {
                log::warn!("Unable to seek to {seconds}: {} | {e:?}", self.source.render());
            }
        }
    }

    pub fn on_time_advance(&mut self) {
        if let Some(element) = self.element.as_ref() {
            self.state.current_time = element.position();
        }
    }

    pub fn on_metadata_ready(&mut self) {
        if let Some(element) = self.element.as_ref() {
            self.state.duration = element.duration();
            log::debug!("Duration of {}: {}s", self.source.render(), self.state.duration);
        }
    }

    /// The element loops, so this only runs if looping is ever turned off.
    pub fn on_ended(&mut self) {
        self.state.playing = false;
    }

    fn on_new_frame(&mut self) {
        let metadata_ready = self
            .element
            .as_ref()
            .is_some_and(|element| self.state.duration == 0.0 && element.duration() > 0.0);

        if metadata_ready {
            self.on_metadata_ready();
        }
        self.on_time_advance();
    }

    #[must_use]
    pub fn notify_activity(&mut self) -> Task<Event> {
        self.state.show_controls = true;
        self.timer.restart()
    }

    pub fn pointer_exit(&mut self) {
        self.timer.cancel();
        self.state.show_controls = false;
    }

    fn hide_controls(&mut self, generation: u64) {
        if self.timer.expire(generation) {
            self.state.show_controls = false;
        }
    }

    #[must_use]
    pub fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::TogglePlay => self.toggle_play(),
            Event::ToggleMute => self.toggle_mute(),
            Event::SetVolume(volume) => self.set_volume(volume),
            Event::Seek(seconds) => self.seek(seconds),
            Event::NewFrame => self.on_new_frame(),
            Event::EndOfStream => self.on_ended(),
            Event::MouseEnter | Event::MouseMove => return self.notify_activity(),
            Event::MouseExit => self.pointer_exit(),
            Event::HideControls(generation) => self.hide_controls(generation),
        }

        Task::none()
    }

    fn controls(&self, id: Id) -> Element {
        let state = &self.state;
        let message = move |event: Event| Message::Player { id, event };

        Container::new(
            Column::new()
                .spacing(5)
                .padding(padding::left(10).right(10).bottom(5))
                .push(vertical_space())
                .push(
                    iced::widget::slider(0.0..=state.seek_range_end(), state.current_time, move |x| {
                        message(Event::Seek(x))
                    })
                    .step(0.1),
                )
                .push(
                    Row::new()
                        .spacing(5)
                        .align_y(iced::alignment::Vertical::Center)
                        .push(
                            button::big_icon(if state.playing { Icon::Pause } else { Icon::Play })
                                .on_press(message(Event::TogglePlay))
                                .tooltip(if state.playing {
                                    lang::action::pause()
                                } else {
                                    lang::action::play()
                                }),
                        )
                        .push(
                            button::icon(if state.muted { Icon::Mute } else { Icon::VolumeHigh })
                                .on_press(message(Event::ToggleMute))
                                .tooltip(if state.muted {
                                    lang::action::unmute()
                                } else {
                                    lang::action::mute()
                                }),
                        )
                        .push(
                            Container::new(
                                iced::widget::slider(0.0..=1.0, state.volume, move |x| message(Event::SetVolume(x)))
                                    .step(0.1),
                            )
                            .width(80),
                        )
                        .push(horizontal_space())
                        .push(text(state.time_label()).size(18)),
                ),
        )
        .align_bottom(Length::Fill)
        .center_x(Length::Fill)
        .into()
    }
}

impl Player<media::Element> {
    fn surface(&self, id: Id) -> Element {
        match (&self.element, &self.error) {
            #[cfg(feature = "video")]
            (Some(video), _) => Container::new(
                iced_video_player::VideoPlayer::new(video)
                    .on_end_of_stream(Message::Player {
                        id,
                        event: Event::EndOfStream,
                    })
                    .on_new_frame(Message::Player {
                        id,
                        event: Event::NewFrame,
                    }),
            )
            .center(Length::Fill)
            .into(),
            #[cfg(not(feature = "video"))]
            (Some(element), _) => match *element {},
            (None, Some(error)) => Container::new(text(format!("{}\n\n{}", self.source.render(), error)))
                .center(Length::Fill)
                .into(),
            (None, None) => Container::new("").center(Length::Fill).into(),
        }
    }

    pub fn view(&self, id: Id, obscured: bool) -> Element {
        let ignore_or = move |event: Event| {
            if obscured {
                Message::Ignore
            } else {
                Message::Player { id, event }
            }
        };

        mouse_area(
            Stack::new()
                .push(
                    mouse_area(
                        Container::new(self.surface(id))
                            .width(Length::Fill)
                            .height(Length::Fill),
                    )
                    .on_press(ignore_or(Event::TogglePlay)),
                )
                .push(if self.state.show_controls {
                    Container::new(self.controls(id))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .class(style::Container::PlayerControls)
                } else {
                    Container::new(progress_bar(0.0..=1.0, self.state.progress() as f32).height(3))
                        .align_bottom(Length::Fill)
                        .width(Length::Fill)
                }),
        )
        .on_enter(ignore_or(Event::MouseEnter))
        .on_move(move |_| ignore_or(Event::MouseMove))
        .on_exit(ignore_or(Event::MouseExit))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[derive(Debug, Default)]
    struct FakeMedia {
        paused: bool,
        muted: bool,
        volume: f64,
        looping: bool,
        position: f64,
        duration: f64,
        seeks: Vec<f64>,
    }

    impl MediaElement for FakeMedia {
        fn paused(&self) -> bool {
            self.paused
        }

        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
        }

        fn muted(&self) -> bool {
            self.muted
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn set_looping(&mut self, looping: bool) {
            self.looping = looping;
        }

        fn position(&self) -> f64 {
            self.position
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn seek(&mut self, seconds: f64) -> Result<(), media::Error> {
            self.position = seconds;
            self.seeks.push(seconds);
            Ok(())
        }
    }

    fn player() -> Player<FakeMedia> {
        Player::new(
            media::Source::new("septvideo.mp4"),
            Ok(FakeMedia::default()),
            &Playback::default(),
        )
        .0
    }

    fn unloaded_player() -> Player<FakeMedia> {
        Player::new(
            media::Source::new("missing.mp4"),
            Err(media::Error::Url),
            &Playback::default(),
        )
        .0
    }

    fn element(player: &Player<FakeMedia>) -> &FakeMedia {
        player.element.as_ref().unwrap()
    }

    fn element_mut(player: &mut Player<FakeMedia>) -> &mut FakeMedia {
        player.element.as_mut().unwrap()
    }

    #[test]
    fn starts_with_default_state() {
        let player = player();

        assert_eq!(PlaybackState::default(), *player.state());
        assert!(element(&player).paused);
        assert!(element(&player).muted);
        assert!(element(&player).looping);
        assert_eq!(1.0, element(&player).volume);
        assert!(player.timer.is_pending());
    }

    #[test]
    fn starts_muted_when_configured_volume_is_zero() {
        let (player, _) = Player::new(
            media::Source::new("septvideo.mp4"),
            Ok(FakeMedia::default()),
            &Playback {
                muted: false,
                volume: 0.0,
            },
        );

        assert!(player.state().muted);
        assert!(element(&player).muted);
    }

    #[test]
    fn toggling_play_twice_restores_state() {
        let mut player = player();

        player.toggle_play();
        assert!(player.state().playing);
        assert!(!element(&player).paused);

        player.toggle_play();
        assert!(!player.state().playing);
        assert!(element(&player).paused);
    }

    #[test]
    fn operations_without_element_are_ignored() {
        let mut player = unloaded_player();

        player.toggle_play();
        player.toggle_mute();
        player.on_time_advance();
        player.on_metadata_ready();
        let _ = player.update(Event::NewFrame);

        assert_eq!(PlaybackState::default(), *player.state());
        assert!(player.error.is_some());
    }

    #[test_case(0.0 ; "silent")]
    #[test_case(0.3 ; "quiet")]
    #[test_case(0.5 ; "half")]
    #[test_case(1.0 ; "full")]
    fn setting_volume_mirrors_mute(volume: f64) {
        let mut player = player();

        player.set_volume(volume);

        assert_eq!(volume, player.state().volume);
        assert_eq!(volume == 0.0, player.state().muted);
        assert_eq!(volume, element(&player).volume);
        assert_eq!(volume == 0.0, element(&player).muted);
    }

    #[test]
    fn raising_volume_from_zero_unmutes() {
        let mut player = player();

        player.set_volume(0.0);
        assert!(player.state().muted);

        player.set_volume(0.5);
        assert!(!player.state().muted);
    }

    #[test]
    fn setting_volume_without_element_keeps_mute_consistent() {
        let (mut player, _) = Player::<FakeMedia>::new(
            media::Source::new("missing.mp4"),
            Err(media::Error::Url),
            &Playback {
                muted: false,
                volume: 0.8,
            },
        );
        assert!(!player.state().muted);

        player.set_volume(0.0);
        assert_eq!(0.0, player.state().volume);
        assert!(player.state().muted);

        player.set_volume(0.4);
        assert!(!player.state().muted);
    }

    #[test]
    fn unsupported_source_is_reported_in_place() {
        let (player, _) = Player::<FakeMedia>::new(
            media::Source::new("poster.png"),
            Err(media::Error::Unsupported {
                mime: "image/png".to_string(),
            }),
            &Playback::default(),
        );

        let error = player.error.as_deref().unwrap_or_default();
        assert!(error.starts_with(&lang::tell::unsupported_media()));
        assert!(error.contains("image/png"));
    }

    #[test_case(1.5, 1.0 ; "above range")]
    #[test_case(-0.2, 0.0 ; "below range")]
    fn clamps_volume(requested: f64, applied: f64) {
        let mut player = player();

        player.set_volume(requested);

        assert_eq!(applied, player.state().volume);
        assert_eq!(applied, element(&player).volume);
    }

    #[test]
    fn ignores_non_finite_volume() {
        let mut player = player();

        player.set_volume(f64::NAN);

        assert_eq!(1.0, player.state().volume);
    }

    #[test]
    fn toggling_mute_follows_element() {
        let mut player = player();

        player.toggle_mute();
        assert!(!player.state().muted);
        assert!(!element(&player).muted);

        player.toggle_mute();
        assert!(player.state().muted);
        assert!(element(&player).muted);
    }

    #[test]
    fn seeking_updates_time_before_element_reports() {
        let mut player = player();
        element_mut(&mut player).duration = 125.0;
        player.on_metadata_ready();

        player.seek(60.5);

        assert_eq!(60.5, player.state().current_time);
        assert_eq!(vec![60.5], element(&player).seeks);
    }

    #[test]
    fn seeking_without_element_still_moves_slider() {
        let mut player = unloaded_player();

        player.seek(12.0);

        assert_eq!(12.0, player.state().current_time);
    }

    #[test_case(0.0, 0.0, 0.0 ; "nothing known")]
    #[test_case(42.0, 0.0, 0.0 ; "time without duration")]
    #[test_case(25.0, 100.0, 0.25 ; "quarter")]
    #[test_case(125.0, 125.0, 1.0 ; "end")]
    fn computes_progress(current_time: f64, duration: f64, progress: f64) {
        let state = PlaybackState {
            current_time,
            duration,
            ..Default::default()
        };

        assert_eq!(progress, state.progress());
    }

    #[test]
    fn mirrors_metadata_and_time_advance() {
        let mut player = player();

        player.toggle_play();
        assert!(player.state().playing);
        assert_eq!(0.0, player.state().duration);

        element_mut(&mut player).duration = 125.0;
        player.on_metadata_ready();
        assert_eq!(125.0, player.state().duration);

        element_mut(&mut player).position = 42.3;
        player.on_time_advance();
        assert_eq!(42.3, player.state().current_time);
        assert_eq!("00:42", player.state().time_label());
    }

    #[test]
    fn new_frame_reports_metadata_before_time() {
        let mut player = player();
        element_mut(&mut player).duration = 90.0;
        element_mut(&mut player).position = 3.0;

        let _ = player.update(Event::NewFrame);

        assert_eq!(90.0, player.state().duration);
        assert_eq!(3.0, player.state().current_time);
    }

    #[test]
    fn end_of_stream_stops_playing() {
        let mut player = player();
        player.toggle_play();

        let _ = player.update(Event::EndOfStream);

        assert!(!player.state().playing);
    }

    #[test]
    fn countdown_expiry_hides_controls() {
        let mut player = player();
        let generation = player.timer.generation;

        let _ = player.update(Event::HideControls(generation));

        assert!(!player.state().show_controls);
        assert!(!player.timer.is_pending());
    }

    #[test]
    fn activity_restarts_countdown() {
        let mut player = player();
        let first = player.timer.generation;

        let _ = player.update(Event::MouseMove);
        let second = player.timer.generation;
        assert_ne!(first, second);

        let _ = player.update(Event::HideControls(first));
        assert!(player.state().show_controls);
        assert!(player.timer.is_pending());

        let _ = player.update(Event::HideControls(second));
        assert!(!player.state().show_controls);
    }

    #[test]
    fn pointer_exit_hides_controls_immediately() {
        let mut player = player();
        let generation = player.timer.generation;

        let _ = player.update(Event::MouseExit);
        assert!(!player.state().show_controls);
        assert!(!player.timer.is_pending());

        let _ = player.update(Event::MouseEnter);
        assert!(player.state().show_controls);

        let _ = player.update(Event::HideControls(generation));
        assert!(player.state().show_controls);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_waits_for_hide_delay() {
        let early = tokio::time::timeout(CONTROLS_HIDE_DELAY - Duration::from_millis(1), countdown(7)).await;
        assert!(early.is_err());

        assert!(matches!(countdown(7).await, Event::HideControls(7)));
    }
}
