use std::path::Path;

use crate::prelude::resolve_relative;

const DEFAULT_MIME: &str = "video/mp4";

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Url,
    Unsupported { mime: String },
    Backend(String),
    #[cfg(feature = "video")]
    Video(iced_video_player::Error),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(feature = "video")]
impl From<iced_video_player::Error> for Error {
    fn from(value: iced_video_player::Error) -> Self {
        Self::Video(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "{error}"),
            Self::Url => write!(f, "url"),
            Self::Unsupported { mime } => write!(f, "{mime}"),
            Self::Backend(why) => write!(f, "{why}"),
            #[cfg(feature = "video")]
            Self::Video(error) => write!(f, "{error}"),
        }
    }
}

/// A playable video, identified by a locator and a MIME type hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct Source {
    /// File path or URL of the video.
    /// Relative paths in the config file are resolved against the config folder.
    pub path: String,
    /// MIME type of the video.
    /// When omitted, it is guessed from the file extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl Source {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mime: None,
        }
    }

    pub fn with_mime(self, mime: Option<String>) -> Self {
        Self { mime, ..self }
    }

    pub fn render(&self) -> &str {
        &self.path
    }

    pub fn mime(&self) -> String {
        match &self.mime {
            Some(mime) => mime.trim().to_lowercase(),
            None => mime_guess::from_path(self.path_without_query())
                .first_raw()
                .unwrap_or(DEFAULT_MIME)
                .to_string(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.mime().starts_with("video/")
    }

    fn path_without_query(&self) -> &str {
        self.path.split(['?', '#']).next().unwrap_or(&self.path)
    }

    fn remote_url(&self) -> Option<url::Url> {
        let url = url::Url::parse(&self.path).ok()?;
        // Drive letters like `C:` also parse as a scheme.
        (url.scheme().len() > 1).then_some(url)
    }

    /// Location handed to the media backend.
    pub fn url(&self, base: &Path) -> Result<url::Url, Error> {
        if let Some(url) = self.remote_url() {
            return Ok(url);
        }

        let path = std::path::absolute(resolve_relative(&self.path, base))?;
        url::Url::from_file_path(path).map_err(|_| Error::Url)
    }
}

/// Native playback surface that a player drives and mirrors.
pub trait MediaElement {
    fn paused(&self) -> bool;
    fn set_paused(&mut self, paused: bool);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);
    fn set_volume(&mut self, volume: f64);
    fn set_looping(&mut self, looping: bool);
    /// Playback position in seconds.
    fn position(&self) -> f64;
    /// Total length in seconds, or 0 while unknown.
    fn duration(&self) -> f64;
    fn seek(&mut self, seconds: f64) -> Result<(), Error>;
}

#[cfg(feature = "video")]
pub type Element = iced_video_player::Video;

/// Seek target for a slider value. Negative or non-finite values go to the start.
#[cfg_attr(not(feature = "video"), allow(unused))]
fn seek_position(seconds: f64) -> std::time::Duration {
    if seconds.is_finite() && seconds > 0.0 {
        std::time::Duration::from_secs_f64(seconds)
    } else {
        std::time::Duration::ZERO
    }
}

#[cfg(not(feature = "video"))]
pub type Element = Unavailable;

#[cfg(feature = "video")]
pub fn init_backend() -> Result<(), Error> {
    gstreamer::init().map_err(|e| Error::Backend(e.to_string()))
}

#[cfg(not(feature = "video"))]
pub fn init_backend() -> Result<(), Error> {
    Err(Error::Backend("video support is disabled in this build".to_string()))
}

#[cfg(feature = "video")]
pub fn load(source: &Source, base: &Path) -> Result<Element, Error> {
    if !source.is_video() {
        return Err(Error::Unsupported { mime: source.mime() });
    }

    let url = source.url(base)?;
    log::info!("Loading video ({}): {url}", source.mime());
    Ok(iced_video_player::Video::new(&url)?)
}

#[cfg(not(feature = "video"))]
pub fn load(source: &Source, _base: &Path) -> Result<Element, Error> {
    if !source.is_video() {
        return Err(Error::Unsupported { mime: source.mime() });
    }

    Err(Error::Backend("video support is disabled in this build".to_string()))
}

#[cfg(feature = "video")]
impl MediaElement for iced_video_player::Video {
    fn paused(&self) -> bool {
        iced_video_player::Video::paused(self)
    }

    fn set_paused(&mut self, paused: bool) {
        iced_video_player::Video::set_paused(self, paused)
    }

    fn muted(&self) -> bool {
        iced_video_player::Video::muted(self)
    }

    fn set_muted(&mut self, muted: bool) {
        iced_video_player::Video::set_muted(self, muted)
    }

    fn set_volume(&mut self, volume: f64) {
        iced_video_player::Video::set_volume(self, volume)
    }

    fn set_looping(&mut self, looping: bool) {
        iced_video_player::Video::set_looping(self, looping)
    }

    fn position(&self) -> f64 {
        iced_video_player::Video::position(self).as_secs_f64()
    }

    fn duration(&self) -> f64 {
        iced_video_player::Video::duration(self).as_secs_f64()
    }

    fn seek(&mut self, seconds: f64) -> Result<(), Error> {
        iced_video_player::Video::seek(self, seek_position(seconds))?;
        Ok(())
    }
}

/// Stand-in element for builds without a video backend. It can never be constructed.
#[cfg(not(feature = "video"))]
pub enum Unavailable {}

#[cfg(not(feature = "video"))]
impl MediaElement for Unavailable {
    fn paused(&self) -> bool {
        match *self {}
    }

    fn set_paused(&mut self, _paused: bool) {
        match *self {}
    }

    fn muted(&self) -> bool {
        match *self {}
    }

    fn set_muted(&mut self, _muted: bool) {
        match *self {}
    }

    fn set_volume(&mut self, _volume: f64) {
        match *self {}
    }

    fn set_looping(&mut self, _looping: bool) {
        match *self {}
    }

    fn position(&self) -> f64 {
        match *self {}
    }

    fn duration(&self) -> f64 {
        match *self {}
    }

    fn seek(&mut self, _seconds: f64) -> Result<(), Error> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("septvideo.mp4", None, "video/mp4")]
    #[test_case("clip.webm", None, "video/webm")]
    #[test_case("https://example.com/clip.mp4?token=1", None, "video/mp4")]
    #[test_case("no-extension", None, "video/mp4")]
    #[test_case("clip.bin", Some(" Video/MP4 "), "video/mp4")]
    fn can_determine_mime(path: &str, hint: Option<&str>, mime: &str) {
        let source = Source::new(path).with_mime(hint.map(str::to_string));
        assert_eq!(mime, source.mime());
    }

    #[test_case(60.5, std::time::Duration::from_millis(60_500) ; "inside")]
    #[test_case(-3.0, std::time::Duration::ZERO ; "negative")]
    #[test_case(f64::NAN, std::time::Duration::ZERO ; "nan")]
    #[test_case(f64::INFINITY, std::time::Duration::ZERO ; "infinite")]
    fn converts_slider_value_to_seek_position(seconds: f64, position: std::time::Duration) {
        assert_eq!(position, seek_position(seconds));
    }

    #[test]
    fn refuses_to_load_non_video_source() {
        let loaded = load(&Source::new("poster.png"), Path::new("."));
        assert!(matches!(loaded, Err(Error::Unsupported { mime }) if mime == "image/png"));
    }

    #[test]
    fn rejects_non_video_mime() {
        assert!(!Source::new("poster.png").is_video());
        assert!(Source::new("poster.png").with_mime(Some("video/mp4".to_string())).is_video());
    }

    #[test]
    fn keeps_remote_urls() {
        let source = Source::new("https://example.com/septvideo.mp4");
        assert_eq!(
            "https://example.com/septvideo.mp4",
            source.url(Path::new("/unused")).unwrap().as_str()
        );
    }

    #[test]
    fn converts_relative_paths_to_file_urls() {
        let base = std::env::temp_dir();
        let url = Source::new("septvideo.mp4").url(&base).unwrap();
        assert_eq!("file", url.scheme());
        assert!(url.path().ends_with("/septvideo.mp4"));
    }
}
