use std::path::PathBuf;

use crate::{
    lang::{self, Language},
    media,
    prelude::{app_dir, Error},
    resource::{ResourceFile, SaveableResourceFile},
};

#[derive(Debug, Clone)]
pub enum Event {
    Theme(Theme),
    Language(Language),
}

/// Settings for `config.yaml`
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub theme: Theme,
    pub playback: Playback,
    pub page: Page,
}

impl ResourceFile for Config {
    const FILE_NAME: &'static str = "config.yaml";

    fn migrate(mut self) -> Self {
        self.playback.volume = self.playback.volume.clamp(0.0, 1.0);
        self
    }
}

impl SaveableResourceFile for Config {}

impl Config {
    fn file_archived_invalid() -> PathBuf {
        app_dir().join("config.invalid.yaml")
    }

    pub fn load() -> Result<Self, Error> {
        ResourceFile::load().map_err(|e| Error::ConfigInvalid { why: format!("{}", e) })
    }

    pub fn archive_invalid() -> Result<(), Box<dyn std::error::Error>> {
        std::fs::rename(Self::path(), Self::file_archived_invalid())?;
        Ok(())
    }
}

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: &'static [Self] = &[Self::Light, Self::Dark];
}

impl ToString for Theme {
    fn to_string(&self) -> String {
        lang::theme_name(self)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Playback {
    /// Whether players start muted.
    pub muted: bool,
    /// Starting volume of each player, from 0.0 to 1.0.
    pub volume: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            muted: true,
            volume: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Page {
    /// Videos shown under the coverage heading, in order.
    pub videos: Vec<media::Source>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            videos: vec![
                media::Source::new("septvideo3.mp4"),
                media::Source::new("septvideo2.mp4"),
                media::Source::new("septvideo.mp4"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn can_parse_minimal_config() {
        let config = Config::load_from_string("{}").unwrap();

        assert_eq!(Config::default(), config);
    }

    #[test]
    fn can_parse_optional_fields_when_present_in_config() {
        let config = Config::load_from_string(
            r#"
                language: en-US
                theme: Dark
                playback:
                  muted: false
                  volume: 0.5
                page:
                  videos:
                    - path: first.webm
                    - path: https://example.com/second
                      mime: video/mp4
            "#,
        )
        .unwrap();

        assert_eq!(
            Config {
                language: Language::English,
                theme: Theme::Dark,
                playback: Playback {
                    muted: false,
                    volume: 0.5,
                },
                page: Page {
                    videos: vec![
                        media::Source::new("first.webm"),
                        media::Source::new("https://example.com/second").with_mime(Some("video/mp4".to_string())),
                    ],
                },
            },
            config,
        );
    }

    #[test]
    fn clamps_out_of_range_volume() {
        let config = Config::load_from_string("playback: { volume: 3.5 }").unwrap();

        assert_eq!(1.0, config.playback.volume);
        assert!(config.playback.muted);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Config::load_from_string("theme: Sepia").is_err());
    }

    #[test]
    fn defaults_to_three_event_videos() {
        let paths: Vec<_> = Config::default().page.videos.iter().map(|x| x.path.clone()).collect();

        assert_eq!(vec!["septvideo3.mp4", "septvideo2.mp4", "septvideo.mp4"], paths);
    }
}
