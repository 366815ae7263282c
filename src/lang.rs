use std::sync::Mutex;

use fluent::{bundle::FluentBundle, FluentArgs, FluentResource};
use intl_memoizer::concurrent::IntlLangMemoizer;
use regex::Regex;
use std::sync::LazyLock;
use unic_langid::LanguageIdentifier;

use crate::{prelude::Error, resource::config::Theme};

/// Display language.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub enum Language {
    /// English
    #[serde(rename = "en-US")]
    English,

    /// Hindi
    #[default]
    #[serde(rename = "hi-IN")]
    Hindi,
}

impl Language {
    pub const ALL: &'static [Self] = &[Self::English, Self::Hindi];

    pub fn id(&self) -> LanguageIdentifier {
        let id = match self {
            Self::English => "en-US",
            Self::Hindi => "hi-IN",
        };
        id.parse().unwrap()
    }

    fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिन्दी",
        }
    }
}

impl ToString for Language {
    fn to_string(&self) -> String {
        self.name().to_string()
    }
}

static BUNDLE: LazyLock<Mutex<FluentBundle<FluentResource, IntlLangMemoizer>>> = LazyLock::new(|| {
    let ftl = include_str!("../lang/en-US.ftl").to_owned();
    let res = FluentResource::try_new(ftl).expect("Failed to parse Fluent file content.");

    let mut bundle = FluentBundle::new_concurrent(vec![Language::English.id()]);
    bundle.set_use_isolating(false);

    bundle
        .add_resource(res)
        .expect("Failed to add Fluent resources to the bundle.");

    Mutex::new(bundle)
});

fn set_language(language: Language) {
    let mut bundle = BUNDLE.lock().unwrap();

    let ftl = match language {
        Language::English => include_str!("../lang/en-US.ftl"),
        Language::Hindi => include_str!("../lang/hi-IN.ftl"),
    }
    .to_owned();

    let res = FluentResource::try_new(ftl).expect("Failed to parse Fluent file content.");
    bundle.locales = vec![language.id()];

    bundle.add_resource_overriding(res);
}

static RE_EXTRA_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^\r\n ]) {2,}").unwrap());
static RE_EXTRA_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^\r\n ])[\r\n]([^\r\n ])").unwrap());
static RE_EXTRA_PARAGRAPHS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([^\r\n ])[\r\n]{2,}([^\r\n ])").unwrap());

fn translate(id: &str) -> String {
    translate_args(id, &FluentArgs::new())
}

fn translate_args(id: &str, args: &FluentArgs) -> String {
    let bundle = match BUNDLE.lock() {
        Ok(x) => x,
        Err(_) => return "fluent-cannot-lock".to_string(),
    };

    let message = match bundle.get_message(id) {
        Some(x) => x,
        None => return format!("fluent-no-message={id}"),
    };

    let pattern = match message.value() {
        Some(x) => x,
        None => return format!("fluent-no-message-value={id}"),
    };
    let mut errors = vec![];
    let value = bundle.format_pattern(pattern, Some(args), &mut errors);

    RE_EXTRA_PARAGRAPHS
        .replace_all(
            &RE_EXTRA_LINES.replace_all(&RE_EXTRA_SPACES.replace_all(&value, "${1} "), "${1} ${2}"),
            "${1}\n\n${2}",
        )
        .to_string()
}

pub fn set(language: Language) {
    set_language(Language::English);
    if language != Language::English {
        set_language(language);
    }
}

pub fn app_name() -> String {
    translate("app-name")
}

pub fn window_title() -> String {
    let name = app_name();
    format!("{} v{}", name, *crate::prelude::VERSION)
}

pub fn field(text: &str) -> String {
    format!("{text}:")
}

pub fn theme_name(theme: &Theme) -> String {
    match theme {
        Theme::Light => state::light(),
        Theme::Dark => state::dark(),
    }
}

pub fn handle_error(error: &Error) -> String {
    let error = match error {
        Error::ConfigInvalid { why } => format!("{}\n\n{why}", tell::config_is_invalid()),
        Error::MediaUnavailable { why } => format!("{}\n\n{why}", tell::media_unavailable()),
    };

    format!("{} {}", field(&thing::error()), error)
}

pub mod thing {
    use super::*;

    pub fn error() -> String {
        translate("thing-error")
    }

    pub fn language() -> String {
        translate("thing-language")
    }

    pub fn settings() -> String {
        translate("thing-settings")
    }

    pub fn theme() -> String {
        translate("thing-theme")
    }
}

pub mod action {
    use super::*;

    pub fn close() -> String {
        translate("action-close")
    }

    pub fn close_sidebar() -> String {
        translate("action-close-sidebar")
    }

    pub fn mute() -> String {
        translate("action-mute")
    }

    pub fn open_sidebar() -> String {
        translate("action-open-sidebar")
    }

    pub fn pause() -> String {
        translate("action-pause")
    }

    pub fn play() -> String {
        translate("action-play")
    }

    pub fn unmute() -> String {
        translate("action-unmute")
    }
}

pub mod state {
    use super::*;

    pub fn dark() -> String {
        translate("state-dark")
    }

    pub fn light() -> String {
        translate("state-light")
    }
}

pub mod tell {
    use super::*;

    pub fn config_is_invalid() -> String {
        translate("tell-config-is-invalid")
    }

    pub fn media_unavailable() -> String {
        translate("tell-media-unavailable")
    }

    pub fn unable_to_play_video() -> String {
        translate("tell-unable-to-play-video")
    }

    pub fn unsupported_media() -> String {
        translate("tell-unsupported-media")
    }
}

pub mod page {
    use super::*;

    pub fn title() -> String {
        translate("page-title")
    }

    pub fn intro() -> String {
        translate("page-intro")
    }

    pub fn mission() -> String {
        translate("page-mission")
    }

    pub fn video_coverage() -> String {
        translate("page-video-coverage")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn joins_wrapped_lines_into_one_paragraph() {
        set(Language::English);
        let intro = page::intro();

        assert!(!intro.contains('\n'));
        assert!(intro.starts_with("On 21 September 2024, under a program"));
    }

    #[test]
    fn every_language_defines_every_message() {
        let ids = |ftl: &str| {
            let mut ids: Vec<String> = ftl
                .lines()
                .filter(|line| line.starts_with(|c: char| c.is_ascii_alphabetic()))
                .filter_map(|line| line.split_once(" =").map(|(id, _)| id.to_string()))
                .collect();
            ids.sort();
            ids
        };

        assert_eq!(
            ids(include_str!("../lang/en-US.ftl")),
            ids(include_str!("../lang/hi-IN.ftl"))
        );
    }
}
