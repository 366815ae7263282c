use std::{
    path::{Path, PathBuf},
    sync::{LazyLock, Mutex},
};

pub static VERSION: LazyLock<&'static str> =
    LazyLock::new(|| option_env!("PUNAH_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")));

pub type AnyError = Box<dyn std::error::Error>;

pub const APP_DIR_NAME: &str = "com.punah.event-page";
#[allow(unused)]
pub const LINUX_APP_ID: &str = "com.punah.event-page";
const PORTABLE_FLAG_FILE_NAME: &str = "punah.portable";

pub static CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    ConfigInvalid { why: String },
    MediaUnavailable { why: String },
}

pub fn app_dir() -> PathBuf {
    if let Some(dir) = CONFIG_DIR.lock().unwrap().as_ref() {
        return dir.clone();
    }

    if let Ok(mut flag) = std::env::current_exe() {
        flag.pop();
        flag.push(PORTABLE_FLAG_FILE_NAME);
        if flag.exists() {
            flag.pop();
            return flag;
        }
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Resolve `raw` against `base` unless it is already absolute.
pub fn resolve_relative(raw: &str, base: &Path) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

pub fn timestamp_mmss(seconds: u64) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;

    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, "00:00")]
    #[test_case(9, "00:09")]
    #[test_case(42, "00:42")]
    #[test_case(60, "01:00")]
    #[test_case(125, "02:05")]
    #[test_case(60 * 60 + 1, "60:01")]
    pub fn can_format_timestamp_mmss(seconds: u64, formatted: &str) {
        assert_eq!(formatted, timestamp_mmss(seconds));
    }

    #[test]
    fn keeps_absolute_paths_when_resolving() {
        let absolute = std::env::temp_dir().join("clip.mp4");
        assert_eq!(
            absolute.clone(),
            resolve_relative(absolute.to_str().unwrap(), Path::new("base"))
        );
    }

    #[test]
    fn joins_relative_paths_onto_base() {
        assert_eq!(
            Path::new("base").join("clip.mp4"),
            resolve_relative("clip.mp4", Path::new("base"))
        );
    }
}
