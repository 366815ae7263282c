mod parse;

use clap::CommandFactory;

use crate::{
    cli::parse::{Cli, CompletionShell, Subcommand},
    media,
    prelude::{resolve_relative, Error},
    resource::config::Config,
};

/// Turn a command line value into a locator that does not depend on the working directory.
fn locate(raw: &str) -> String {
    let raw = raw.trim();
    if url::Url::parse(raw).is_ok_and(|url| url.scheme().len() > 1) {
        return raw.to_string();
    }

    match std::env::current_dir() {
        Ok(cwd) => resolve_relative(raw, &cwd).to_string_lossy().to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn parse_sources(sources: Vec<String>, mime: Option<String>) -> Vec<media::Source> {
    let raw: Vec<String> = if !sources.is_empty() {
        sources
    } else {
        use std::io::IsTerminal;

        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            vec![]
        } else {
            let lines: Vec<_> = stdin.lines().map_while(Result::ok).collect();
            log::debug!("Sources from stdin: {:?}", &lines);
            lines
        }
    };

    raw.iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| media::Source::new(locate(raw)).with_mime(mime.clone()))
        .collect()
}

pub fn parse() -> Cli {
    use clap::Parser;
    Cli::parse()
}

pub fn run(sub: Subcommand) -> Result<(), Error> {
    log::debug!("Invocation: {sub:?}");

    match sub {
        Subcommand::Complete { shell } => {
            let clap_shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Fish => clap_complete::Shell::Fish,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::PowerShell => clap_complete::Shell::PowerShell,
                CompletionShell::Elvish => clap_complete::Shell::Elvish,
            };
            clap_complete::generate(
                clap_shell,
                &mut Cli::command(),
                env!("CARGO_PKG_NAME"),
                &mut std::io::stdout(),
            )
        }
        Subcommand::Schema { format, kind } => {
            let format = format.unwrap_or_default();
            let schema = match kind {
                parse::SchemaSubcommand::Config => schemars::schema_for!(Config),
            };

            let serialized = match format {
                parse::SerializationFormat::Json => {
                    serde_json::to_string_pretty(&schema).map_err(|e| Error::ConfigInvalid { why: e.to_string() })?
                }
                parse::SerializationFormat::Yaml => {
                    serde_yaml::to_string(&schema).map_err(|e| Error::ConfigInvalid { why: e.to_string() })?
                }
            };
            println!("{serialized}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_urls_when_locating() {
        assert_eq!("https://example.com/septvideo.mp4", locate(" https://example.com/septvideo.mp4 "));
    }

    #[test]
    fn anchors_relative_paths_to_working_directory() {
        let located = locate("septvideo.mp4");

        assert!(std::path::Path::new(&located).is_absolute());
        assert!(located.ends_with("septvideo.mp4"));
    }

    #[test]
    fn applies_mime_hint_to_every_source() {
        let sources = parse_sources(
            vec!["a.bin".to_string(), " ".to_string(), "b.bin".to_string()],
            Some("video/mp4".to_string()),
        );

        assert_eq!(2, sources.len());
        assert!(sources.iter().all(|source| source.is_video()));
    }
}
