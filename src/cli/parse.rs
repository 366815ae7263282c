use std::path::PathBuf;

use clap::ValueEnum;

fn styles() -> clap::builder::styling::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};

    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(clap::Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum CompletionShell {
    #[clap(about = "Completions for Bash")]
    Bash,
    #[clap(about = "Completions for Fish")]
    Fish,
    #[clap(about = "Completions for Zsh")]
    Zsh,
    #[clap(name = "powershell", about = "Completions for PowerShell")]
    PowerShell,
    #[clap(about = "Completions for Elvish")]
    Elvish,
}

/// Serialization format
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SerializationFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(clap::Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Subcommand {
    /// Generate shell completion scripts
    Complete {
        #[clap(subcommand)]
        shell: CompletionShell,
    },
    /// Display schemas that the application uses
    Schema {
        #[clap(long, value_enum, value_name = "FORMAT")]
        format: Option<SerializationFormat>,

        #[clap(subcommand)]
        kind: SchemaSubcommand,
    },
}

#[derive(clap::Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum SchemaSubcommand {
    #[clap(about = "Schema for config.yaml")]
    Config,
}

/// Show the event page and its video coverage
#[derive(clap::Parser, Clone, Debug, PartialEq, Eq)]
#[clap(name = "punah", version, max_term_width = 100, next_line_help = true, styles = styles())]
pub struct Cli {
    /// Use configuration found in DIRECTORY
    #[clap(long, value_name = "DIRECTORY")]
    pub config: Option<PathBuf>,

    /// Video files or URLs to show instead of the configured videos.
    /// Alternatively supports stdin (one value per line).
    pub sources: Vec<String>,

    /// MIME type of the given videos.
    /// By default, it is guessed from each file extension.
    #[clap(long, value_name = "MIME")]
    pub mime: Option<String>,

    #[clap(subcommand)]
    pub sub: Option<Subcommand>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn check_args(args: &[&str], expected: Cli) {
        assert_eq!(expected, Cli::parse_from(args));
    }

    #[test]
    fn accepts_cli_without_arguments() {
        check_args(
            &["punah"],
            Cli {
                config: None,
                sources: vec![],
                mime: None,
                sub: None,
            },
        );
    }

    #[test]
    fn accepts_cli_with_sources_and_mime() {
        check_args(
            &["punah", "--config", "tmp", "--mime", "video/webm", "a.bin", "https://example.com/b"],
            Cli {
                config: Some(PathBuf::from("tmp")),
                sources: vec!["a.bin".to_string(), "https://example.com/b".to_string()],
                mime: Some("video/webm".to_string()),
                sub: None,
            },
        );
    }

    #[test]
    fn accepts_cli_schema_with_format() {
        check_args(
            &["punah", "schema", "--format", "yaml", "config"],
            Cli {
                config: None,
                sources: vec![],
                mime: None,
                sub: Some(Subcommand::Schema {
                    format: Some(SerializationFormat::Yaml),
                    kind: SchemaSubcommand::Config,
                }),
            },
        );
    }
}
