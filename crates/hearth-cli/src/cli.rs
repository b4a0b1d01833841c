//! Argument parsing and command dispatch for the `hearth` binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hearth_config::HearthSettings;
use hearth_menu::{HomepageSection, SiteKind};
use hearth_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, build_sha, init_logging};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::{render_menu, render_sections};
use crate::preview::{PreviewRequest, preview};

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn execute(cli: Cli) -> CliResult<()> {
    let settings = hearth_config::load(cli.config.as_deref())
        .map_err(|err| CliError::validation(describe(&err)))?;
    install_logging(&settings)?;
    let _context = GlobalContextGuard::new(command_label(&cli.command));
    debug!(config = ?cli.config, "dispatching command");

    match cli.command {
        Command::Menu(args) => {
            let view = preview(&args.request(), &settings)?;
            render_menu(&view, cli.output)
        }
        Command::Sections => render_sections(cli.output),
    }
}

fn describe(err: &hearth_config::ConfigError) -> String {
    match err {
        hearth_config::ConfigError::InvalidField {
            section,
            field,
            value,
            reason,
        } => match value {
            Some(value) => format!("{section}.{field} = '{value}' {reason}"),
            None => format!("{section}.{field} {reason}"),
        },
        hearth_config::ConfigError::Parse { source } => source.to_string(),
        hearth_config::ConfigError::Io { path, source } => {
            format!("{}: {source}", path.display())
        }
    }
}

fn install_logging(settings: &HearthSettings) -> CliResult<()> {
    let format = LogFormat::from_str(&settings.logging.format.to_ascii_lowercase())
        .map_err(|err| CliError::validation(err.to_string()))?;
    let level = settings.logging.level.to_ascii_lowercase();
    init_logging(&LoggingConfig {
        level: &level,
        format,
        build_sha: build_sha(),
    })
    .map_err(CliError::failure)
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Menu(_) => "menu",
        Command::Sections => "sections",
    }
}

#[derive(Parser)]
#[command(name = "hearth", about = "Preview homepage context menus")]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "HEARTH_CONFIG",
        help = "Path to a JSON settings file"
    )]
    config: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the context menu for one item and optionally tap rows.
    Menu(MenuArgs),
    /// List homepage sections and whether they offer a context menu.
    Sections,
}

#[derive(Args)]
struct MenuArgs {
    #[arg(long, help = "URL of the long-pressed item")]
    url: String,
    #[arg(long, default_value = "", help = "Display title")]
    title: String,
    #[arg(long, default_value = "top-sites", help = "Homepage section")]
    section: HomepageSection,
    #[arg(long, value_enum, default_value_t = KindArg::Plain)]
    kind: KindArg,
    #[arg(long, help = "Known bookmark state")]
    bookmarked: Option<bool>,
    #[arg(long = "tap", help = "Row index to tap, in display order")]
    taps: Vec<usize>,
}

impl MenuArgs {
    fn request(self) -> PreviewRequest {
        PreviewRequest {
            url: self.url,
            title: self.title,
            kind: self.kind.into(),
            bookmarked: self.bookmarked,
            section: self.section,
            taps: self.taps,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Pinned,
    Sponsored,
    Plain,
}

impl From<KindArg> for SiteKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Pinned => Self::Pinned,
            KindArg::Sponsored => Self::Sponsored,
            KindArg::Plain => Self::Plain,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("hearth").chain(args.iter().copied()))
    }

    #[test]
    fn menu_arguments_parse_with_defaults() -> Result<(), clap::Error> {
        let cli = parse(&["menu", "--url", "https://www.mozilla.org/"])?;
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(cli.config.is_none());
        let Command::Menu(args) = cli.command else {
            panic!("expected menu command");
        };
        let request = args.request();
        assert_eq!(request.section, HomepageSection::TopSites);
        assert_eq!(request.kind, SiteKind::Plain);
        assert!(request.bookmarked.is_none());
        assert!(request.taps.is_empty());
        Ok(())
    }

    #[test]
    fn menu_arguments_accept_every_flag() -> Result<(), clap::Error> {
        let cli = parse(&[
            "--output",
            "json",
            "--config",
            "/tmp/hearth.json",
            "menu",
            "--url",
            "https://getpocket.com/story",
            "--title",
            "Story",
            "--section",
            "pocket",
            "--kind",
            "sponsored",
            "--bookmarked",
            "true",
            "--tap",
            "0",
            "--tap",
            "2",
        ])?;
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/hearth.json")));
        let Command::Menu(args) = cli.command else {
            panic!("expected menu command");
        };
        let request = args.request();
        assert_eq!(request.title, "Story");
        assert_eq!(request.section, HomepageSection::Pocket);
        assert_eq!(request.kind, SiteKind::Sponsored);
        assert_eq!(request.bookmarked, Some(true));
        assert_eq!(request.taps, vec![0, 2]);
        Ok(())
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(parse(&["menu", "--url", "https://a.example/", "--section", "footer"]).is_err());
    }

    #[test]
    fn sections_command_has_a_label() -> Result<(), clap::Error> {
        let cli = parse(&["sections"])?;
        assert_eq!(command_label(&cli.command), "sections");
        Ok(())
    }

    #[test]
    fn config_errors_describe_the_field() {
        let err = hearth_config::ConfigError::InvalidField {
            section: "root".to_string(),
            field: "locale".to_string(),
            value: Some("xx".to_string()),
            reason: "unsupported locale",
        };
        assert_eq!(describe(&err), "root.locale = 'xx' unsupported locale");
    }
}
