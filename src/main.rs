use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;

use mentions::config::{self, Config};
use mentions::input::InputReader;
use mentions::mention::MentionConfig;

mod app;
mod commands;
mod logging;
mod widgets;

use app::App;

/// Mention autocomplete and {{path}} templates over a JSON tree
#[derive(Parser, Debug)]
#[command(name = "mentions", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON file holding the suggestion tree (reads stdin when omitted)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Config file (defaults to ~/.config/mentions/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Trigger marker, e.g. "@" or "{{"
    #[arg(long, global = true)]
    trigger: Option<String>,

    /// Closing marker; pass an empty string to disable
    #[arg(long, global = true)]
    closing: Option<String>,

    /// Match candidates case-sensitively
    #[arg(long, global = true)]
    case_sensitive: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print TEMPLATE with every {{path}} placeholder substituted
    Render {
        /// Template text, or "-" to read it from stdin
        template: String,

        /// Text substituted for unresolved placeholders
        #[arg(long)]
        default_value: Option<String>,

        /// Fail on the first unresolved placeholder
        #[arg(long)]
        strict: bool,

        /// Leave unresolved placeholders as written
        #[arg(long, conflicts_with = "default_value")]
        keep_unresolved: bool,
    },
    /// List completions for the trigger before the caret
    Complete {
        /// Text being edited
        text: String,

        /// Caret byte offset (defaults to the end of TEXT)
        #[arg(long)]
        caret: Option<usize>,

        /// Splice this candidate in and print the edited text
        #[arg(long)]
        accept: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Command::Render {
            template,
            default_value,
            strict,
            keep_unresolved,
        }) => commands::render(
            commands::RenderArgs {
                template,
                default_value: default_value.clone(),
                strict: *strict,
                keep_unresolved: *keep_unresolved,
            },
            cli.data.as_deref(),
            &config,
        ),
        Some(Command::Complete {
            text,
            caret,
            accept,
        }) => commands::complete(
            commands::CompleteArgs {
                text,
                caret: *caret,
                accept: accept.as_deref(),
            },
            cli.data.as_deref(),
            &mention_config(&cli, &config)?,
        ),
        None => {
            let mention_config = mention_config(&cli, &config)?;
            let tree = InputReader::read_json(cli.data.as_deref())?;
            let app = App::new(tree, mention_config, config.evaluation_options());

            // Initialize terminal (handles raw mode, alternate screen, etc.)
            let terminal = ratatui::init();
            let result = run(terminal, app);
            ratatui::restore();
            result
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}

/// Apply command-line overrides on top of the config file.
fn mention_config(cli: &Cli, config: &Config) -> Result<MentionConfig> {
    let mut config = config.clone();
    if let Some(trigger) = &cli.trigger {
        config.trigger.marker = trigger.clone();
        // A trigger from the command line only keeps a closing marker given alongside it
        if cli.closing.is_none() {
            config.trigger.closing = Some(String::new());
        }
    }
    if let Some(closing) = &cli.closing {
        config.trigger.closing = Some(closing.clone());
    }
    if cli.case_sensitive {
        config.trigger.case_sensitive = true;
    }
    Ok(config.mention_config()?)
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
