//! Non-interactive subcommands.

use std::io::{self, Write};
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use serde_json::Value;

use mentions::config::Config;
use mentions::input::InputReader;
use mentions::mention::{MentionConfig, accept_with_config, filter, scan};
use mentions::template::evaluate;

/// Load the suggestion tree, refusing to read stdin twice.
pub fn load_tree(data: Option<&Path>, stdin_taken: bool) -> Result<Value> {
    if data.is_none() && stdin_taken {
        bail!("--data is required when the template is read from stdin");
    }
    Ok(InputReader::read_json(data)?)
}

pub struct RenderArgs<'a> {
    pub template: &'a str,
    pub default_value: Option<String>,
    pub strict: bool,
    pub keep_unresolved: bool,
}

/// `mentions render`: print the template with placeholders substituted.
pub fn render(args: RenderArgs<'_>, data: Option<&Path>, config: &Config) -> Result<()> {
    let from_stdin = args.template == "-";
    let tree = load_tree(data, from_stdin)?;
    let template = if from_stdin {
        InputReader::read_text(None)?
    } else {
        args.template.to_string()
    };

    let mut options = config.evaluation_options();
    if let Some(default_value) = args.default_value {
        options = options.with_default_value(default_value);
    }
    if args.strict {
        options = options.with_throw_on_error(true);
    }
    if args.keep_unresolved {
        options = options.with_keep_unresolved(true);
    }

    let rendered = evaluate(&template, &tree, &options)?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", rendered)?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

pub struct CompleteArgs<'a> {
    pub text: &'a str,
    pub caret: Option<usize>,
    pub accept: Option<&'a str>,
}

/// `mentions complete`: list candidates at the caret, or splice one in.
pub fn complete(args: CompleteArgs<'_>, data: Option<&Path>, config: &MentionConfig) -> Result<()> {
    let tree = load_tree(data, false)?;
    let caret = args.caret.unwrap_or(args.text.len());
    if caret > args.text.len() {
        return Err(eyre!(
            "caret {} is past the end of the text ({} bytes)",
            caret,
            args.text.len()
        ));
    }

    let mut stdout = io::stdout().lock();
    let Some(span) = scan(args.text, caret, config.trigger(), config.closing_trigger()) else {
        log::debug!("No active trigger at {}", caret);
        if args.accept.is_some() {
            bail!("no active trigger at offset {}", caret);
        }
        return Ok(());
    };

    let result = filter(&span.raw_content, &tree, config.case_sensitive());

    match args.accept {
        Some(candidate) => {
            let edit = accept_with_config(args.text, &span, &result.parent_path, candidate, config);
            writeln!(stdout, "{}", edit.text)?;
            eprintln!("caret: {}", edit.caret_offset);
        }
        None => {
            for candidate in &result.candidates {
                writeln!(stdout, "{}", candidate)?;
            }
        }
    }
    Ok(())
}
