use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

/// When set, commands are read from stdin without prompts or colors.
pub const SCRIPT_ENV: &str = "SWITCHBOARD_BOM_CLI_SCRIPT";

/// Second-word completions for commands that take a fixed action.
const ACTIONS: &[(&str, &[&str])] = &[
    ("set", &["amps", "voltage", "kaic", "perf", "lsi", "main"]),
    ("board", &["reset"]),
    ("project", &["remove", "reset"]),
    ("catalog", &["breakers", "straps", "interiors"]),
    ("config", &["show", "save", "set"]),
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = match std::env::var_os(SCRIPT_ENV) {
        Some(_) => CliMode::Script,
        None => CliMode::Interactive,
    };
    let mut context = ShellContext::new(mode)?;
    tracing::debug!(?mode, "shell started");
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(ShellHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
    output::info("Type `help` to list commands.");

    while context.running {
        let line = match editor.readline(&context.prompt()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        editor.add_history_entry(line).ok();
        if run_line(context, line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Runs one command per line. Blank lines and `#` comments are skipped.
fn run_script(context: &mut ShellContext, input: impl BufRead) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if run_line(context, line)? == LoopControl::Exit || !context.running {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match context.process_line(line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_ascii_lowercase).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates<'a>(
        &'a self,
        words: &[&str],
        needle: &'a str,
    ) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match words {
            [] => Box::new(
                self.commands
                    .iter()
                    .map(String::as_str)
                    .filter(move |name| name.starts_with(needle)),
            ),
            [command] => {
                let command = command.to_ascii_lowercase();
                let actions = ACTIONS
                    .iter()
                    .find(|(name, _)| *name == command)
                    .map_or(&[][..], |(_, actions)| *actions);
                Box::new(actions.iter().copied().filter(move |action| action.starts_with(needle)))
            }
            _ => Box::new(std::iter::empty()),
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map_or(0, |idx| idx + 1);
        let needle = prefix[start..].to_ascii_lowercase();
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let pairs = self
            .candidates(&words, &needle)
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for ShellHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

/// Splits a line with shell quoting rules, so `commit "MSB 1"` keeps the space.
pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    shell_words::split(input).map_err(|err| ParseError(err.to_string()))
}

#[derive(Debug)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not parse input: {}", self.0)
    }
}
