//! Parsing of the lines entered into the REPL.
//!
//! A line is either an expression, which is simplified and printed, or a command starting with
//! `:` followed by an expression:
//!
//! - `:diff <var> <expr>` prints the simplified derivative of the expression.
//! - `:eval <expr> where x=1, y=2` evaluates the expression.
//! - `:latex <expr>` and `:plain <expr>` print the simplified expression in that format.
//! - `:vars <expr>` prints the free variables of the expression.

use ariadne::Fmt;
use std::ops::Range;
use symcas_attrs::ErrorKind;
use symcas_compute::RenderMode;
use symcas_error::{Error, ErrorKind, EXPR};

/// The names of the available commands.
const COMMANDS: &str = ":diff, :eval, :latex, :plain, :vars";

/// The command name is not known.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", name),
    labels = ["this command"],
    help = format!("available commands: {}", COMMANDS),
)]
pub struct UnknownCommand {
    /// The name that was given.
    pub name: String,
}

/// The command was given without an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("add an {} after this", "expression".fg(EXPR))],
    help = format!("usage: {}", usage.fg(EXPR)),
)]
pub struct MissingExpression {
    /// How the command is written.
    pub usage: &'static str,
}

/// The variable to differentiate with respect to is not a single letter.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a variable", found),
    labels = ["expected a single letter here"],
    help = format!("usage: {}", ":diff <var> <expr>".fg(EXPR)),
)]
pub struct InvalidVariable {
    /// What was given instead.
    pub found: String,
}

/// A variable binding after `where` could not be understood.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid binding",
    labels = ["this binding"],
    help = format!("bind variables to numbers, separated by commas: {}", "where x=1, y=2".fg(EXPR)),
)]
pub struct InvalidBinding;

/// What to do with the expression of a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Print the simplified expression.
    Show(RenderMode),

    /// Print the simplified derivative with respect to the variable.
    Diff(char),

    /// Evaluate the expression with the given variable values.
    Eval(Vec<(char, f64)>),

    /// Print the free variables.
    Vars,
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Command<'a> {
    /// What to do with the expression.
    pub action: Action,

    /// The expression, as written.
    pub expr: &'a str,

    /// Where the expression starts in the line.
    pub offset: usize,
}

/// A word of the line, along with where it starts.
fn next_word(line: &str, from: usize) -> Option<(&str, Range<usize>)> {
    let rest = &line[from..];
    let start = from + (rest.len() - rest.trim_start().len());
    let word = line[start..].split_whitespace().next()?;
    Some((word, start..start + word.len()))
}

/// Returns the expression that starts at or after `from`, with its offset in the line.
fn expression_from<'a>(
    line: &'a str,
    from: usize,
    usage: &'static str,
    name_span: Range<usize>,
) -> Result<(&'a str, usize), Error> {
    let rest = &line[from..];
    let expr = rest.trim();
    if expr.is_empty() {
        return Err(Error::new(vec![name_span], MissingExpression { usage }));
    }
    let offset = from + (rest.len() - rest.trim_start().len());
    Ok((expr, offset))
}

/// Parses `x=1, y=2`, which starts at `offset` in the line.
fn parse_bindings(bindings: &str, offset: usize) -> Result<Vec<(char, f64)>, Error> {
    let mut out = Vec::new();
    let mut start = offset;
    for binding in bindings.split(',') {
        let span = start..start + binding.len();
        start = span.end + 1;

        let invalid = || Error::new(vec![span.clone()], InvalidBinding);
        let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
        let mut chars = name.trim().chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) if symbol.is_alphabetic() => symbol,
            _ => return Err(invalid()),
        };
        let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
        out.push((symbol, value));
    }
    Ok(out)
}

impl<'a> Command<'a> {
    /// Parses a line of input.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let Some((first, first_span)) = next_word(line, 0) else {
            return Err(Error::new(vec![0..line.len()], MissingExpression { usage: "<expr>" }));
        };

        let Some(name) = first.strip_prefix(':') else {
            let (expr, offset) = expression_from(line, 0, "<expr>", first_span)?;
            return Ok(Self { action: Action::Show(RenderMode::Annotated), expr, offset });
        };

        let after_name = first_span.end;
        match name {
            "latex" | "plain" | "vars" => {
                let usage = match name {
                    "latex" => ":latex <expr>",
                    "plain" => ":plain <expr>",
                    _ => ":vars <expr>",
                };
                let (expr, offset) = expression_from(line, after_name, usage, first_span)?;
                let action = match name {
                    "latex" => Action::Show(RenderMode::Latex),
                    "plain" => Action::Show(RenderMode::Plain),
                    _ => Action::Vars,
                };
                Ok(Self { action, expr, offset })
            },
            "diff" => {
                let usage = ":diff <var> <expr>";
                let Some((var, var_span)) = next_word(line, after_name) else {
                    return Err(Error::new(vec![first_span], MissingExpression { usage }));
                };
                let mut chars = var.chars();
                let symbol = match (chars.next(), chars.next()) {
                    (Some(symbol), None) if symbol.is_alphabetic() => symbol,
                    _ => return Err(Error::new(vec![var_span], InvalidVariable {
                        found: var.to_string(),
                    })),
                };
                let (expr, offset) = expression_from(line, var_span.end, usage, var_span)?;
                Ok(Self { action: Action::Diff(symbol), expr, offset })
            },
            "eval" => {
                let usage = ":eval <expr> where x=1, y=2";
                let (rest, offset) = expression_from(line, after_name, usage, first_span.clone())?;
                let (expr, bindings) = match rest.find("where") {
                    Some(index) => {
                        let bindings_offset = offset + index + "where".len();
                        let bindings = parse_bindings(&rest[index + "where".len()..], bindings_offset)?;
                        (rest[..index].trim_end(), bindings)
                    },
                    None => (rest, Vec::new()),
                };
                if expr.is_empty() {
                    return Err(Error::new(vec![first_span], MissingExpression { usage }));
                }
                Ok(Self { action: Action::Eval(bindings), expr, offset })
            },
            _ => Err(Error::new(vec![first_span], UnknownCommand { name: name.to_string() })),
        }
    }

    /// Moves the spans of an error in the expression so that they point into the whole line.
    pub fn shift(&self, mut err: Error) -> Error {
        for span in &mut err.spans {
            *span = span.start + self.offset..span.end + self.offset;
        }
        err
    }
}
