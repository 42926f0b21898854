//! Errors that can occur while evaluating an expression.

use ariadne::Fmt;
use symcas_attrs::ErrorKind;
use symcas_error::{ErrorKind, EXPR};

/// The variable has no value in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = format!("to define it, bind a value to it, such as: {}", format!("{} = 1", name).fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The variable that was undefined.
    pub name: char,
}
