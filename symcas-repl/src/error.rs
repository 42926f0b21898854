use symcas_compute::symbolic::DerivativeError;
use symcas_error::Error as SymcasError;
use std::io;

/// Utility enum to package errors that can occur while running a line of input.
#[derive(Debug)]
pub enum Error {
    /// The line is not a valid command.
    Command(SymcasError),

    /// Errors that occurred while parsing the expression.
    Parse(SymcasError),

    /// An error that occurred while evaluating.
    Eval(SymcasError),

    /// The expression could not be differentiated.
    Derivative(DerivativeError),
}

impl Error {
    /// Report the error in this [`Error`] to stderr, highlighting the regions of `input` it
    /// points at.
    pub fn report_to_stderr(&self, input: &str) -> io::Result<()> {
        match self {
            Self::Command(err) | Self::Parse(err) | Self::Eval(err) => {
                err.report_to_stderr("input", input)
            },
            Self::Derivative(err) => {
                SymcasError::from(*err).report_to_stderr("input", input)
            },
        }
    }
}

impl From<DerivativeError> for Error {
    fn from(err: DerivativeError) -> Self {
        Self::Derivative(err)
    }
}
