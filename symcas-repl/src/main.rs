mod command;
mod error;

use command::{Action, Command};
use error::Error;
use log::{debug, LevelFilter};
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::{env, fs::File, io::{self, BufReader, IsTerminal, Read}};
use symcas_compute::{numerical::ctxt::Ctxt, Equation, RenderMode};

/// Installs the terminal logger, reading the level from `SYMCAS_LOG`.
fn init_logger() {
    let level = env::var("SYMCAS_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);
    if let Err(err) = CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ]) {
        eprintln!("could not install logger: {}", err);
    }
}

/// Runs one line of input, returning the text to print.
fn run(line: &str) -> Result<String, Error> {
    let command = Command::parse(line).map_err(Error::Command)?;
    debug!("running {:?}", command);

    let equation = Equation::parse(command.expr)
        .map_err(|err| Error::Parse(command.shift(err)))?;
    Ok(match command.action {
        Action::Show(mode) => equation.simplified().render(mode),
        Action::Diff(var) => equation.derivative(var)?.render(RenderMode::Annotated),
        Action::Eval(bindings) => {
            let ctxt = bindings.into_iter().collect::<Ctxt>();
            equation.evaluate(&ctxt).map_err(Error::Eval)?.to_string()
        },
        Action::Vars => equation.simplified()
            .free_variables()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Runs the line, printing the result or the error.
fn run_and_print(line: &str) {
    match run(line) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr(line) {
                eprintln!("could not print error: {}", io_err);
            }
        },
    }
}

/// Runs every non-empty line of the input.
fn run_all(input: &str) {
    input.lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(run_and_print);
}

/// Reads the whole input from the file, or from stdin if no file is given.
fn read_input(filename: Option<String>) -> io::Result<String> {
    let mut input = String::new();
    match filename {
        Some(filename) => {
            BufReader::new(File::open(filename)?).read_to_string(&mut input)?;
        },
        None => {
            io::stdin().read_to_string(&mut input)?;
        },
    }
    Ok(input)
}

/// Runs the interactive REPL, with history kept in the file named by `SYMCAS_HISTORY`, if set.
fn repl() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let history = env::var("SYMCAS_HISTORY").ok();
    if let Some(path) = &history {
        // a missing history file is not an error
        if let Err(err) = rl.load_history(path) {
            debug!("could not load history from {}: {}", path, err);
        }
    }

    fn process_line(rl: &mut DefaultEditor) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run_and_print(&input);
        Ok(())
    }

    let result = loop {
        match process_line(&mut rl) {
            Ok(()) => (),
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break Ok(()),
            Err(err) => break Err(err),
        }
    };

    if let Some(path) = &history {
        rl.save_history(path)?;
    }
    result
}

fn main() {
    init_logger();

    let mut args = env::args();
    args.next();

    let filename = args.next();
    if filename.is_some() || !io::stdin().is_terminal() {
        // run source file or piped input
        match read_input(filename) {
            Ok(input) => run_all(&input),
            Err(err) => eprintln!("could not read input: {}", err),
        }
    } else if let Err(err) = repl() {
        eprintln!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symcas_compute::symbolic::DerivativeError;
    use super::*;

    #[test]
    fn simplify_and_render() {
        assert_eq!(run(":plain x + x").unwrap(), "((2)*(x))");
        assert_eq!(run("x - x").unwrap(), "0");
    }

    #[test]
    fn eval() {
        assert_eq!(run(":eval x^2 + y where x=3, y=1").unwrap(), "10");
    }

    #[test]
    fn vars() {
        assert_eq!(run(":vars z*y + x").unwrap(), "x, y, z");
        assert_eq!(run(":vars x - x + 2").unwrap(), "");
    }

    #[test]
    fn diff() {
        assert_eq!(run(":diff x 3*x + 5").unwrap(), "3");
        assert!(matches!(
            run(":diff x min(x, 1)"),
            Err(Error::Derivative(DerivativeError::Undifferentiable { function: "min" })),
        ));
    }

    #[test]
    fn errors_point_into_the_line() {
        let Err(Error::Parse(err)) = run(":plain x + ") else {
            panic!("expected a parse error");
        };
        assert!(err.spans.iter().all(|span| span.start >= 7));

        assert!(matches!(run(":eval x + y where x=1"), Err(Error::Eval(_))));
        assert!(matches!(run(":nope x"), Err(Error::Command(_))));
    }
}
