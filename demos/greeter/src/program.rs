//! The greeting program, described as an `IO` action.
//!
//! Reading the name and writing the greeting are passed in as actions, so
//! the same program runs against the real console or in-memory buffers.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use fp_primer::control::Either;
use fp_primer::effect::{EffectError, IO, console};
use fp_primer::typeclass::fold_left;

use crate::config::GreeterConfig;

/// Name used when the user enters nothing.
pub const ANONYMOUS: &str = "stranger";

/// Classifies an input line as a name (`Right`) or a reason why it is
/// not one (`Left`).
pub fn parse_name(line: &str) -> Either<&'static str, String> {
    let name = line.trim();
    if name.is_empty() {
        Either::left("no name given")
    } else {
        Either::right(name.to_string())
    }
}

/// Renders the greeting lines for a parsed name.
pub fn greeting_lines(
    greeting: &str,
    name: Either<&'static str, String>,
    repeat: u32,
) -> Vec<String> {
    let name = name.fold(|_| ANONYMOUS.to_string(), |name| name);
    (0..repeat).map(|_| format!("{greeting}, {name}!")).collect()
}

/// Builds the greeting program from a name-reading action and a
/// line-writing action.
///
/// Nothing is read or written until the returned action is run. The first
/// I/O failure stops the program and is returned.
pub fn greet<W>(
    config: &GreeterConfig,
    read_name: IO<Result<String, EffectError>>,
    write_line: W,
) -> IO<Result<(), EffectError>>
where
    W: Fn(String) -> IO<Result<(), EffectError>> + 'static,
{
    let greeting = config.greeting.clone();
    let repeat = config.repeat;

    IO::new(move || -> Result<(), EffectError> {
        let line = read_name.run()?;
        let name = parse_name(&line);
        tracing::debug!(%name, "parsed input");

        let lines = greeting_lines(&greeting, name, repeat);
        let written = fold_left(
            |written: Result<usize, EffectError>, line: &String| {
                let count = written?;
                write_line(line.clone()).run()?;
                Ok(count + 1)
            },
            Ok(0),
            &lines,
        )?;
        tracing::info!(lines = written, "greeting written");
        Ok(())
    })
}

/// Builds the greeting program over standard input and output.
pub fn greet_console(config: &GreeterConfig) -> IO<Result<(), EffectError>> {
    greet(config, console::read_line(config.prompt.clone()), console::print_line::<String>)
}

/// Builds the greeting program over shared in-memory streams.
pub fn greet_with<R, W>(
    config: &GreeterConfig,
    source: Rc<RefCell<R>>,
    sink: Rc<RefCell<W>>,
) -> IO<Result<(), EffectError>>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let read_name = console::read_line_from(source, Rc::clone(&sink), config.prompt.clone());
    greet(config, read_name, move |line| {
        console::write_line_to(Rc::clone(&sink), line)
    })
}
