//! Line-oriented console actions.
//!
//! Each builder returns an [`IO`] that performs nothing until it is run.
//! Running it performs the read or write again every time. Stream failures
//! are returned as [`EffectError`] from `run`.
//!
//! [`print_line`] and [`read_line`] use the process's standard streams.
//! [`write_line_to`] and [`read_line_from`] do the same over any shared
//! writer or reader, which is how the standard-stream variants are tested.
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::effect::console;
//! use std::cell::RefCell;
//! use std::io::Cursor;
//! use std::rc::Rc;
//!
//! let input = Rc::new(RefCell::new(Cursor::new("Ada\n")));
//! let output = Rc::new(RefCell::new(Vec::new()));
//!
//! let greet = console::read_line_from(Rc::clone(&input), Rc::clone(&output), "Name: ")
//!     .bind({
//!         let output = Rc::clone(&output);
//!         move |name| {
//!             let line = format!("Hello, {}!", name.unwrap_or_default());
//!             console::write_line_to(Rc::clone(&output), line)
//!         }
//!     });
//!
//! assert!(output.borrow().is_empty());
//! greet.run().unwrap();
//! assert_eq!(String::from_utf8(output.borrow().clone()).unwrap(), "Name: Hello, Ada!\n");
//! ```

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use super::{EffectError, IO};

/// Creates an action that writes `message` and a newline to standard output.
///
/// # Examples
///
/// ```rust,no_run
/// use fp_primer::effect::console;
///
/// let io = console::print_line("Hello, World!");
/// io.run().expect("stdout is writable"); // Prints "Hello, World!"
/// ```
pub fn print_line<S>(message: S) -> IO<Result<(), EffectError>>
where
    S: Display + 'static,
{
    write_line_to(Rc::new(RefCell::new(io::stdout())), message)
}

/// Creates an action that writes `prompt` to standard output, then reads
/// one line from standard input.
///
/// The line terminator is stripped. At end of input the line is empty.
///
/// # Examples
///
/// ```rust,no_run
/// use fp_primer::effect::console;
///
/// let io = console::read_line("Your name: ");
/// let name = io.run().expect("stdin is readable");
/// println!("You entered: {name}");
/// ```
pub fn read_line<S>(prompt: S) -> IO<Result<String, EffectError>>
where
    S: Display + 'static,
{
    IO::new(move || {
        let mut stdout = io::stdout();
        prompt_and_read(&mut stdout, &prompt, |buffer| {
            io::stdin().lock().read_until(b'\n', buffer)
        })
    })
}

/// Creates an action that writes `message` and a newline to `sink`, then
/// flushes it.
pub fn write_line_to<W, S>(sink: Rc<RefCell<W>>, message: S) -> IO<Result<(), EffectError>>
where
    W: Write + 'static,
    S: Display + 'static,
{
    IO::new(move || -> Result<(), EffectError> {
        let mut sink = sink.borrow_mut();
        let line = format!("{message}\n");
        let written = sink.write_all(line.as_bytes()).and_then(|()| sink.flush());
        written.inspect_err(|error| tracing::debug!(%error, "console write failed"))?;
        tracing::trace!(bytes = line.len(), "wrote line");
        Ok(())
    })
}

/// Creates an action that writes `prompt` to `sink`, then reads one line
/// from `source`.
///
/// The line terminator (`\n` or `\r\n`) is stripped. At end of input the
/// line is empty. Bytes that are not valid UTF-8 are replaced with
/// `U+FFFD` rather than failing the read.
pub fn read_line_from<R, W, S>(
    source: Rc<RefCell<R>>,
    sink: Rc<RefCell<W>>,
    prompt: S,
) -> IO<Result<String, EffectError>>
where
    R: BufRead + 'static,
    W: Write + 'static,
    S: Display + 'static,
{
    IO::new(move || {
        let mut sink = sink.borrow_mut();
        prompt_and_read(&mut *sink, &prompt, |buffer| {
            source.borrow_mut().read_until(b'\n', buffer)
        })
    })
}

fn prompt_and_read<W, S, F>(sink: &mut W, prompt: &S, read: F) -> Result<String, EffectError>
where
    W: Write + ?Sized,
    S: Display + ?Sized,
    F: FnOnce(&mut Vec<u8>) -> io::Result<usize>,
{
    write!(sink, "{prompt}")
        .and_then(|()| sink.flush())
        .inspect_err(|error| tracing::debug!(%error, "console prompt failed"))?;

    let mut line = Vec::new();
    let bytes = read(&mut line)
        .inspect_err(|error| tracing::debug!(%error, "console read failed"))?;
    tracing::trace!(bytes, "read line");

    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}
