//! Integer console primitives used by `System.out` and `System.in`.

use std::io::{self, BufRead, Empty, Sink, StdinLock, StdoutLock, Write};

/// Returned by [`Console::read_int`] once input is exhausted.
pub const END_OF_INPUT: i32 = -1;

/// An input/output stream pair the console primitives operate on.
///
/// Generated programs use [`Console::stdout`] and [`Console::stdin`]; any
/// `BufRead`/`Write` pair works for embedding and tests. The primitives add no buffering of their
/// own beyond what `R` and `W` already do.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<Empty, StdoutLock<'static>> {
    /// Output-only console holding the process-wide stdout lock. Stdin is
    /// left untouched.
    pub fn stdout() -> Self {
        Console::new(io::empty(), io::stdout().lock())
    }
}

impl Console<StdinLock<'static>, Sink> {
    /// Input-only console holding the process-wide stdin lock. Stdout is
    /// left untouched.
    pub fn stdin() -> Self {
        Console::new(io::stdin().lock(), io::sink())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps `input` and `output` as they are.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `value` in decimal followed by a newline.
    pub fn print_int(&mut self, value: i32) -> io::Result<()> {
        writeln!(self.output, "{value}")
    }

    /// Writes the low byte of `value` as one raw byte.
    pub fn write_int(&mut self, value: i32) -> io::Result<()> {
        self.output.write_all(&[value as u8])
    }

    /// Pushes everything written so far through to the underlying stream;
    /// once this returns `Ok`, other readers of that stream can see it.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    /// Reads one byte, or returns [`END_OF_INPUT`] when the input is closed.
    ///
    /// Blocks until a byte arrives. Never consumes more than the byte it
    /// returns.
    pub fn read_int(&mut self) -> io::Result<i32> {
        let b = loop {
            let buf = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            match buf.first() {
                Some(&b) => break b,
                None => return Ok(END_OF_INPUT),
            }
        };
        self.input.consume(1);
        Ok(i32::from(b))
    }

    /// Gives back the streams without flushing.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
