//! The prompt and output collaborator used by [`Table`](crate::Table).

/// Line-based console the table talks to.
pub trait Console {
    /// Asks a yes/no question and returns the answer.
    fn ask_yes_no(&mut self, message: &str) -> bool;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str);

    /// Clears the screen before the table is redrawn.
    fn clear(&mut self) {}
}

impl<C: Console + ?Sized> Console for &mut C {
    fn ask_yes_no(&mut self, message: &str) -> bool {
        (**self).ask_yes_no(message)
    }

    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

#[cfg(feature = "std")]
pub use self::std_console::StdConsole;

#[cfg(feature = "std")]
mod std_console {
    use std::io::{self, BufRead, ErrorKind, Write};

    use super::Console;

    /// What a single read from the input produced.
    enum Reply {
        /// A trimmed, lowercased line.
        Line(String),
        /// A line was consumed but could not be decoded.
        Garbled,
        /// End of input, or the input failed for good.
        Closed,
    }

    /// A [`Console`] over standard input and output.
    ///
    /// Answers `y`/`yes`/`n`/`no` in any case are accepted; anything else,
    /// including a line that is not valid UTF-8, asks again. End of input
    /// counts as "no".
    #[derive(Debug)]
    pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
        input: R,
        output: W,
        ansi: bool,
    }

    impl StdConsole {
        /// Creates a console over the process's stdin and stdout.
        #[must_use]
        pub fn new() -> Self {
            Self {
                input: io::stdin().lock(),
                output: io::stdout(),
                ansi: true,
            }
        }
    }

    impl Default for StdConsole {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<R: BufRead, W: Write> StdConsole<R, W> {
        /// Creates a console over arbitrary streams. Screen clearing is
        /// disabled.
        pub const fn with_streams(input: R, output: W) -> Self {
            Self {
                input,
                output,
                ansi: false,
            }
        }

        /// Consumes the console and returns the output stream.
        pub fn into_output(self) -> W {
            self.output
        }

        fn read_answer(&mut self) -> Reply {
            loop {
                let mut line = String::new();
                match self.input.read_line(&mut line) {
                    Ok(0) => return Reply::Closed,
                    Ok(_) => return Reply::Line(line.trim().to_lowercase()),
                    Err(err) if err.kind() == ErrorKind::Interrupted => {}
                    // The undecodable line has already been consumed.
                    Err(err) if err.kind() == ErrorKind::InvalidData => return Reply::Garbled,
                    Err(_) => return Reply::Closed,
                }
            }
        }
    }

    impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
        fn ask_yes_no(&mut self, message: &str) -> bool {
            loop {
                let _ = write!(self.output, "{message} (y/n): ");
                let _ = self.output.flush();

                let answer = match self.read_answer() {
                    Reply::Line(answer) => answer,
                    Reply::Garbled => String::new(),
                    Reply::Closed => {
                        let _ = writeln!(self.output);
                        return false;
                    }
                };

                match answer.as_str() {
                    "y" | "yes" => return true,
                    "n" | "no" => return false,
                    _ => {
                        let _ = writeln!(self.output, "Please answer y or n.");
                    }
                }
            }
        }

        fn write_line(&mut self, line: &str) {
            let _ = writeln!(self.output, "{line}");
        }

        fn clear(&mut self) {
            if self.ansi {
                let _ = write!(self.output, "\u{1b}[2J\u{1b}[H");
                let _ = self.output.flush();
            }
        }
    }

}
