//! # Terminal Input Helper
//!
//! This module drives the retry loop: capture a candidate, run the checks,
//! print the first rejection to the diagnostic stream and capture again until
//! every check accepts. There is no retry limit.
//!
//! ## Usage
//!
//! [`Terminal::stdio`] reads keys from the process terminal, echoes to stdout
//! and reports rejections on stderr. [`Terminal::new`] takes any
//! [`KeySource`] and writers, which is how the loop is tested.
//!
//! ### Example 1: Yes or no, one key
//! ```rust,no_run
//! use termcheck::utils::{Style, Terminal, checks};
//!
//! # fn main() -> Result<(), termcheck::Error> {
//! let mut term = Terminal::stdio();
//! let answer = term.ask("Continue (y/n)", Style::Instant, &[checks::is(["y", "n"])])?;
//! println!("The input: {}", answer);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example 2: Scripted keys
//! ```rust
//! use termcheck::utils::{Prompt, ScriptedKeys, Style, Terminal, checks};
//!
//! # fn main() -> Result<(), termcheck::Error> {
//! let keys = ScriptedKeys::from_text("ab\nxyz\n");
//! let mut term = Terminal::new(keys, Vec::<u8>::new(), Vec::<u8>::new());
//!
//! let name = term.input("Name: ", Prompt::new(Style::Basic), &[checks::length(3)])?;
//! assert_eq!(name, "xyz");
//!
//! let (_, out, err) = term.into_parts();
//! assert_eq!(String::from_utf8_lossy(&out), "Name: ab\nName: xyz\n");
//! assert_eq!(String::from_utf8_lossy(&err), "Invalid Input\n");
//! # Ok(())
//! # }
//! ```

use crate::utils::check::Check;
use crate::utils::editor;
use crate::utils::error::Result;
use crate::utils::keys::{KeySource, StdinKeys};
use crate::utils::prompt::{Prompt, Style};
use std::io::{self, Stderr, Stdout, Write};

/// Calls `produce` until its result passes every check, and returns it.
///
/// With no checks the first result is returned as is. Each rejection is
/// written to `diagnostics` followed by a newline, and the rejected candidate
/// is dropped.
///
/// # Errors
///
/// Returns whatever `produce` fails with, or a failed write to `diagnostics`.
/// Rejections are never returned.
pub fn validate<F, W>(mut produce: F, checks: &[Check], diagnostics: &mut W) -> Result<String>
where
    F: FnMut() -> Result<String>,
    W: Write + ?Sized,
{
    if checks.is_empty() {
        return produce();
    }

    let mut attempt: u64 = 1;
    loop {
        let candidate = produce()?;

        match Check::execute(&candidate, checks) {
            Ok(()) => return Ok(candidate),
            Err(rejection) => {
                tracing::debug!(attempt, reason = rejection.message(), "input rejected");
                writeln!(diagnostics, "{}", rejection)?;
                diagnostics.flush()?;
                attempt += 1;
            }
        }
    }
}

/// A key source plus the display and diagnostic sinks of one terminal.
#[derive(Debug)]
pub struct Terminal<K = StdinKeys, O = Stdout, E = Stderr> {
    keys: K,
    out: O,
    err: E,
}

impl Terminal {
    /// Keys from stdin, echo on stdout, rejections on stderr.
    pub fn stdio() -> Self {
        Terminal::new(StdinKeys::new(), io::stdout(), io::stderr())
    }
}

impl<K, O, E> Terminal<K, O, E>
where
    K: KeySource,
    O: Write,
    E: Write,
{
    pub fn new(keys: K, out: O, err: E) -> Self {
        Self { keys, out, err }
    }

    pub fn into_parts(self) -> (K, O, E) {
        (self.keys, self.out, self.err)
    }

    /// Shows `message`, captures input in `prompt.style` and retries until
    /// all `checks` accept. A newline is echoed after every capture.
    ///
    /// # Errors
    ///
    /// Fails only when the key source or a sink does; see
    /// [`Error`](crate::Error).
    pub fn input(&mut self, message: &str, prompt: Prompt, checks: &[Check]) -> Result<String> {
        let Terminal { keys, out, err } = self;

        if prompt.prompt_once {
            write!(out, "{}", message)?;
            out.flush()?;
        }

        let produce = || -> Result<String> {
            if !prompt.prompt_once {
                write!(out, "{}", message)?;
                out.flush()?;
            }
            let candidate = editor::capture(prompt.style, &mut *keys, &mut *out)?;
            writeln!(out)?;
            out.flush()?;
            Ok(candidate)
        };

        validate(produce, checks, err)
    }

    /// Prompts with `"{label}: "` before every attempt.
    ///
    /// # Errors
    ///
    /// See [`Terminal::input`].
    pub fn get(&mut self, label: &str, style: Style, checks: &[Check]) -> Result<String> {
        self.get_with(label, Prompt::new(style), checks)
    }

    /// [`Terminal::get`] with an explicit prompt policy.
    ///
    /// # Errors
    ///
    /// See [`Terminal::input`].
    pub fn get_with(&mut self, label: &str, prompt: Prompt, checks: &[Check]) -> Result<String> {
        self.input(&format!("{}: ", label), prompt, checks)
    }

    /// Asks `"{question}?"` on its own line, once, then reads answers until
    /// one passes.
    ///
    /// # Errors
    ///
    /// See [`Terminal::input`].
    pub fn ask(&mut self, question: &str, style: Style, checks: &[Check]) -> Result<String> {
        self.ask_with(question, Prompt::once(style), checks)
    }

    /// [`Terminal::ask`] with an explicit prompt policy.
    ///
    /// # Errors
    ///
    /// See [`Terminal::input`].
    pub fn ask_with(&mut self, question: &str, prompt: Prompt, checks: &[Check]) -> Result<String> {
        self.input(&format!("{}?\n", question), prompt, checks)
    }
}
