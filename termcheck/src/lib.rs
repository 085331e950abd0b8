//! # termcheck
//!
//! A terminal input toolkit for interactive CLI applications. It reads keys
//! straight from the terminal, echoes them according to an input [`Style`],
//! and keeps asking until the answer passes every [`Check`] you give it.
//!
//! ## Features
//! - **Line capture** with backspace correction, echoed as typed (`Basic`) or
//!   masked with `*` (`Masked`).
//! - **Instant capture** of a single key without waiting for Enter.
//! - **Composable checks**: option sets, full-match regexes, exact length,
//!   character sets, numeric literals and inclusive ranges, plus `custom`,
//!   `inverse` and `any` combinators.
//! - **Retry loop** that prints the rejection message on stderr and prompts
//!   again, once or before every attempt.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use termcheck::utils::{Style, Terminal, checks};
//!
//! # fn main() -> Result<(), termcheck::Error> {
//! let mut term = Terminal::stdio();
//!
//! let name = term.get("Name", Style::Basic, &[checks::length(3)])?;
//! let pin = term.get(
//!     "PIN",
//!     Style::Masked,
//!     &[checks::custom(checks::consists_of("0-9")?, "Digits only")],
//! )?;
//! let threads = term.ask(
//!     "How many threads (1-16)",
//!     Style::Basic,
//!     &[checks::range::<u8>(1, 16)],
//! )?;
//!
//! println!("{} {} {}", name, pin.len(), threads);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Rejected input never leaves the retry loop. The [`Error`] returned by the
//! input calls only covers malformed check patterns, a closed key stream and
//! terminal I/O failures.
//!
//! ## Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Style`] and
//!   [`Prompt`](utils::Prompt), so prompt settings can live in config files.
//!
//! [`Style`]: utils::Style
//! [`Check`]: utils::Check

pub mod utils;

pub use utils::error::{Error, Result};
