//! # Line editor
//!
//! Turns keys into a candidate string. Line capture (`Basic`, `Masked`) runs
//! until Enter and supports single-character backspace; instant capture takes
//! exactly one key.
//!
//! All echo goes to the given sink and is flushed per key so the user sees it
//! while typing.

use crate::utils::error::Result;
use crate::utils::keys::{Key, KeySource};
use crate::utils::prompt::Style;
use std::io::Write;

/// Moves the cursor back over the last echoed character and blanks it.
pub const ERASE_LAST: &str = "\x08 \x08";

/// Reads keys until Enter and returns the line without the newline.
///
/// With a `mask`, every typed key is echoed as the mask instead of itself.
/// Backspace on an empty line does nothing.
///
/// # Errors
///
/// Propagates key source failures and writes that fail.
pub fn capture_line<K, W>(keys: &mut K, out: &mut W, mask: Option<char>) -> Result<String>
where
    K: KeySource + ?Sized,
    W: Write + ?Sized,
{
    let mut line = String::new();

    loop {
        match keys.next_key()? {
            Key::Newline(_) => break,
            Key::Backspace(_) => {
                if line.pop().is_some() {
                    out.write_all(ERASE_LAST.as_bytes())?;
                }
            }
            Key::Char(c) => {
                line.push(c);
                write!(out, "{}", mask.unwrap_or(c))?;
            }
        }
        out.flush()?;
    }

    Ok(line)
}

/// Reads one key and returns it as a one-character string.
///
/// The echo is uppercased; the returned string keeps the original case.
///
/// # Errors
///
/// Propagates key source failures and writes that fail.
pub fn capture_instant<K, W>(keys: &mut K, out: &mut W) -> Result<String>
where
    K: KeySource + ?Sized,
    W: Write + ?Sized,
{
    let key = keys.next_key()?.as_char();
    for upper in key.to_uppercase() {
        write!(out, "{}", upper)?;
    }
    out.flush()?;

    Ok(key.to_string())
}

/// Dispatches to the capture matching `style`.
///
/// # Errors
///
/// Propagates key source failures and writes that fail.
pub fn capture<K, W>(style: Style, keys: &mut K, out: &mut W) -> Result<String>
where
    K: KeySource + ?Sized,
    W: Write + ?Sized,
{
    match style {
        Style::Basic | Style::Masked => capture_line(keys, out, style.mask()),
        Style::Instant => capture_instant(keys, out),
    }
}
