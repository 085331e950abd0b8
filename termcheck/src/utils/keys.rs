//! # Key sources
//!
//! The line editor pulls keys one at a time from a [`KeySource`]. Three are
//! provided:
//!
//! - [`StdinKeys`] reads raw bytes from the process terminal, switching it to
//!   raw mode around every single read.
//! - [`ByteKeys`] decodes keys from any byte stream; [`StdinKeys`] uses it.
//! - [`ScriptedKeys`] replays a fixed sequence, for tests and demos.

use crate::utils::error::{Error, Result};
use crate::utils::raw_mode::RawModeGuard;
use std::collections::VecDeque;
use std::io::{self, Read};

/// One keystroke, classified for the line editor.
///
/// Every variant keeps the character that was actually typed, so a BS and a
/// DEL backspace, or a `\r` and a `\n` Enter, stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Newline(char),
    Backspace(char),
    Char(char),
}

impl Key {
    /// Classifies a single-byte key. Enter arrives as `\n` or `\r` and
    /// backspace as DEL or BS depending on platform and terminal settings.
    pub fn from_byte(byte: u8) -> Key {
        Key::from(byte as char)
    }

    /// The character that was typed.
    pub fn as_char(self) -> char {
        match self {
            Key::Newline(c) | Key::Backspace(c) | Key::Char(c) => c,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        match c {
            '\n' | '\r' => Key::Newline(c),
            '\x7f' | '\x08' => Key::Backspace(c),
            other => Key::Char(other),
        }
    }
}

/// Supplies one blocking keystroke at a time, without echo or line buffering.
pub trait KeySource {
    /// # Errors
    ///
    /// Returns [`Error::Closed`] once no more keys can arrive, or
    /// [`Error::Io`] if the source cannot be used at all.
    fn next_key(&mut self) -> Result<Key>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> Result<Key> {
        (**self).next_key()
    }
}

/// Keys from the process's standard input.
#[derive(Debug)]
pub struct StdinKeys {
    bytes: ByteKeys<io::Stdin>,
}

impl StdinKeys {
    pub fn new() -> Self {
        Self {
            bytes: ByteKeys::new(io::stdin()),
        }
    }
}

impl Default for StdinKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for StdinKeys {
    fn next_key(&mut self) -> Result<Key> {
        let _raw = RawModeGuard::enter()?;
        self.bytes.next_key()
    }
}

/// Consecutive identical read failures tolerated before giving up.
pub const MAX_READ_RETRIES: usize = 8;

/// Keys decoded from a raw byte stream, one UTF-8 sequence per key.
///
/// A malformed sequence becomes U+FFFD; a byte that broke a sequence is kept
/// and starts the next key. Read failures are logged and the read is
/// attempted again, until the same error kind repeats [`MAX_READ_RETRIES`]
/// times in a row.
///
/// ```rust
/// use termcheck::utils::{ByteKeys, Key, KeySource};
///
/// let mut keys = ByteKeys::new("é\n".as_bytes());
/// assert_eq!(keys.next_key().ok(), Some(Key::Char('é')));
/// assert_eq!(keys.next_key().ok(), Some(Key::Newline('\n')));
/// ```
#[derive(Debug)]
pub struct ByteKeys<R> {
    reader: R,
    pending: Option<u8>,
}

impl<R: Read> ByteKeys<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    fn next_byte(&mut self) -> Result<u8> {
        match self.pending.take() {
            Some(byte) => Ok(byte),
            None => read_byte(&mut self.reader),
        }
    }
}

impl<R: Read> KeySource for ByteKeys<R> {
    /// # Errors
    ///
    /// Returns [`Error::Closed`] at end of stream, including in the middle
    /// of a sequence, and [`Error::Io`] for a read failure that keeps
    /// repeating.
    fn next_key(&mut self) -> Result<Key> {
        let lead = self.next_byte()?;
        let width = match utf8_width(lead) {
            Some(1) => return Ok(Key::from_byte(lead)),
            Some(width) => width,
            None => return Ok(Key::Char(char::REPLACEMENT_CHARACTER)),
        };

        let mut buf = [lead, 0, 0, 0];
        for slot in &mut buf[1..width] {
            let byte = self.next_byte()?;
            if byte & 0xC0 != 0x80 {
                self.pending = Some(byte);
                return Ok(Key::Char(char::REPLACEMENT_CHARACTER));
            }
            *slot = byte;
        }

        let c = std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Key::from(c))
    }
}

/// Sequence length announced by a UTF-8 lead byte. `None` for a stray
/// continuation byte or a byte that never starts a sequence.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8> {
    let mut byte = [0u8; 1];
    let mut last_failure: Option<io::ErrorKind> = None;
    let mut repeats = 0;

    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Err(Error::Closed),
            Ok(_) => return Ok(byte[0]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                if last_failure == Some(e.kind()) {
                    repeats += 1;
                } else {
                    last_failure = Some(e.kind());
                    repeats = 1;
                }
                if repeats >= MAX_READ_RETRIES {
                    return Err(Error::Io(e));
                }
                tracing::warn!("key read failed, reading again: {}", e);
            }
        }
    }
}

/// Replays a fixed list of keys, then reports [`Error::Closed`].
///
/// ```rust
/// use termcheck::utils::{Key, KeySource, ScriptedKeys};
///
/// let mut keys = ScriptedKeys::from_text("ab\x7f\n");
/// assert_eq!(keys.next_key().ok(), Some(Key::Char('a')));
/// assert_eq!(keys.remaining(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One key per character; `\n` is Enter and `\x7f` is backspace.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(Key::from))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(Error::Closed)
    }
}
