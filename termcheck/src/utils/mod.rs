pub mod check;
pub use check::{Check, INVALID_INPUT_MESSAGE, InvalidInput, Outcome, Validate};

pub mod checks;

pub mod editor;

pub mod error;

pub mod keys;
pub use keys::{ByteKeys, Key, KeySource, ScriptedKeys, StdinKeys};

pub mod numeric;
pub use numeric::{Numeric, NumericKind};

pub mod prompt;
pub use prompt::{DEFAULT_MASK, Prompt, Style};

mod raw_mode;
pub use raw_mode::RawModeGuard;

pub mod terminal;
pub use terminal::{Terminal, validate};
