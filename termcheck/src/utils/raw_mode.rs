//! Scoped raw mode for reading a single key.
//!
//! [`RawModeGuard::enter`] switches the terminal to unbuffered, non-echoing
//! input and the guard puts the previous settings back when dropped, so an
//! error while reading still restores the terminal.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use rustix::termios::{self, LocalModes, OptionalActions, SpecialCodeIndex, Termios};
        use std::io;

        /// Holds the settings to restore. `None` when stdin is not a terminal
        /// (piped input), in which case nothing was changed.
        #[derive(Debug)]
        pub struct RawModeGuard {
            original: Option<Termios>,
        }

        impl RawModeGuard {
            /// Clears `ICANON` and `ECHO` on stdin with `VMIN=1`, `VTIME=0`.
            /// Signal keys keep working.
            ///
            /// # Errors
            ///
            /// Returns an error if the terminal attributes cannot be read or set.
            pub fn enter() -> io::Result<Self> {
                let stdin = io::stdin();
                if !termios::isatty(&stdin) {
                    return Ok(Self { original: None });
                }

                let original = termios::tcgetattr(&stdin)?;
                let mut raw = original.clone();
                raw.local_modes.remove(LocalModes::ICANON | LocalModes::ECHO);
                raw.special_codes[SpecialCodeIndex::VMIN] = 1;
                raw.special_codes[SpecialCodeIndex::VTIME] = 0;
                termios::tcsetattr(&stdin, OptionalActions::Now, &raw)?;
                tracing::trace!("raw mode entered");

                Ok(Self {
                    original: Some(original),
                })
            }
        }

        impl Drop for RawModeGuard {
            fn drop(&mut self) {
                if let Some(original) = self.original.take() {
                    if let Err(e) =
                        termios::tcsetattr(io::stdin(), OptionalActions::Now, &original)
                    {
                        tracing::warn!("failed to restore terminal mode: {}", e);
                    } else {
                        tracing::trace!("raw mode left");
                    }
                }
            }
        }
    } else if #[cfg(windows)] {
        use std::io;

        /// Console raw mode through crossterm, which drives `SetConsoleMode`.
        #[derive(Debug)]
        pub struct RawModeGuard {
            _private: (),
        }

        impl RawModeGuard {
            /// # Errors
            ///
            /// Returns an error if the console mode cannot be changed.
            pub fn enter() -> io::Result<Self> {
                crossterm::terminal::enable_raw_mode()?;
                tracing::trace!("raw mode entered");
                Ok(Self { _private: () })
            }
        }

        impl Drop for RawModeGuard {
            fn drop(&mut self) {
                if let Err(e) = crossterm::terminal::disable_raw_mode() {
                    tracing::warn!("failed to restore console mode: {}", e);
                } else {
                    tracing::trace!("raw mode left");
                }
            }
        }
    } else {
        use std::io;

        /// No terminal control on this platform; keys are read as they come.
        #[derive(Debug)]
        pub struct RawModeGuard {
            _private: (),
        }

        impl RawModeGuard {
            pub fn enter() -> io::Result<Self> {
                Ok(Self { _private: () })
            }
        }
    }
}
