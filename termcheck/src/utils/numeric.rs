//! # Numeric kinds
//!
//! The numeric checks accept a deliberately narrow literal syntax:
//!
//! - integers: one or more ASCII digits, with a leading `-` only for signed kinds
//! - floats: an optional `-`, digits, a literal `.`, digits
//!
//! No `+` sign, no exponent, no digit separators. A literal that passes the
//! syntax check is then parsed with [`str::parse`] for range comparisons, so
//! values that overflow their kind are still rejected.

use std::{cmp::Ordering, fmt::Display};

/// Represents the Rust numeric type a candidate is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    F32,
    F64,
}

/// A parsed candidate widened to a common representation for comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Unsigned(u128),
    Signed(i128),
    Float(f64),
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Unsigned(a), Self::Unsigned(b)) => a.partial_cmp(b),
            (Self::Signed(a), Self::Signed(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Number {
    /// Inclusive on both ends. Values of different representations never
    /// compare, so a mismatched bound rejects.
    pub(crate) fn within(self, min: Number, max: Number) -> bool {
        matches!(
            (min.partial_cmp(&self), self.partial_cmp(&max)),
            (
                Some(Ordering::Less | Ordering::Equal),
                Some(Ordering::Less | Ordering::Equal)
            )
        )
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned(n) => write!(f, "{}", n),
            Self::Signed(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Parses `$input` as `$t` and widens it into the given [`Number`] variant.
/// Expands into an `Option<Number>`.
macro_rules! parse_as {
    ($input:expr, $t:ty, $variant:ident, $wide:ty) => {
        match $input.parse::<$t>() {
            Ok(value) => Some(Number::$variant(value as $wide)),
            Err(_) => None,
        }
    };
}

impl NumericKind {
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::F32
                | Self::F64
        )
    }

    /// Returns `true` when `input` is a well-formed literal for this kind.
    pub(crate) fn accepts_literal(self, input: &str) -> bool {
        let unsigned = if self.is_signed() {
            input.strip_prefix('-').unwrap_or(input)
        } else {
            input
        };

        if self.is_float() {
            match unsigned.split_once('.') {
                Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
                None => false,
            }
        } else {
            all_digits(unsigned)
        }
    }

    /// Parses `input` as this kind. `None` when the value does not fit.
    pub(crate) fn parse(self, input: &str) -> Option<Number> {
        match self {
            Self::U8 => parse_as!(input, u8, Unsigned, u128),
            Self::U16 => parse_as!(input, u16, Unsigned, u128),
            Self::U32 => parse_as!(input, u32, Unsigned, u128),
            Self::U64 => parse_as!(input, u64, Unsigned, u128),
            Self::U128 => parse_as!(input, u128, Unsigned, u128),
            Self::Usize => parse_as!(input, usize, Unsigned, u128),
            Self::I8 => parse_as!(input, i8, Signed, i128),
            Self::I16 => parse_as!(input, i16, Signed, i128),
            Self::I32 => parse_as!(input, i32, Signed, i128),
            Self::I64 => parse_as!(input, i64, Signed, i128),
            Self::I128 => parse_as!(input, i128, Signed, i128),
            Self::Isize => parse_as!(input, isize, Signed, i128),
            Self::F32 => parse_as!(input, f32, Float, f64),
            Self::F64 => parse_as!(input, f64, Float, f64),
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::Usize => write!(f, "usize"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::I128 => write!(f, "i128"),
            Self::Isize => write!(f, "isize"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Rust primitives usable with [`numeric`](crate::utils::checks::numeric) and
/// [`range`](crate::utils::checks::range).
///
/// Sealed: asking for a numeric check over a non-numeric type does not
/// compile.
pub trait Numeric: sealed::Sealed + Copy + Display {
    const KIND: NumericKind;
    const MIN: Self;
    const MAX: Self;

    fn to_number(self) -> Number;
}

macro_rules! impl_numeric {
    ($($t:ty => $kind:ident, $variant:ident, $wide:ty);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const KIND: NumericKind = NumericKind::$kind;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn to_number(self) -> Number {
                    Number::$variant(self as $wide)
                }
            }
        )*
    };
}

impl_numeric! {
    u8 => U8, Unsigned, u128;
    u16 => U16, Unsigned, u128;
    u32 => U32, Unsigned, u128;
    u64 => U64, Unsigned, u128;
    u128 => U128, Unsigned, u128;
    usize => Usize, Unsigned, u128;
    i8 => I8, Signed, i128;
    i16 => I16, Signed, i128;
    i32 => I32, Signed, i128;
    i64 => I64, Signed, i128;
    i128 => I128, Signed, i128;
    isize => Isize, Signed, i128;
    f32 => F32, Float, f64;
    f64 => F64, Float, f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(NumericKind::I32, "-42", true)]
    #[test_case(NumericKind::I32, "42", true)]
    #[test_case(NumericKind::I32, "+42", false)]
    #[test_case(NumericKind::I32, "-", false)]
    #[test_case(NumericKind::I32, "", false)]
    #[test_case(NumericKind::U8, "-1", false)]
    #[test_case(NumericKind::U8, "007", true)]
    #[test_case(NumericKind::F64, "3.14", true)]
    #[test_case(NumericKind::F64, "-0.5", true)]
    #[test_case(NumericKind::F64, "3", false)]
    #[test_case(NumericKind::F64, "3.", false)]
    #[test_case(NumericKind::F64, ".5", false)]
    #[test_case(NumericKind::F64, "1e5", false)]
    #[test_case(NumericKind::F32, "1.2.3", false)]
    fn test_literal_syntax(kind: NumericKind, input: &str, expected: bool) {
        assert_eq!(kind.accepts_literal(input), expected);
    }

    #[test]
    fn test_parse_overflow_is_none() {
        assert_eq!(NumericKind::U8.parse("256"), None);
        assert_eq!(NumericKind::U8.parse("255"), Some(Number::Unsigned(255)));
        assert_eq!(NumericKind::I8.parse("-128"), Some(Number::Signed(-128)));
    }

    #[test]
    fn test_within_is_inclusive() {
        let (min, max) = (1i32.to_number(), 10i32.to_number());
        assert!(Number::Signed(1).within(min, max));
        assert!(Number::Signed(10).within(min, max));
        assert!(!Number::Signed(0).within(min, max));
        assert!(!Number::Signed(11).within(min, max));
    }

    #[test]
    fn test_within_mismatched_representation_rejects() {
        assert!(!Number::Float(5.0).within(Number::Signed(1), Number::Signed(10)));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", <u16 as Numeric>::KIND), "u16");
        assert_eq!(format!("{}", <f64 as Numeric>::KIND), "f64");
    }
}
